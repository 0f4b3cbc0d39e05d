// patterns.rs - Built-in board layouts

use life_engine::Layout;

pub struct Pattern {
    pub name: &'static str,
    pub size: u32,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// A square layout ready for `Board::load`.
    pub fn layout(&self) -> Layout {
        Layout {
            rows: self.size,
            columns: self.size,
            cells: self.cells.to_vec(),
        }
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        size: 50,
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Pattern {
        name: "Blinker",
        size: 50,
        cells: &[(25, 24), (25, 25), (25, 26)],
    },
    Pattern {
        name: "Toad",
        size: 50,
        cells: &[(24, 25), (24, 26), (24, 27), (25, 24), (25, 25), (25, 26)],
    },
    Pattern {
        name: "Beacon",
        size: 50,
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        size: 50,
        cells: &[
            // Top section
            (20, 24), (20, 25), (20, 26), (20, 30), (20, 31), (20, 32),
            (22, 22), (22, 27), (22, 29), (22, 34),
            (23, 22), (23, 27), (23, 29), (23, 34),
            (24, 22), (24, 27), (24, 29), (24, 34),
            (25, 24), (25, 25), (25, 26), (25, 30), (25, 31), (25, 32),
            // Bottom section (mirrored)
            (27, 24), (27, 25), (27, 26), (27, 30), (27, 31), (27, 32),
            (28, 22), (28, 27), (28, 29), (28, 34),
            (29, 22), (29, 27), (29, 29), (29, 34),
            (30, 22), (30, 27), (30, 29), (30, 34),
            (32, 24), (32, 25), (32, 26), (32, 30), (32, 31), (32, 32),
        ],
    },
    Pattern {
        name: "R-pentomino",
        size: 50,
        cells: &[(25, 25), (25, 26), (24, 26), (26, 25), (26, 24)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        size: 50,
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];
