// life-engine - sparse Game of Life board engine
//
// The board itself (dimensions + live-cell set), the persisted layout
// codec, the play-speed curve and the board-size input validator. No I/O
// beyond the layout file helpers, no GUI dependencies.

pub mod board;
pub mod layout;
pub mod speed;
pub mod validate;

pub use board::{Board, BoardError, Cell, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use layout::{Layout, LayoutError};
pub use speed::{MAX_PLAY_SPEED, MIN_PLAY_SPEED, play_interval};
pub use validate::{SizeEntry, validate_size_entry};
