// speed.rs - Maps the linear 1-20 speed control to a sleep interval

use std::time::Duration;

pub const MIN_PLAY_SPEED: u8 = 1;
pub const MAX_PLAY_SPEED: u8 = 20;

// Base of the log curve: speed 1 sleeps 1s, speed 20 sleeps ~20ms, so
// perceived speed ramps smoothly instead of linearly.
const LOG_BASE: f64 = 0.047;

/// Sleep interval between generations for a given play speed.
/// Out-of-range speeds are clamped into `1..=20`.
pub fn play_interval(speed: u8) -> Duration {
    let speed = speed.clamp(MIN_PLAY_SPEED, MAX_PLAY_SPEED) as f64;
    let seconds = speed.ln() / LOG_BASE.ln() + 1.0;
    Duration::from_secs_f64(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slowest_speed_sleeps_one_second() {
        assert_eq!(play_interval(MIN_PLAY_SPEED), Duration::from_secs(1));
    }

    #[test]
    fn fastest_speed_is_sub_second() {
        let interval = play_interval(MAX_PLAY_SPEED);
        assert!(interval < Duration::from_millis(50));
        assert!(interval > Duration::ZERO);
    }

    #[test]
    fn interval_decreases_as_speed_increases() {
        for speed in MIN_PLAY_SPEED..MAX_PLAY_SPEED {
            assert!(play_interval(speed) > play_interval(speed + 1));
        }
    }

    #[test]
    fn out_of_range_speeds_clamp() {
        assert_eq!(play_interval(0), play_interval(MIN_PLAY_SPEED));
        assert_eq!(play_interval(200), play_interval(MAX_PLAY_SPEED));
    }
}
