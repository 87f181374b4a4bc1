use serde::{Deserialize, Serialize};

use crate::constants::time_constants::TIME_START;

/// Phases of the day, derived from the wall-clock hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    DeepNight, // 00:00 - 05:00
    Dawn,      // 05:00 - 09:00
    Day,       // 09:00 - 17:00
    Dusk,      // 17:00 - 20:00
    Night,     // 20:00 - 00:00
}

impl DayPhase {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            h if h < 5 => DayPhase::DeepNight,
            h if h < 9 => DayPhase::Dawn,
            h if h < 17 => DayPhase::Day,
            h if h < 20 => DayPhase::Dusk,
            _ => DayPhase::Night,
        }
    }

    /// Label handed to the lore service
    pub fn label(&self) -> &'static str {
        match self {
            DayPhase::DeepNight => "Deep Night",
            DayPhase::Dawn => "Dawn",
            DayPhase::Day => "Day",
            DayPhase::Dusk => "Dusk",
            DayPhase::Night => "Night",
        }
    }
}

/// Process-wide day cycle as a scalar in [0, 1).
///
/// Advanced monotonically (wrapping) by the simulation loop; read by the
/// stats snapshot and the lighting collaborator.
#[derive(Debug, Clone, Copy)]
pub struct WorldClock {
    time: f32,
    day_length: f32,
}

impl WorldClock {
    pub fn new(day_length: f32) -> Self {
        Self {
            time: TIME_START,
            day_length,
        }
    }

    pub fn with_time(day_length: f32, time: f32) -> Self {
        Self {
            time: time.rem_euclid(1.0),
            day_length,
        }
    }

    /// Normalized time of day in [0, 1)
    pub fn time_of_day(&self) -> f32 {
        self.time
    }

    /// Current hour (0-23)
    pub fn hour(&self) -> u32 {
        (self.time * 24.0) as u32 % 24
    }

    pub fn phase(&self) -> DayPhase {
        DayPhase::from_hour(self.hour())
    }

    /// Advance by a real-time delta, wrapping at midnight
    pub fn advance(&mut self, dt: f32) {
        self.time = (self.time + dt / self.day_length).fract();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_thresholds() {
        assert_eq!(DayPhase::from_hour(0), DayPhase::DeepNight);
        assert_eq!(DayPhase::from_hour(4), DayPhase::DeepNight);
        assert_eq!(DayPhase::from_hour(5), DayPhase::Dawn);
        assert_eq!(DayPhase::from_hour(8), DayPhase::Dawn);
        assert_eq!(DayPhase::from_hour(9), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(16), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(17), DayPhase::Dusk);
        assert_eq!(DayPhase::from_hour(19), DayPhase::Dusk);
        assert_eq!(DayPhase::from_hour(20), DayPhase::Night);
        assert_eq!(DayPhase::from_hour(23), DayPhase::Night);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DayPhase::DeepNight.label(), "Deep Night");
        assert_eq!(DayPhase::Day.label(), "Day");
    }

    #[test]
    fn test_advance_wraps() {
        let mut clock = WorldClock::with_time(10.0, 0.95);
        clock.advance(1.0); // +0.1 of a day
        assert!((clock.time_of_day() - 0.05).abs() < 1e-5);
        assert!(clock.time_of_day() < 1.0);
    }

    #[test]
    fn test_hour_from_scalar() {
        let clock = WorldClock::with_time(600.0, 0.43);
        assert_eq!(clock.hour(), 10);
        assert_eq!(clock.phase(), DayPhase::Day);

        let midnight = WorldClock::with_time(600.0, 0.0);
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.phase(), DayPhase::DeepNight);
    }
}
