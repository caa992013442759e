use std::fmt::Display;

/// A non-negative distance in meters.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Distance(f64);

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        debug_assert!(meters >= 0.0, "distance must not be negative, got {}", meters);
        Distance(meters)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// Whole meters below one kilometer, kilometers with two decimals from there on.
/// Honors width and alignment so it can be used in padded table columns.
impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = if self.0 < 1000.0 {
            format!("{:.0}m", self.0)
        } else {
            format!("{:.2}km", self.kilometers())
        };
        f.pad(&formatted)
    }
}
