//! Durations that can be formatted.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// A duration unit addressable from a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// All units, largest first.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// The unit a duration pattern token refers to, by its first character.
    pub fn from_token(token: &str) -> Option<Unit> {
        match token.chars().next()? {
            'S' => Some(Unit::Millisecond),
            's' => Some(Unit::Second),
            'm' => Some(Unit::Minute),
            'h' => Some(Unit::Hour),
            'd' => Some(Unit::Day),
            'M' => Some(Unit::Month),
            'y' => Some(Unit::Year),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }

    /// Length of the unit in milliseconds, with casual month and year
    /// lengths (30 and 365 days).
    pub fn millis(&self) -> f64 {
        match self {
            Unit::Year => 365.0 * 86_400_000.0,
            Unit::Month => 30.0 * 86_400_000.0,
            Unit::Day => 86_400_000.0,
            Unit::Hour => 3_600_000.0,
            Unit::Minute => 60_000.0,
            Unit::Second => 1_000.0,
            Unit::Millisecond => 1.0,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Unit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.name() == s || s.strip_suffix('s') == Some(unit.name()))
            .ok_or_else(|| FormatError::invalid_option("unit", s))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read access to a duration, plus reprojection onto a set of units.
pub trait DurationLike {
    /// Re-express this duration using only `units`.
    ///
    /// `units` arrives in pattern order and may contain duplicates.
    fn shift_to(&self, units: &[Unit]) -> Self
    where
        Self: Sized;

    /// Magnitude of one unit.
    fn get(&self, unit: Unit) -> f64;
}

/// A duration stored as a magnitude per unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    values: [f64; 7],
}

impl Duration {
    /// A duration with every unit at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one unit's magnitude.
    pub fn with(mut self, unit: Unit, value: f64) -> Self {
        self.values[unit.index()] = value;
        self
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::new().with(Unit::Millisecond, millis as f64)
    }

    /// Total length in milliseconds.
    pub fn as_millis(&self) -> f64 {
        Unit::ALL
            .iter()
            .map(|unit| self.values[unit.index()] * unit.millis())
            .sum()
    }
}

impl DurationLike for Duration {
    /// The largest requested units take whole amounts; the smallest requested
    /// unit takes the remainder, including any fraction.
    fn shift_to(&self, units: &[Unit]) -> Self {
        let mut wanted: Vec<Unit> = units.to_vec();
        wanted.sort();
        wanted.dedup();

        let Some((smallest, larger)) = wanted.split_last() else {
            return *self;
        };
        let mut remaining = self.as_millis();
        let mut shifted = Duration::new();
        for unit in larger {
            let whole = (remaining / unit.millis()).trunc();
            remaining -= whole * unit.millis();
            shifted.values[unit.index()] = whole;
        }
        shifted.values[smallest.index()] = remaining / smallest.millis();
        shifted
    }

    fn get(&self, unit: Unit) -> f64 {
        self.values[unit.index()]
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::TimeDelta> for Duration {
    fn from(delta: chrono::TimeDelta) -> Self {
        let millis = delta.num_milliseconds();
        // Sub-millisecond precision is kept as a fraction
        let nanos = delta - chrono::TimeDelta::milliseconds(millis);
        let fraction = nanos.num_nanoseconds().unwrap_or(0) as f64 / 1_000_000.0;
        Self::new().with(Unit::Millisecond, millis as f64 + fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_token() {
        assert_eq!(Unit::from_token("hh"), Some(Unit::Hour));
        assert_eq!(Unit::from_token("SSS"), Some(Unit::Millisecond));
        assert_eq!(Unit::from_token("MM"), Some(Unit::Month));
        assert_eq!(Unit::from_token("w"), None);
        assert_eq!(Unit::from_token(""), None);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("hours".parse::<Unit>(), Ok(Unit::Hour));
        assert_eq!("minute".parse::<Unit>(), Ok(Unit::Minute));
        assert!("fortnight".parse::<Unit>().is_err());
    }

    #[test]
    fn test_shift_to_carries_down() {
        let dur = Duration::new().with(Unit::Hour, 1.0).with(Unit::Minute, 5.0);
        let shifted = dur.shift_to(&[Unit::Minute]);
        assert_eq!(shifted.get(Unit::Minute), 65.0);
        assert_eq!(shifted.get(Unit::Hour), 0.0);
    }

    #[test]
    fn test_shift_to_carries_up() {
        let dur = Duration::from_millis(3_909_000);
        let shifted = dur.shift_to(&[Unit::Hour, Unit::Minute, Unit::Second]);
        assert_eq!(shifted.get(Unit::Hour), 1.0);
        assert_eq!(shifted.get(Unit::Minute), 5.0);
        assert_eq!(shifted.get(Unit::Second), 9.0);
    }

    #[test]
    fn test_shift_to_keeps_fraction_in_smallest_unit() {
        let dur = Duration::new().with(Unit::Minute, 90.0);
        let shifted = dur.shift_to(&[Unit::Hour]);
        assert_eq!(shifted.get(Unit::Hour), 1.5);
    }

    #[test]
    fn test_shift_to_ignores_order_and_duplicates() {
        let dur = Duration::new().with(Unit::Day, 1.0);
        let shifted = dur.shift_to(&[Unit::Minute, Unit::Hour, Unit::Minute]);
        assert_eq!(shifted.get(Unit::Hour), 24.0);
        assert_eq!(shifted.get(Unit::Minute), 0.0);
    }

    #[test]
    fn test_shift_to_empty_is_identity() {
        let dur = Duration::new().with(Unit::Second, 42.0);
        assert_eq!(dur.shift_to(&[]), dur);
    }

    #[test]
    fn test_casual_month() {
        let dur = Duration::new().with(Unit::Day, 45.0);
        let shifted = dur.shift_to(&[Unit::Month, Unit::Day]);
        assert_eq!(shifted.get(Unit::Month), 1.0);
        assert_eq!(shifted.get(Unit::Day), 15.0);
    }
}
