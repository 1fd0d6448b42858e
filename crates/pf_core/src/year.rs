//! Breach year keys: a calendar year or the literal `"Unknown"`.

use core::cmp::Ordering;
use core::fmt;

/// Label used for records whose year could not be resolved.
pub const UNKNOWN_YEAR_LABEL: &str = "Unknown";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum YearKey {
    Year(i32),
    Unknown,
}

impl YearKey {
    pub fn from_resolved(year: Option<i32>) -> YearKey {
        year.map_or(YearKey::Unknown, YearKey::Year)
    }
}

/// Numeric years ascending; `Unknown` after every year.
impl Ord for YearKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (YearKey::Year(a), YearKey::Year(b)) => a.cmp(b),
            (YearKey::Year(_), YearKey::Unknown) => Ordering::Less,
            (YearKey::Unknown, YearKey::Year(_)) => Ordering::Greater,
            (YearKey::Unknown, YearKey::Unknown) => Ordering::Equal,
        }
    }
}

impl PartialOrd for YearKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Year(y) => write!(f, "{y}"),
            YearKey::Unknown => f.write_str(UNKNOWN_YEAR_LABEL),
        }
    }
}

/// Wire shape: a JSON number for years, the string `"Unknown"` otherwise.
#[cfg(feature = "serde")]
impl serde::Serialize for YearKey {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            YearKey::Year(y) => s.serialize_i32(*y),
            YearKey::Unknown => s.serialize_str(UNKNOWN_YEAR_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sorts_after_all_years() {
        let mut keys = vec![
            YearKey::Unknown,
            YearKey::Year(2021),
            YearKey::Year(1999),
            YearKey::Year(i32::MAX),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                YearKey::Year(1999),
                YearKey::Year(2021),
                YearKey::Year(i32::MAX),
                YearKey::Unknown
            ]
        );
    }

    #[test]
    fn display_tokens() {
        assert_eq!(YearKey::Year(2019).to_string(), "2019");
        assert_eq!(YearKey::Unknown.to_string(), "Unknown");
        assert_eq!(YearKey::from_resolved(None), YearKey::Unknown);
    }
}
