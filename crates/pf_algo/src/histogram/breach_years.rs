//! Breach-year distribution.
//!
//! Keys are `YearKey`s, so uniqueness and display order come from the map
//! itself: years ascending, `Unknown` last. Years with no breaches are not
//! filled in.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

use pf_core::model::BreachRecord;
use pf_core::year::YearKey;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreachHistogram {
    counts: BTreeMap<YearKey, usize>,
}

impl BreachHistogram {
    pub fn get(&self, key: YearKey) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Keys in display order.
    pub fn display_order(&self) -> Vec<YearKey> {
        self.counts.keys().copied().collect()
    }

    /// `(key, count)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (YearKey, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

/// Wire shape: `{"counts": {"2019": 2, "Unknown": 1}, "order": [2019, "Unknown"]}`.
#[cfg(feature = "serde")]
impl Serialize for BreachHistogram {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("BreachHistogram", 2)?;
        st.serialize_field("counts", &self.counts)?;
        st.serialize_field("order", &self.display_order())?;
        st.end()
    }
}

pub fn histogram_breach_years(records: &[BreachRecord]) -> BreachHistogram {
    let mut counts = BTreeMap::new();
    for r in records {
        *counts.entry(YearKey::from_resolved(r.year)).or_insert(0) += 1;
    }
    BreachHistogram { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: Option<i32>) -> BreachRecord {
        BreachRecord { year, ..BreachRecord::default() }
    }

    #[test]
    fn unknown_goes_last() {
        let h = histogram_breach_years(&[rec(None), rec(Some(2019)), rec(Some(2019)), rec(Some(2012))]);
        assert_eq!(
            h.display_order(),
            vec![YearKey::Year(2012), YearKey::Year(2019), YearKey::Unknown]
        );
        assert_eq!(h.get(YearKey::Year(2019)), 2);
        assert_eq!(h.get(YearKey::Unknown), 1);
        assert_eq!(h.get(YearKey::Year(2000)), 0);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn no_zero_filling() {
        let h = histogram_breach_years(&[rec(Some(2010)), rec(Some(2015))]);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(histogram_breach_years(&[]).is_empty());
    }
}
