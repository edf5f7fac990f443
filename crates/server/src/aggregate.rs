//! Reductions applied to each page of a walk.

use std::collections::HashMap;
use std::hash::Hash;

/// Folds pages of `T` into a single result.
pub trait Aggregator<T> {
    type Output;

    /// Absorb one page, in page order.
    fn absorb(&mut self, items: Vec<T>);

    /// Produce the final result.
    fn finish(self) -> Self::Output;
}

// =============================================================================
// Append-all
// =============================================================================

/// Collects every item from every page, preserving order.
#[derive(Debug, Clone)]
pub struct AppendAll<T> {
    items: Vec<T>,
}

impl<T> Default for AppendAll<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Aggregator<T> for AppendAll<T> {
    type Output = Vec<T>;

    fn absorb(&mut self, items: Vec<T>) {
        self.items.extend(items);
    }

    fn finish(self) -> Vec<T> {
        self.items
    }
}

// =============================================================================
// Keyed-sum
// =============================================================================

/// A record contributing `quantity` to `key`.
///
/// Records without a key are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<K, L> {
    pub key: Option<K>,
    pub label: L,
    pub quantity: i64,
}

/// Running total for one key.
///
/// Totals are `i128`; summing `i64` quantities into them cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedTotal<K, L> {
    pub key: K,
    /// Label of the first record seen for this key.
    pub label: L,
    pub total: i128,
}

/// Sums quantities per key, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct KeyedSum<K, L> {
    index: HashMap<K, usize>,
    totals: Vec<KeyedTotal<K, L>>,
}

impl<K, L> Default for KeyedSum<K, L> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            totals: Vec::new(),
        }
    }
}

impl<K, L> Aggregator<Keyed<K, L>> for KeyedSum<K, L>
where
    K: Eq + Hash + Clone,
{
    type Output = Totals<K, L>;

    fn absorb(&mut self, items: Vec<Keyed<K, L>>) {
        for item in items {
            let Some(key) = item.key else {
                continue;
            };

            if let Some(&slot) = self.index.get(&key) {
                if let Some(entry) = self.totals.get_mut(slot) {
                    entry.total += i128::from(item.quantity);
                }
            } else {
                self.index.insert(key.clone(), self.totals.len());
                self.totals.push(KeyedTotal {
                    key,
                    label: item.label,
                    total: i128::from(item.quantity),
                });
            }
        }
    }

    fn finish(self) -> Totals<K, L> {
        Totals(self.totals)
    }
}

/// Per-key totals in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals<K, L>(Vec<KeyedTotal<K, L>>);

/// A total with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<K, L> {
    pub rank: usize,
    pub key: K,
    pub label: L,
    pub total: i128,
}

impl<K: PartialEq, L> Totals<K, L> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total for `key`, if any record carried it.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<i128> {
        self.0.iter().find(|t| &t.key == key).map(|t| t.total)
    }

    /// Sort by total descending and keep the top `limit`.
    ///
    /// Equal totals keep first-seen order.
    #[must_use]
    pub fn ranked(self, limit: usize) -> Vec<Ranked<K, L>> {
        let mut totals = self.0;
        // `sort_by` is stable
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, t)| Ranked {
                rank: i + 1,
                key: t.key,
                label: t.label,
                total: t.total,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: Option<&'static str>, quantity: i64) -> Keyed<&'static str, String> {
        Keyed {
            key,
            label: key.map_or_else(String::new, |k| format!("Product {k}")),
            quantity,
        }
    }

    #[test]
    fn test_append_all_preserves_page_order() {
        let mut agg = AppendAll::default();
        agg.absorb(vec![1, 2]);
        agg.absorb(vec![]);
        agg.absorb(vec![3]);
        assert_eq!(agg.finish(), vec![1, 2, 3]);
    }

    #[test]
    fn test_keyed_sum_across_pages() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![item(Some("A"), 3)]);
        agg.absorb(vec![item(Some("A"), 5), item(Some("B"), 2)]);
        let totals = agg.finish();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get(&"A"), Some(8));
        assert_eq!(totals.get(&"B"), Some(2));

        let ranked = totals.ranked(2);
        assert_eq!(
            ranked
                .iter()
                .map(|r| (r.rank, r.key, r.total))
                .collect::<Vec<_>>(),
            vec![(1, "A", 8), (2, "B", 2)]
        );
    }

    #[test]
    fn test_keyed_sum_drops_missing_keys() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![item(None, 10), item(Some("A"), 1), item(None, 4)]);
        let totals = agg.finish();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get(&"A"), Some(1));
    }

    #[test]
    fn test_keyed_sum_keeps_first_label() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![Keyed {
            key: Some(1),
            label: "Old title",
            quantity: 1,
        }]);
        agg.absorb(vec![Keyed {
            key: Some(1),
            label: "Renamed",
            quantity: 1,
        }]);

        let ranked = agg.finish().ranked(10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].label, "Old title");
        assert_eq!(ranked[0].total, 2);
    }

    #[test]
    fn test_ranking_ties_keep_first_seen_order() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![item(Some("C"), 2), item(Some("A"), 5)]);
        agg.absorb(vec![item(Some("B"), 2), item(Some("D"), 7)]);

        let keys: Vec<_> = agg.finish().ranked(10).into_iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_keyed_sum_is_exact_past_i64_max() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![item(Some("A"), i64::MAX)]);
        agg.absorb(vec![item(Some("A"), i64::MAX), item(Some("A"), 2)]);

        let expected = i128::from(i64::MAX) * 2 + 2;
        assert_eq!(agg.finish().get(&"A"), Some(expected));
    }

    #[test]
    fn test_ranking_truncates_to_limit() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![item(Some("A"), 1), item(Some("B"), 2), item(Some("C"), 3)]);

        let ranked = agg.finish().ranked(2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].key, "B");
    }

    #[test]
    fn test_ranking_zero_limit_is_empty() {
        let mut agg = KeyedSum::default();
        agg.absorb(vec![item(Some("A"), 1)]);
        assert!(agg.finish().ranked(0).is_empty());
    }
}
