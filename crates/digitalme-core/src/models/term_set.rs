use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::text::normalize_term;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct WeightedTerm {
    pub term: String,
    /// Relevance share in (0.0, 1.0].
    pub weight: f64,
}

/// Bounded, duplicate-free term list ordered by weight descending.
/// Serializes as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TermSet(Vec<WeightedTerm>);

impl TermSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from arbitrary terms: normalizes, keeps the highest weight per term,
    /// drops non-positive weights, sorts, and truncates to `cap`.
    pub fn from_weighted(terms: impl IntoIterator<Item = (String, f64)>, cap: usize) -> Self {
        let mut set = Self::new();
        for (term, weight) in terms {
            let term = normalize_term(&term);
            if term.is_empty() || !weight.is_finite() || weight <= 0.0 {
                continue;
            }
            match set.0.iter_mut().find(|t| t.term == term) {
                Some(existing) => existing.weight = existing.weight.max(weight),
                None => set.0.push(WeightedTerm { term, weight }),
            }
        }
        set.sort();
        set.0.truncate(cap);
        set
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[WeightedTerm] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedTerm> {
        self.0.iter()
    }

    /// Terms only, in weight order.
    pub fn terms(&self) -> Vec<String> {
        self.0.iter().map(|t| t.term.clone()).collect()
    }

    pub fn contains(&self, term: &str) -> bool {
        let term = normalize_term(term);
        self.0.iter().any(|t| t.term == term)
    }

    pub fn weight(&self, term: &str) -> Option<f64> {
        let term = normalize_term(term);
        self.0.iter().find(|t| t.term == term).map(|t| t.weight)
    }

    /// Insert a term or overwrite its weight, keeping the order invariant.
    pub fn upsert(&mut self, term: &str, weight: f64) {
        let term = normalize_term(term);
        if term.is_empty() {
            return;
        }
        match self.0.iter_mut().find(|t| t.term == term) {
            Some(existing) => existing.weight = weight,
            None => self.0.push(WeightedTerm { term, weight }),
        }
        self.sort();
    }

    /// Remove the lowest-weighted term matching `eligible`. Ties evict the later entry.
    pub fn evict_lowest<F>(&mut self, eligible: F) -> Option<WeightedTerm>
    where
        F: Fn(&WeightedTerm) -> bool,
    {
        let index = self.0.iter().rposition(|t| eligible(t))?;
        // Sorted descending, so the last eligible entry is the lowest-weighted one.
        Some(self.0.remove(index))
    }

    /// True if no term appears twice.
    pub fn is_unique(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.0.iter().all(|t| seen.insert(t.term.as_str()))
    }

    /// True if weights never increase along the list.
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0].weight >= w[1].weight)
    }

    fn sort(&mut self) {
        self.0.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}
