//! Source attribution: each source type's share of an attribute's weight.

use std::cmp::Ordering;

use digitalme_core::models::{Contribution, SourceType};

/// Accumulates weight per source type.
#[derive(Debug, Clone, Default)]
pub struct AttributionTally {
    weights: [f64; SourceType::COUNT],
}

impl AttributionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, source_type: SourceType, weight: f64) {
        self.weights[index(source_type)] += weight;
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Percentages rounded to one decimal, sorted descending with ties by rank.
    /// Source types with no weight are left out; an empty tally yields an empty list.
    pub fn into_contributions(self) -> Vec<Contribution> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut shares: Vec<(SourceType, f64)> = SourceType::ALL
            .iter()
            .map(|t| (*t, self.weights[index(*t)]))
            .filter(|(_, w)| *w > 0.0)
            .collect();
        shares.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.0.tie_break_rank().cmp(&a.0.tie_break_rank()))
        });

        shares
            .into_iter()
            .map(|(source_type, weight)| Contribution {
                source_type,
                contribution_percent: round_one_decimal(weight / total * 100.0),
            })
            .collect()
    }
}

fn index(source_type: SourceType) -> usize {
    match source_type {
        SourceType::Text => 0,
        SourceType::Gmail => 1,
        SourceType::Github => 2,
        SourceType::Blog => 3,
        SourceType::Conversation => 4,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
