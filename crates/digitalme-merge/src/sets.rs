//! Term-set merging for vocabulary and avoidance.

use std::collections::HashSet;

use digitalme_core::models::{Contribution, ScoredSample, SourceType, TermSet};
use digitalme_core::text::normalize_term;

use crate::attribution::AttributionTally;

/// A merged term set and its attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSet {
    pub terms: TermSet,
    pub attribution: Vec<Contribution>,
}

struct TermTally {
    term: String,
    weight: f64,
    backers: Vec<(SourceType, f64)>,
}

/// Union the terms every sample lists, rank them by the summed weight of the
/// samples listing them (ties by first appearance), and keep the top `cap`.
///
/// Stored weight is the summed weight divided by the weight of all `samples`.
/// Attribution covers retained terms only.
pub fn merge_terms<'a, F>(samples: &'a [ScoredSample], cap: usize, terms_of: F) -> MergedSet
where
    F: Fn(&'a ScoredSample) -> &'a [String],
{
    let total_weight: f64 = samples.iter().map(ScoredSample::weight).sum();
    let mut tallies: Vec<TermTally> = Vec::new();

    for scored in samples {
        let weight = scored.weight();
        let mut listed = HashSet::new();
        for raw in terms_of(scored) {
            let term = normalize_term(raw);
            if term.is_empty() || !listed.insert(term.clone()) {
                continue;
            }
            let backer = (scored.sample.source_type, weight);
            match tallies.iter_mut().find(|t| t.term == term) {
                Some(t) => {
                    t.weight += weight;
                    t.backers.push(backer);
                }
                None => tallies.push(TermTally {
                    term,
                    weight,
                    backers: vec![backer],
                }),
            }
        }
    }

    // Stable: equal weights keep first-appearance order.
    tallies.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tallies.truncate(cap);

    let mut attribution = AttributionTally::new();
    for tally in &tallies {
        for (source_type, weight) in &tally.backers {
            attribution.add(*source_type, *weight);
        }
    }

    let terms = if total_weight > 0.0 {
        TermSet::from_weighted(
            tallies
                .into_iter()
                .map(|t| (t.term, (t.weight / total_weight).min(1.0))),
            cap,
        )
    } else {
        TermSet::new()
    };

    MergedSet {
        terms,
        attribution: attribution.into_contributions(),
    }
}
