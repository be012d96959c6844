//! Weighted vote over enumerated attribute values.

use digitalme_core::constants::WEIGHT_EPSILON;
use digitalme_core::models::{Contribution, SourceType};

use crate::attribution::AttributionTally;

/// Winning value and the attribution of the votes cast.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome<T> {
    pub winner: T,
    pub winner_weight: f64,
    pub total_weight: f64,
    pub attribution: Vec<Contribution>,
}

struct Candidate<T> {
    value: T,
    weight: f64,
    best_rank: u8,
}

/// Resolve one enumerated attribute.
///
/// Each ballot carries `(value, source type, weight)` in input order. The value
/// with the most weight wins. Within [`WEIGHT_EPSILON`], the value backed by the
/// highest-ranked source type wins, then the value seen first.
pub fn weighted_vote<T, I>(ballots: I) -> Option<VoteOutcome<T>>
where
    T: Copy + PartialEq,
    I: IntoIterator<Item = (T, SourceType, f64)>,
{
    let mut candidates: Vec<Candidate<T>> = Vec::new();
    let mut tally = AttributionTally::new();

    for (value, source_type, weight) in ballots {
        tally.add(source_type, weight);
        let rank = source_type.tie_break_rank();
        match candidates.iter_mut().find(|c| c.value == value) {
            Some(c) => {
                c.weight += weight;
                c.best_rank = c.best_rank.max(rank);
            }
            None => candidates.push(Candidate {
                value,
                weight,
                best_rank: rank,
            }),
        }
    }

    let total_weight = tally.total();
    let mut iter = candidates.into_iter();
    let mut best = iter.next()?;
    for candidate in iter {
        let diff = candidate.weight - best.weight;
        let beats = diff > WEIGHT_EPSILON
            || (diff.abs() <= WEIGHT_EPSILON && candidate.best_rank > best.best_rank);
        if beats {
            best = candidate;
        }
    }

    Some(VoteOutcome {
        winner: best.value,
        winner_weight: best.weight,
        total_weight,
        attribution: tally.into_contributions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heaviest_value_wins() {
        let outcome = weighted_vote([
            ("casual", SourceType::Blog, 0.65),
            ("professional", SourceType::Gmail, 1.0),
        ])
        .unwrap();
        assert_eq!(outcome.winner, "professional");
        assert!((outcome.total_weight - 1.65).abs() < 1e-12);
    }

    #[test]
    fn weights_accumulate_per_value() {
        let outcome = weighted_vote([
            ("a", SourceType::Gmail, 1.0),
            ("b", SourceType::Blog, 0.65),
            ("b", SourceType::Github, 0.7),
        ])
        .unwrap();
        assert_eq!(outcome.winner, "b");
    }

    #[test]
    fn tie_goes_to_higher_ranked_source() {
        let outcome = weighted_vote([
            ("blog-value", SourceType::Blog, 0.5),
            ("gmail-value", SourceType::Gmail, 0.5),
        ])
        .unwrap();
        assert_eq!(outcome.winner, "gmail-value");
    }

    #[test]
    fn full_tie_goes_to_first_seen() {
        let outcome = weighted_vote([
            ("first", SourceType::Text, 0.5),
            ("second", SourceType::Conversation, 0.5),
        ])
        .unwrap();
        assert_eq!(outcome.winner, "first");
    }

    #[test]
    fn no_ballots_no_winner() {
        let ballots: Vec<(u8, SourceType, f64)> = Vec::new();
        assert!(weighted_vote(ballots).is_none());
    }
}
