use std::collections::HashSet;

use digitalme_core::models::TermSet;
use digitalme_core::text::normalize_term;

/// Membership effect of a term-set update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetUpdate {
    pub added: Vec<String>,
    pub evicted: Vec<String>,
    pub reinforced: Vec<String>,
}

impl SetUpdate {
    /// Terms whose membership changed.
    pub fn changed(&self) -> usize {
        self.added.len() + self.evicted.len()
    }
}

/// Fold a sample's salience-ordered terms into `set`.
///
/// Term `i` of `n` has relevance `1 − 0.5·i/n` and score `scaled × relevance`.
/// Terms scoring below `min_inclusion` are ignored. Admitted new terms enter
/// at their score; admitted existing terms move to `w + score·(1 − w)`.
/// Over `cap`, the lowest pre-existing term is evicted first.
pub fn reinforce_set(
    set: &mut TermSet,
    sample_terms: &[String],
    scaled: f64,
    min_inclusion: f64,
    cap: usize,
) -> SetUpdate {
    let mut seen = HashSet::new();
    let terms: Vec<String> = sample_terms
        .iter()
        .map(|t| normalize_term(t))
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect();
    let pre_existing: HashSet<String> = set.terms().into_iter().collect();
    let mut update = SetUpdate::default();

    let n = terms.len() as f64;
    for (i, term) in terms.iter().enumerate() {
        let relevance = 1.0 - 0.5 * i as f64 / n;
        let score = scaled * relevance;
        if score <= 0.0 || score < min_inclusion {
            continue;
        }
        match set.weight(term) {
            Some(w) => {
                set.upsert(term, (w + score * (1.0 - w)).min(1.0));
                update.reinforced.push(term.clone());
            }
            None => {
                set.upsert(term, score.min(1.0));
                update.added.push(term.clone());
            }
        }
    }

    while set.len() > cap {
        let evicted = set
            .evict_lowest(|t| pre_existing.contains(&t.term))
            .or_else(|| set.evict_lowest(|_| true));
        match evicted {
            Some(t) => {
                if let Some(pos) = update.added.iter().position(|a| *a == t.term) {
                    // Entered and left in the same batch: no membership change.
                    update.added.remove(pos);
                } else {
                    update.evicted.push(t.term);
                }
            }
            None => break,
        }
    }
    update
}
