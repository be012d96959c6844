//! Merging of optional deep-analysis attributes.

use std::collections::{BTreeMap, HashSet};

use digitalme_core::config::MergeConfig;
use digitalme_core::models::{
    AdvancedStyle, ContextVocabulary, PersonalityMarker, ScoredSample, SignaturePhrase,
    ThoughtPatterns, TransitionStyle,
};
use digitalme_core::text::normalize_term;

use crate::vote::weighted_vote;

/// Merge the advanced attributes of the samples that carry them.
/// `None` when no sample does.
pub fn merge_advanced(samples: &[ScoredSample], config: &MergeConfig) -> Option<AdvancedStyle> {
    let carriers: Vec<(&ScoredSample, &AdvancedStyle)> = samples
        .iter()
        .filter_map(|s| s.sample.advanced.as_ref().map(|a| (s, a)))
        .collect();
    if carriers.is_empty() {
        return None;
    }

    // Heaviest first; stable so equal weights keep input order.
    let mut by_weight = carriers.clone();
    by_weight.sort_by(|a, b| {
        b.0.weight()
            .partial_cmp(&a.0.weight())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Some(AdvancedStyle {
        signature_phrases: merge_phrases(&carriers, config.max_signature_phrases),
        thought_patterns: merge_thought_patterns(&carriers),
        personality_markers: merge_markers(&by_weight, config.max_personality_markers),
        contextual_vocabulary: merge_contexts(&by_weight, config.max_context_vocabulary),
    })
}

fn merge_phrases(carriers: &[(&ScoredSample, &AdvancedStyle)], cap: usize) -> Vec<SignaturePhrase> {
    let mut merged: Vec<(String, SignaturePhrase)> = Vec::new();
    for (_, advanced) in carriers {
        for phrase in &advanced.signature_phrases {
            let key = normalize_term(&phrase.phrase);
            if key.is_empty() {
                continue;
            }
            match merged.iter_mut().find(|(k, _)| *k == key) {
                Some((_, existing)) => {
                    existing.frequency = existing.frequency.saturating_add(phrase.frequency)
                }
                None => merged.push((key, phrase.clone())),
            }
        }
    }
    merged.sort_by(|a, b| b.1.frequency.cmp(&a.1.frequency));
    merged.truncate(cap);
    merged.into_iter().map(|(_, p)| p).collect()
}

fn merge_thought_patterns(carriers: &[(&ScoredSample, &AdvancedStyle)]) -> ThoughtPatterns {
    let total: f64 = carriers.iter().map(|(s, _)| s.weight()).sum();
    let weighted = |f: fn(&ThoughtPatterns) -> f64| -> f64 {
        if total <= 0.0 {
            return 0.0;
        }
        carriers
            .iter()
            .map(|(s, a)| s.weight() * f(&a.thought_patterns))
            .sum::<f64>()
            / total
    };
    let flow_score = weighted(|p| p.flow_score.clamp(0.0, 100.0));
    let parenthetical_frequency = weighted(|p| p.parenthetical_frequency.max(0.0));

    let transition_style = weighted_vote(carriers.iter().map(|(s, a)| {
        (
            a.thought_patterns.transition_style,
            s.sample.source_type,
            s.weight(),
        )
    }))
    .map(|outcome| outcome.winner)
    .unwrap_or(TransitionStyle::Varied);

    ThoughtPatterns {
        flow_score,
        transition_style,
        parenthetical_frequency,
    }
}

fn merge_markers(by_weight: &[(&ScoredSample, &AdvancedStyle)], cap: usize) -> Vec<PersonalityMarker> {
    let mut seen = HashSet::new();
    by_weight
        .iter()
        .flat_map(|(_, a)| a.personality_markers.iter())
        .filter(|m| {
            let key = normalize_term(&m.text);
            !key.is_empty() && seen.insert(key)
        })
        .take(cap)
        .cloned()
        .collect()
}

fn merge_contexts(
    by_weight: &[(&ScoredSample, &AdvancedStyle)],
    cap: usize,
) -> BTreeMap<String, ContextVocabulary> {
    let mut merged: BTreeMap<String, ContextVocabulary> = BTreeMap::new();
    for (_, advanced) in by_weight {
        for (context, vocabulary) in &advanced.contextual_vocabulary {
            // The first visit is the heaviest sample with this context: its tone sticks.
            let entry = merged
                .entry(context.clone())
                .or_insert_with(|| ContextVocabulary {
                    vocabulary: Vec::new(),
                    tone: vocabulary.tone,
                });
            for raw in &vocabulary.vocabulary {
                if entry.vocabulary.len() >= cap {
                    break;
                }
                let term = normalize_term(raw);
                if !term.is_empty() && !entry.vocabulary.contains(&term) {
                    entry.vocabulary.push(term);
                }
            }
        }
    }
    merged
}
