use digitalme_core::models::{
    AnomalyFlag, BasicStyle, Formality, ScoredSample, SentenceLength, SourceType, Tone,
};
use digitalme_core::traits::IMerger;
use digitalme_merge::MergeEngine;
use proptest::prelude::*;
use test_fixtures::{sample_with, scored, scored_flagged};

const POOL: [&str; 12] = [
    "deploy", "coffee", "roadmap", "hiking", "refactor", "cheers", "ship", "review", "tea",
    "launch", "draft", "async",
];

fn arb_source_type() -> impl Strategy<Value = SourceType> {
    prop_oneof![
        Just(SourceType::Text),
        Just(SourceType::Gmail),
        Just(SourceType::Github),
        Just(SourceType::Blog),
        Just(SourceType::Conversation),
    ]
}

fn arb_basic() -> impl Strategy<Value = BasicStyle> {
    (
        prop::sample::select(Tone::ALL.to_vec()),
        prop::sample::select(Formality::ALL.to_vec()),
        prop::sample::select(SentenceLength::ALL.to_vec()),
        prop::sample::subsequence(POOL.to_vec(), 0..8),
        prop::sample::subsequence(POOL.to_vec(), 0..4),
    )
        .prop_map(|(tone, formality, sentence_length, vocabulary, avoidance)| BasicStyle {
            tone,
            formality,
            sentence_length,
            vocabulary: vocabulary.into_iter().map(String::from).collect(),
            avoidance: avoidance.into_iter().map(String::from).collect(),
        })
}

fn arb_flags() -> impl Strategy<Value = Vec<AnomalyFlag>> {
    prop_oneof![
        Just(vec![]),
        Just(vec![AnomalyFlag::Spam]),
        Just(vec![AnomalyFlag::LowDiversity]),
        Just(vec![AnomalyFlag::Spam, AnomalyFlag::LowDiversity]),
    ]
}

fn arb_samples() -> impl Strategy<Value = Vec<ScoredSample>> {
    prop::collection::vec(
        (arb_source_type(), 1u64..20_000, 0.01f64..1.5, arb_basic(), arb_flags()),
        1..7,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (source_type, words, weight, basic, flags))| {
                scored_flagged(
                    sample_with(&format!("source-{i}"), source_type, words, basic),
                    weight,
                    &flags,
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn attribution_sums_to_one_hundred(samples in arb_samples()) {
        let profile = MergeEngine::default().merge(&samples).unwrap();
        for (attribute, contributions) in &profile.source_attribution {
            if contributions.is_empty() {
                continue;
            }
            let total: f64 = contributions.iter().map(|c| c.contribution_percent).sum();
            prop_assert!((total - 100.0).abs() <= 1.0, "{attribute}: {total}");
            let sorted = contributions
                .windows(2)
                .all(|w| w[0].contribution_percent >= w[1].contribution_percent);
            prop_assert!(sorted);
        }
    }

    #[test]
    fn confidence_respects_ceiling(samples in arb_samples()) {
        let profile = MergeEngine::default().merge(&samples).unwrap();
        prop_assert!(profile.confidence.value() <= 0.95);
        for c in profile.attribute_confidence.values() {
            prop_assert!(c.value() <= 0.95);
        }
    }

    #[test]
    fn clean_large_source_never_lowers_confidence(
        samples in arb_samples(),
        source_type in arb_source_type(),
        words in 500u64..20_000,
        weight in 0.1f64..1.5,
        basic in arb_basic(),
    ) {
        let engine = MergeEngine::default();
        let before = engine.merge(&samples).unwrap().confidence;
        let mut more = samples.clone();
        more.push(scored(sample_with("new-source", source_type, words, basic), weight));
        let after = engine.merge(&more).unwrap().confidence;
        prop_assert!(after >= before);
    }

    #[test]
    fn merged_profiles_validate_and_round_trip(samples in arb_samples()) {
        let profile = MergeEngine::default().merge(&samples).unwrap();
        prop_assert!(profile.validate().is_ok());
        let back = digitalme_core::StyleProfile::from_json(&profile.to_json().unwrap()).unwrap();
        prop_assert_eq!(back, profile);
    }
}
