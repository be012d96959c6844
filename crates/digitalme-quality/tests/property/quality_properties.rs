use digitalme_core::models::SourceType;
use digitalme_core::traits::IQualityScorer;
use digitalme_quality::QualityScorer;
use proptest::prelude::*;

fn arb_source_type() -> impl Strategy<Value = SourceType> {
    prop_oneof![
        Just(SourceType::Text),
        Just(SourceType::Gmail),
        Just(SourceType::Github),
        Just(SourceType::Blog),
        Just(SourceType::Conversation),
    ]
}

proptest! {
    // Same text, same flags: more words never lowers the weight.
    #[test]
    fn weight_is_monotonic_in_word_count(
        source_type in arb_source_type(),
        a in 1u64..5_000,
        b in 1u64..5_000,
    ) {
        let scorer = QualityScorer::default();
        let text = "One clean sentence here. Another different sentence follows.";
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let w_low = scorer.score(source_type, low, text).weight;
        let w_high = scorer.score(source_type, high, text).weight;
        prop_assert!(w_low <= w_high);
    }

    #[test]
    fn weight_stays_in_range(
        source_type in arb_source_type(),
        words in 0u64..100_000,
        text in "[a-z .!]{0,200}",
    ) {
        let scorer = QualityScorer::default();
        let q = scorer.score(source_type, words, &text);
        prop_assert!(q.weight >= 0.0);
        prop_assert!(q.weight <= 1.5);
        prop_assert!(q.weight.is_finite());
    }
}
