use digitalme_confidence::{ConfidenceInputs, ConfidenceModel};
use proptest::prelude::*;

fn arb_inputs() -> impl Strategy<Value = ConfidenceInputs> {
    (
        0u64..200_000,
        0usize..6,
        0usize..20,
        any::<bool>(),
        0.0f64..=1.0,
        0.0f64..=1.0,
    )
        .prop_map(
            |(total_words, source_types, sources, advanced_present, spam, low)| ConfidenceInputs {
                total_words,
                source_types,
                sources,
                advanced_present,
                spam_fraction: spam,
                low_diversity_fraction: low,
            },
        )
}

proptest! {
    #[test]
    fn confidence_never_exceeds_ceiling(inputs in arb_inputs()) {
        let c = ConfidenceModel::default().compute(&inputs);
        prop_assert!((0.0..=0.95).contains(&c));
    }

    #[test]
    fn more_words_never_lowers_confidence(inputs in arb_inputs(), extra in 0u64..50_000) {
        let model = ConfidenceModel::default();
        let before = model.compute(&inputs);
        let after = model.compute(&inputs.clone().with_extra_words(extra));
        prop_assert!(after >= before);
    }

    #[test]
    fn lower_spam_fraction_never_lowers_confidence(inputs in arb_inputs(), cut in 0.0f64..=1.0) {
        let model = ConfidenceModel::default();
        let before = model.compute(&inputs);
        let cleaner = ConfidenceInputs {
            spam_fraction: inputs.spam_fraction * cut,
            ..inputs.clone()
        };
        prop_assert!(model.compute(&cleaner) >= before);
    }
}
