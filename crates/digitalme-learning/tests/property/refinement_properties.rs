use digitalme_core::models::{Formality, SentenceLength, StyleAttribute, Tone};
use digitalme_core::traits::IRefiner;
use digitalme_learning::ProfileRefiner;
use proptest::prelude::*;
use test_fixtures::{as_messages, basic, extracted, profile, unique_text, FailingExtractor, FixedExtractor};

fn refiner(tone: Tone, formality: Formality) -> ProfileRefiner {
    ProfileRefiner::with_extractor(Box::new(FixedExtractor::new(extracted(basic(
        tone,
        formality,
        SentenceLength::Long,
    )))))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // ── Confidence never exceeds the ceiling and never falls ──

    #[test]
    fn attribute_confidence_rises_within_ceiling(
        start in 0.0f64..0.95,
        words in 10usize..900,
        rounds in 1usize..6,
        tone in prop::sample::select(Tone::ALL.to_vec()),
    ) {
        let refiner = refiner(tone, Formality::Formal);
        let mut p = profile(start);
        let batch = as_messages(&unique_text(words), 4);
        for _ in 0..rounds {
            let before = p.attribute_confidence.clone();
            refiner.refine(&mut p, &batch).unwrap();
            for attribute in StyleAttribute::ALL {
                let old = before[&attribute].value();
                let new = p.attribute_confidence(attribute).value();
                prop_assert!(new >= old);
                prop_assert!(new <= 0.95);
            }
            prop_assert!(p.confidence.value() <= 0.95);
            prop_assert!(p.validate().is_ok());
        }
        prop_assert_eq!(p.learning_metadata.total_refinements, rounds as u64);
    }

    // ── Movement shrinks as confidence grows ──

    #[test]
    fn confident_profiles_move_less(
        low in 0.0f64..0.49,
        high in 0.8f64..0.94,
        words in 10usize..900,
    ) {
        let refiner = refiner(Tone::Analytical, Formality::Formal);
        let batch = as_messages(&unique_text(words), 4);
        let mut unsure = profile(low);
        let mut sure = profile(high);
        let a = refiner.refine(&mut unsure, &batch).unwrap();
        let b = refiner.refine(&mut sure, &batch).unwrap();
        let step = |d: &digitalme_core::models::DeltaReport| {
            d.shift_for(StyleAttribute::Tone).map(|s| s.new - s.old).unwrap_or(0.0)
        };
        prop_assert!(step(b.delta()) <= step(a.delta()));
        if sure.basic.tone != profile(high).basic.tone {
            // A confident tone only moves on a large batch, and then so does the unsure one.
            prop_assert_eq!(unsure.basic.tone, Tone::Analytical);
        }
    }

    // ── Failed refinements leave no trace ──

    #[test]
    fn failures_preserve_profile(start in 0.0f64..0.95, words in 10usize..900) {
        let refiner = ProfileRefiner::with_extractor(Box::new(FailingExtractor::unanalyzable()));
        let mut p = profile(start);
        let before = p.clone();
        prop_assert!(refiner.refine(&mut p, &as_messages(&unique_text(words), 4)).is_err());
        prop_assert_eq!(p, before);
    }
}
