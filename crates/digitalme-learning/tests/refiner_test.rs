use chrono::Utc;

use digitalme_core::errors::{DigitalMeError, RefinementError};
use digitalme_core::models::{
    AttributeValue, Formality, SentenceLength, StyleAttribute, StyleProfile, Tone,
};
use digitalme_core::text::content_hash;
use digitalme_core::traits::{IRefiner, RefinementOutcome};
use digitalme_core::DigitalMeConfig;
use digitalme_learning::ProfileRefiner;
use test_fixtures::{
    as_messages, basic, basic_with_terms, extracted, load_fixture, profile,
    profile_with_attribute, unique_text, FailingExtractor, FixedExtractor,
};

fn refiner_for(tone: Tone, formality: Formality, length: SentenceLength) -> ProfileRefiner {
    ProfileRefiner::with_extractor(Box::new(FixedExtractor::new(extracted(basic(
        tone, formality, length,
    )))))
}

fn formal_refiner() -> ProfileRefiner {
    refiner_for(Tone::Casual, Formality::Formal, SentenceLength::Short)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Movement bounded by confidence ──

#[test]
fn confident_attribute_resists_small_batch() {
    let refiner = formal_refiner();
    let mut p = profile_with_attribute(0.6, StyleAttribute::Formality, 0.9);
    let outcome = refiner.refine(&mut p, &[unique_text(50)]).unwrap();

    assert!(outcome.is_applied());
    assert_eq!(p.basic.formality, Formality::Informal);
    let conf = p.attribute_confidence(StyleAttribute::Formality).value();
    assert!(approx(conf, 0.9 + 0.005 * 0.1), "got {conf}");
    assert!(outcome.delta().change_for(StyleAttribute::Formality).is_none());
}

#[test]
fn uncertain_attribute_follows_large_batch() {
    let refiner = formal_refiner();
    let mut p = profile_with_attribute(0.6, StyleAttribute::Formality, 0.3);
    let outcome = refiner
        .refine(&mut p, &as_messages(&unique_text(600), 4))
        .unwrap();

    assert_eq!(p.basic.formality, Formality::Formal);
    let change = outcome.delta().change_for(StyleAttribute::Formality).unwrap();
    assert_eq!(change.old_value, AttributeValue::Label("informal".to_string()));
    assert_eq!(change.new_value, AttributeValue::Label("formal".to_string()));
    assert!(approx(change.change_percent, 20.0));
    let shift = outcome.delta().shift_for(StyleAttribute::Formality).unwrap();
    assert!(approx(shift.old, 0.3));
    assert!(approx(shift.new, 0.44));
}

#[test]
fn tiny_batch_is_insufficient_signal() {
    let refiner = formal_refiner();
    let mut p = profile(0.5);
    let before = p.clone();
    let outcome = refiner
        .refine(&mut p, &["ok thanks see you".to_string()])
        .unwrap();

    assert!(matches!(outcome, RefinementOutcome::InsufficientSignal(_)));
    assert!(outcome.delta().is_empty());
    assert_eq!(outcome.delta().words_analyzed, 0);
    assert_eq!(p, before);
    assert_eq!(p.learning_metadata.total_refinements, 0);
}

#[test]
fn repeated_batches_show_diminishing_returns() {
    let refiner = formal_refiner();
    let mut p = profile(0.3);
    let batch = as_messages(&unique_text(600), 4);
    let mut previous = p.attribute_confidence(StyleAttribute::Tone).value();
    let mut last_step = f64::INFINITY;

    for _ in 0..8 {
        refiner.refine(&mut p, &batch).unwrap();
        let current = p.attribute_confidence(StyleAttribute::Tone).value();
        let step = current - previous;
        assert!(step > 0.0);
        assert!(step < last_step, "step {step} not below {last_step}");
        assert!(current <= 0.95);
        last_step = step;
        previous = current;
    }
    assert_eq!(p.learning_metadata.total_refinements, 8);
    assert_eq!(p.sample_count.conversation_words, 4_800);
}

#[test]
fn same_batch_twice_is_not_idempotent() {
    let refiner = formal_refiner();
    let mut p = profile(0.5);
    let batch = vec![unique_text(100)];
    refiner.refine(&mut p, &batch).unwrap();
    let first = p.attribute_confidence(StyleAttribute::Vocabulary).value();
    refiner.refine(&mut p, &batch).unwrap();
    assert!(p.attribute_confidence(StyleAttribute::Vocabulary).value() > first);
}

// ── Failure paths ──

#[test]
fn extraction_failure_preserves_profile() {
    let refiner = ProfileRefiner::with_extractor(Box::new(FailingExtractor::unavailable()));
    let mut p = profile(0.5);
    let before = p.clone();
    let err = refiner.refine(&mut p, &[unique_text(100)]).unwrap_err();

    assert!(matches!(
        err,
        DigitalMeError::RefinementError(RefinementError::ExtractionFailed { .. })
    ));
    assert!(err.to_string().contains("profile preserved"));
    assert!(err.is_retryable());
    assert_eq!(p, before);
}

#[test]
fn disabled_learning_is_rejected() {
    let refiner = formal_refiner();
    let mut p = profile(0.5);
    p.learning_metadata.enabled = false;
    let before = p.clone();
    let err = refiner.refine(&mut p, &[unique_text(100)]).unwrap_err();
    assert!(matches!(
        err,
        DigitalMeError::RefinementError(RefinementError::LearningDisabled)
    ));
    assert_eq!(p, before);
}

#[test]
fn oversized_batches_are_rejected_not_truncated() {
    let refiner = formal_refiner();
    let mut p = profile(0.5);
    let before = p.clone();

    let too_many: Vec<String> = (0..51).map(|_| "hello there".to_string()).collect();
    let too_long = vec!["x".repeat(5_001)];
    let empty: Vec<String> = Vec::new();
    let blank = vec!["   ".to_string()];

    for batch in [too_many, too_long, empty, blank] {
        let err = refiner.refine(&mut p, &batch).unwrap_err();
        assert!(matches!(
            err,
            DigitalMeError::RefinementError(RefinementError::InvalidBatch { .. })
        ));
    }
    assert_eq!(p, before);
}

#[test]
fn invalid_profile_is_rejected() {
    let refiner = formal_refiner();
    let mut p = profile(0.5);
    p.attribute_confidence.remove(&StyleAttribute::Tone);
    let err = refiner.refine(&mut p, &[unique_text(100)]).unwrap_err();
    assert!(matches!(err, DigitalMeError::ValidationError(_)));
}

// ── Sets ──

#[test]
fn new_terms_enter_and_existing_terms_strengthen() {
    let refiner = ProfileRefiner::with_extractor(Box::new(FixedExtractor::new(extracted(
        basic_with_terms(Tone::Casual, Formality::Informal, &["team", "roadmap", "launch"], &[]),
    ))));
    let mut p = profile(0.3);
    let team_before = p.basic.vocabulary.weight("team").unwrap();
    let outcome = refiner
        .refine(&mut p, &as_messages(&unique_text(600), 4))
        .unwrap();

    assert!(p.basic.vocabulary.contains("roadmap"));
    assert!(p.basic.vocabulary.contains("launch"));
    assert!(p.basic.vocabulary.weight("team").unwrap() > team_before);
    assert!(approx(p.basic.vocabulary.weight("roadmap").unwrap(), 0.2 * (1.0 - 0.5 / 3.0)));

    let change = outcome.delta().change_for(StyleAttribute::Vocabulary).unwrap();
    // 2 added over 3 old + 5 new terms.
    assert!(approx(change.change_percent, 2.0 / 8.0 * 100.0));
    // An empty sample avoidance list leaves the set alone.
    assert!(outcome.delta().change_for(StyleAttribute::Avoidance).is_none());
    assert!(p.basic.avoidance.contains("synergy"));
}

#[test]
fn low_movement_terms_are_ignored() {
    let refiner = ProfileRefiner::with_extractor(Box::new(FixedExtractor::new(extracted(
        basic_with_terms(Tone::Casual, Formality::Informal, &["roadmap"], &[]),
    ))));
    let mut p = profile(0.9);
    refiner.refine(&mut p, &[unique_text(50)]).unwrap();
    assert!(!p.basic.vocabulary.contains("roadmap"));
}

#[test]
fn sets_stay_capped_and_evict_weakest_existing_terms() {
    // 3 existing + 8 new terms: one eviction, and the weakest existing term goes.
    let fresh: Vec<String> = (0..8).map(|i| format!("fresh{i}")).collect();
    let fresh_refs: Vec<&str> = fresh.iter().map(String::as_str).collect();
    let refiner = ProfileRefiner::with_extractor(Box::new(FixedExtractor::new(extracted(
        basic_with_terms(Tone::Casual, Formality::Informal, &fresh_refs, &[]),
    ))));
    let mut p = profile(0.3);
    let outcome = refiner
        .refine(&mut p, &as_messages(&unique_text(600), 4))
        .unwrap();

    assert_eq!(p.basic.vocabulary.len(), 10);
    assert!(p.basic.vocabulary.contains("project"));
    assert!(p.basic.vocabulary.contains("team"));
    assert!(!p.basic.vocabulary.contains("ship"));
    assert!(p.basic.vocabulary.contains("fresh7"));
    let change = outcome.delta().change_for(StyleAttribute::Vocabulary).unwrap();
    // 8 added + 1 evicted over 3 old + 10 new terms.
    assert!(approx(change.change_percent, 9.0 / 13.0 * 100.0));
}

#[test]
fn sets_respect_configured_merge_cap() {
    let config = DigitalMeConfig::from_toml("[merge]\nmax_set_terms = 3\n").unwrap();
    let fresh: Vec<String> = (0..8).map(|i| format!("fresh{i}")).collect();
    let fresh_refs: Vec<&str> = fresh.iter().map(String::as_str).collect();
    let refiner = ProfileRefiner::from_config(
        &config,
        Box::new(FixedExtractor::new(extracted(basic_with_terms(
            Tone::Casual,
            Formality::Informal,
            &fresh_refs,
            &[],
        )))),
    );
    let mut p = profile(0.3);
    assert_eq!(p.basic.vocabulary.len(), 3);

    refiner
        .refine(&mut p, &as_messages(&unique_text(600), 4))
        .unwrap();

    assert_eq!(p.basic.vocabulary.len(), 3);
    assert_eq!(p.basic.vocabulary.terms(), vec!["fresh0", "fresh1", "fresh2"]);
    assert!(p.validate().is_ok());
}

// ── Report and metadata ──

#[test]
fn delta_report_describes_the_batch() {
    let refiner = formal_refiner();
    let mut p = profile(0.5);
    let previous = p.confidence.value();
    let messages = as_messages(&unique_text(200), 3);
    let now = Utc::now();
    let outcome = refiner.refine_at(&mut p, &messages, now).unwrap();
    let delta = outcome.delta();

    assert_eq!(delta.batch_hash, content_hash(&messages.join("\n\n")));
    assert_eq!(delta.words_analyzed, 200);
    assert_eq!(delta.timestamp, now);
    assert!(uuid::Uuid::parse_str(&delta.refinement_id).is_ok());
    assert!(approx(delta.confidence_change, p.confidence.value() - previous));
    assert_eq!(p.sample_count.conversation_words, 200);
    assert!(p.validate().is_ok());
}

#[test]
fn advanced_attributes_are_never_touched() {
    let refiner = ProfileRefiner::new();
    let mut p: StyleProfile = load_fixture("profile.json");
    let advanced = p.advanced.clone();
    refiner.refine(&mut p, &as_messages(&unique_text(400), 2)).unwrap();
    assert_eq!(p.advanced, advanced);
    assert_eq!(p.learning_metadata.total_refinements, 3);
}

#[test]
fn refiner_honours_configured_limits() {
    let config = DigitalMeConfig::from_toml("[refinement]\nmin_batch_words = 200\n").unwrap();
    let refiner = ProfileRefiner::from_config(
        &config,
        Box::new(FixedExtractor::new(extracted(basic(
            Tone::Casual,
            Formality::Formal,
            SentenceLength::Short,
        )))),
    );
    let mut p = profile(0.5);
    let outcome = refiner.refine(&mut p, &[unique_text(150)]).unwrap();
    assert!(!outcome.is_applied());
}

#[test]
fn delta_report_serializes_as_plain_json() {
    let refiner = formal_refiner();
    let mut p = profile(0.3);
    let outcome = refiner
        .refine(&mut p, &as_messages(&unique_text(600), 4))
        .unwrap();
    let json = serde_json::to_value(outcome.delta()).unwrap();
    assert_eq!(json["words_analyzed"], 600);
    assert_eq!(json["changes"][0]["attribute"], "formality");
    assert_eq!(json["changes"][0]["new_value"]["label"], "formal");
    assert!(json["batch_hash"].as_str().unwrap().len() == 64);
}
