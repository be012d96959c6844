use digitalme_core::errors::{DigitalMeError, MergeError};
use digitalme_core::models::{
    AnomalyFlag, Formality, SentenceLength, SourceType, StyleAttribute, StyleProfile, Tone,
    TransitionStyle,
};
use digitalme_core::traits::{IMerger, IQualityScorer};
use digitalme_core::DigitalMeConfig;
use digitalme_merge::MergeEngine;
use digitalme_quality::QualityScorer;
use test_fixtures::{
    advanced, basic, basic_with_terms, duplicated_text, sample, sample_with, scored,
    scored_flagged, unique_text, unique_text_from,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn attribution(profile: &StyleProfile, attribute: StyleAttribute) -> Vec<(SourceType, f64)> {
    profile.source_attribution[&attribute]
        .iter()
        .map(|c| (c.source_type, c.contribution_percent))
        .collect()
}

// ── End-to-end scenarios ──

#[test]
fn single_600_word_text_sample() {
    let scorer = QualityScorer::default();
    let scored = scorer.score_sample(sample(SourceType::Text, 600, Tone::Casual), &unique_text(600));
    let profile = MergeEngine::default().merge(&[scored]).unwrap();

    assert_eq!(profile.basic.tone, Tone::Casual);
    let c = profile.confidence.value();
    assert!((0.35..=0.55).contains(&c), "confidence {c}");
    assert_eq!(attribution(&profile, StyleAttribute::Tone), vec![(SourceType::Text, 100.0)]);
    for attribute in StyleAttribute::ALL {
        assert_eq!(profile.attribute_confidence(attribute), profile.confidence);
    }
    assert!(profile.learning_metadata.enabled);
    assert_eq!(profile.learning_metadata.total_refinements, 0);
}

#[test]
fn gmail_outweighs_blog() {
    let scorer = QualityScorer::default();
    let gmail = scorer.score_sample(
        sample(SourceType::Gmail, 1_000, Tone::Professional),
        &unique_text(1_000),
    );
    let blog = scorer.score_sample(
        sample(SourceType::Blog, 1_000, Tone::Casual),
        &unique_text_from(5_000, 1_000),
    );
    let profile = MergeEngine::default().merge(&[blog, gmail]).unwrap();

    assert_eq!(profile.basic.tone, Tone::Professional);
    assert_eq!(
        attribution(&profile, StyleAttribute::Tone),
        vec![(SourceType::Gmail, 60.6), (SourceType::Blog, 39.4)]
    );
    assert_eq!(profile.sample_count.source_words(), 2_000);
    assert_eq!(profile.quality.source_count, 2);
    // base(2000) = 0.60, plus both diversity bonuses.
    assert!(approx(profile.confidence.value(), 0.66));
}

#[test]
fn spam_only_sample_still_merges_with_penalty() {
    let scorer = QualityScorer::default();
    let scored = scorer.score_sample(
        sample(SourceType::Text, 600, Tone::Casual),
        &duplicated_text(60, 24),
    );
    assert!(scored.quality.has(AnomalyFlag::Spam));
    assert!(approx(scored.weight(), 0.425));

    let engine = MergeEngine::default();
    let profile = engine.merge(&[scored]).unwrap();
    assert!(approx(profile.quality.spam_weight_fraction, 1.0));

    let breakdown = engine
        .confidence_model()
        .compute_breakdown(&digitalme_confidence::ConfidenceInputs::from_profile(&profile));
    assert!(approx(breakdown.spam_penalty, 0.5));
    assert!(approx(profile.confidence.value(), (0.37_f64 - 0.5).max(0.0)));
}

// ── Errors ──

#[test]
fn empty_input_is_no_sources() {
    let err = MergeEngine::default().merge(&[]).unwrap_err();
    assert!(matches!(err, DigitalMeError::MergeError(MergeError::NoSources)));
    assert!(err.to_string().contains("no sources to merge"));
}

#[test]
fn all_zero_weight_is_insufficient_quality() {
    let samples = vec![
        scored(sample(SourceType::Text, 0, Tone::Casual), 0.0),
        scored(sample(SourceType::Blog, 300, Tone::Casual), 0.0),
    ];
    let err = MergeEngine::default().merge(&samples).unwrap_err();
    assert!(matches!(
        err,
        DigitalMeError::MergeError(MergeError::InsufficientQualityData { samples: 2 })
    ));
}

// ── Inclusion and resolution ──

#[test]
fn zero_weight_samples_do_not_count() {
    let samples = vec![
        scored(sample(SourceType::Gmail, 800, Tone::Friendly), 1.0),
        scored(sample(SourceType::Blog, 5_000, Tone::Enthusiastic), 0.0),
    ];
    let profile = MergeEngine::default().merge(&samples).unwrap();
    assert_eq!(profile.basic.tone, Tone::Friendly);
    assert_eq!(profile.total_words(), 800);
    assert!(!profile.sample_count.per_source_word_counts.contains_key(&SourceType::Blog));
    assert_eq!(profile.quality.source_count, 1);
}

#[test]
fn weight_tie_prefers_higher_ranked_source() {
    let samples = vec![
        scored(sample(SourceType::Blog, 800, Tone::Casual), 0.7),
        scored(sample(SourceType::Gmail, 800, Tone::Professional), 0.7),
    ];
    let profile = MergeEngine::default().merge(&samples).unwrap();
    assert_eq!(profile.basic.tone, Tone::Professional);
    assert_eq!(
        attribution(&profile, StyleAttribute::Tone),
        vec![(SourceType::Gmail, 50.0), (SourceType::Blog, 50.0)]
    );
}

#[test]
fn term_sets_merge_with_caps() {
    let many: Vec<String> = (0..15).map(|i| format!("term{i}")).collect();
    let many: Vec<&str> = many.iter().map(String::as_str).collect();
    let samples = vec![
        scored(
            sample_with(
                "mail",
                SourceType::Gmail,
                900,
                basic_with_terms(Tone::Casual, Formality::Informal, &many, &["Synergy"]),
            ),
            1.0,
        ),
        scored(
            sample_with(
                "repo",
                SourceType::Github,
                900,
                basic_with_terms(Tone::Analytical, Formality::Neutral, &["term14"], &["synergy"]),
            ),
            0.7,
        ),
    ];
    let profile = MergeEngine::default().merge(&samples).unwrap();
    let vocabulary = &profile.basic.vocabulary;
    assert_eq!(vocabulary.len(), 10);
    assert_eq!(vocabulary.terms()[0], "term14");
    assert_eq!(vocabulary.weight("term14"), Some(1.0));
    assert_eq!(profile.basic.avoidance.terms(), vec!["synergy"]);
    profile.validate().unwrap();
}

#[test]
fn advanced_present_only_when_some_sample_has_it() {
    let engine = MergeEngine::default();
    let plain = scored(sample(SourceType::Text, 800, Tone::Casual), 0.85);
    assert!(engine.merge(&[plain.clone()]).unwrap().advanced.is_none());

    let mut rich = sample_with(
        "blog",
        SourceType::Blog,
        800,
        basic(Tone::Casual, Formality::Informal, SentenceLength::Short),
    );
    rich.advanced = Some(advanced(64.0, TransitionStyle::Abrupt));
    let profile = engine.merge(&[plain, scored(rich, 0.65)]).unwrap();
    let merged = profile.advanced.unwrap();
    assert!(approx(merged.thought_patterns.flow_score, 64.0));
    assert_eq!(merged.thought_patterns.transition_style, TransitionStyle::Abrupt);
}

#[test]
fn quality_summary_tracks_flagged_weight() {
    let samples = vec![
        scored(sample_with("a", SourceType::Gmail, 900, basic(Tone::Casual, Formality::Neutral, SentenceLength::Medium)), 1.0),
        scored_flagged(
            sample_with("b", SourceType::Blog, 900, basic(Tone::Casual, Formality::Neutral, SentenceLength::Medium)),
            0.5,
            &[AnomalyFlag::LowDiversity],
        ),
    ];
    let profile = MergeEngine::default().merge(&samples).unwrap();
    assert!(approx(profile.quality.low_diversity_weight_fraction, 0.5 / 1.5));
    assert_eq!(profile.quality.spam_weight_fraction, 0.0);
}

#[test]
fn two_sources_of_same_type_count_as_two_sources() {
    let b = basic(Tone::Casual, Formality::Neutral, SentenceLength::Medium);
    let samples = vec![
        scored(sample_with("blog-a", SourceType::Blog, 800, b.clone()), 0.65),
        scored(sample_with("blog-b", SourceType::Blog, 800, b), 0.65),
    ];
    let profile = MergeEngine::default().merge(&samples).unwrap();
    assert_eq!(profile.quality.source_count, 2);
    assert_eq!(profile.sample_count.distinct_source_types(), 1);
    // base(1600) = 0.56, plus the multi-source bonus only.
    assert!(approx(profile.confidence.value(), 0.56 + 0.03));
}

#[test]
fn adding_a_clean_source_does_not_lower_confidence() {
    let engine = MergeEngine::default();
    let first = vec![scored(sample(SourceType::Text, 600, Tone::Casual), 0.85)];
    let before = engine.merge(&first).unwrap().confidence;

    let mut more = first.clone();
    more.push(scored(sample(SourceType::Github, 500, Tone::Analytical), 0.7));
    let after = engine.merge(&more).unwrap().confidence;
    assert!(after >= before);
}

#[test]
fn config_caps_are_respected() {
    let config = DigitalMeConfig::from_toml("[merge]\nmax_set_terms = 2\n").unwrap();
    let engine = MergeEngine::from_config(&config);
    let samples = vec![scored(
        sample_with(
            "t",
            SourceType::Text,
            800,
            basic_with_terms(Tone::Casual, Formality::Informal, &["a", "b", "c"], &[]),
        ),
        0.85,
    )];
    assert_eq!(engine.merge(&samples).unwrap().basic.vocabulary.len(), 2);
}

// ── Re-merge ──

#[test]
fn remerge_keeps_learning_state() {
    let engine = MergeEngine::default();
    let first = vec![scored(sample(SourceType::Text, 600, Tone::Casual), 0.85)];
    let mut profile = engine.merge(&first).unwrap();
    profile.sample_count.conversation_words = 400;
    profile.learning_metadata.total_refinements = 3;

    let mut sources = first.clone();
    sources.push(scored(sample(SourceType::Gmail, 2_000, Tone::Professional), 1.5));
    engine.remerge(&mut profile, &sources).unwrap();

    assert_eq!(profile.basic.tone, Tone::Professional);
    assert_eq!(profile.sample_count.conversation_words, 400);
    assert_eq!(profile.learning_metadata.total_refinements, 3);
    assert_eq!(profile.total_words(), 3_000);
    // base(3000) = 0.70 with both diversity bonuses.
    assert!(approx(profile.confidence.value(), 0.76));
    for attribute in StyleAttribute::ALL {
        assert_eq!(profile.attribute_confidence(attribute), profile.confidence);
    }
}

#[test]
fn failed_remerge_leaves_profile_untouched() {
    let engine = MergeEngine::default();
    let mut profile = engine
        .merge(&[scored(sample(SourceType::Text, 600, Tone::Casual), 0.85)])
        .unwrap();
    let before = profile.clone();
    assert!(engine.remerge(&mut profile, &[]).is_err());
    assert_eq!(profile, before);
}

#[test]
fn merged_profile_round_trips_through_json() {
    let scorer = QualityScorer::default();
    let mut s = sample(SourceType::Gmail, 1_200, Tone::Friendly);
    s.advanced = Some(advanced(55.5, TransitionStyle::Smooth));
    let profile = MergeEngine::default()
        .merge(&[scorer.score_sample(s, &unique_text(1_200))])
        .unwrap();
    let json = profile.to_json().unwrap();
    assert_eq!(StyleProfile::from_json(&json).unwrap(), profile);
}
