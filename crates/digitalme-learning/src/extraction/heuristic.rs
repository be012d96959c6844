//! Rule-based style extraction for offline use: marker word counts, sentence
//! statistics, TF-IDF vocabulary, and n-gram signature phrases.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use digitalme_core::errors::ExtractionError;
use digitalme_core::models::{
    AdvancedStyle, BasicStyle, ContextVocabulary, ExtractedStyle, Formality, PersonalityMarker,
    PhraseCategory, SentenceLength, SignaturePhrase, ThoughtPatterns, Tone, TransitionStyle,
};
use digitalme_core::text::{count_words, is_stop_word, normalize_term, split_sentences, tokenize};
use digitalme_core::traits::IStyleExtractor;

use super::lexicon::{self, contains};
use super::vocabulary::distinctive_terms;

static PARENTHETICAL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\([^()]{1,200}\)").ok());

const MIN_WORDS: u64 = 5;
const ADVANCED_MIN_WORDS: u64 = 200;
const AVOIDANCE_MIN_WORDS: u64 = 300;
const MAX_VOCABULARY: usize = 10;
const MAX_AVOIDANCE: usize = 5;
const MAX_PHRASES: usize = 10;
const MIN_PHRASE_OCCURRENCES: u32 = 3;
const MAX_MARKERS: usize = 10;
const MAX_MARKER_CHARS: usize = 120;
const MAX_CONTEXT_TERMS: usize = 5;

/// Offline extractor. Deterministic for a given text.
#[derive(Debug, Clone)]
pub struct HeuristicExtractor {
    avoidance_candidates: Vec<String>,
}

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self::with_avoidance_candidates(lexicon::AVOIDANCE_CANDIDATES.iter().map(|s| s.to_string()))
    }

    pub fn with_avoidance_candidates(candidates: impl IntoIterator<Item = String>) -> Self {
        Self {
            avoidance_candidates: candidates.into_iter().map(|c| normalize_term(&c)).collect(),
        }
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IStyleExtractor for HeuristicExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedStyle, ExtractionError> {
        let words = count_words(text);
        if words < MIN_WORDS {
            return Err(ExtractionError::Unanalyzable {
                reason: format!("need at least {MIN_WORDS} words, got {words}"),
            });
        }

        let sentences = split_sentences(text);
        let tokens = tokenize(text);
        let exclamations = text.matches('!').count();

        let basic = BasicStyle {
            tone: classify_tone(&tokens, exclamations),
            formality: classify_formality(&tokens),
            sentence_length: classify_sentence_length(words, sentences.len()),
            vocabulary: distinctive_terms(&sentences, MAX_VOCABULARY),
            avoidance: if words >= AVOIDANCE_MIN_WORDS {
                self.unused_candidates(text, &tokens)
            } else {
                Vec::new()
            },
        };
        let advanced = (words >= ADVANCED_MIN_WORDS).then(|| analyze_advanced(text, words, &sentences));

        Ok(ExtractedStyle { basic, advanced })
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

impl HeuristicExtractor {
    fn unused_candidates(&self, text: &str, tokens: &[String]) -> Vec<String> {
        let lower = normalize_term(text);
        self.avoidance_candidates
            .iter()
            .filter(|c| {
                if c.contains(' ') {
                    !lower.contains(c.as_str())
                } else {
                    !tokens.iter().any(|t| t == *c)
                }
            })
            .take(MAX_AVOIDANCE)
            .cloned()
            .collect()
    }
}

// ── Basic attributes ──

fn classify_sentence_length(words: u64, sentences: usize) -> SentenceLength {
    let mean = words as f64 / sentences.max(1) as f64;
    if mean < 12.0 {
        SentenceLength::Short
    } else if mean <= 20.0 {
        SentenceLength::Medium
    } else {
        SentenceLength::Long
    }
}

/// Contractions and informal words against formal connectives, per 100 tokens.
fn classify_formality(tokens: &[String]) -> Formality {
    if tokens.is_empty() {
        return Formality::Neutral;
    }
    let informal = tokens
        .iter()
        .filter(|t| t.contains('\'') || contains(lexicon::INFORMAL_WORDS, t))
        .count() as f64;
    let formal = tokens
        .iter()
        .filter(|t| contains(lexicon::FORMAL_WORDS, t))
        .count() as f64;
    let per_hundred = 100.0 / tokens.len() as f64;
    let (informal, formal) = (informal * per_hundred, formal * per_hundred);

    if formal - informal >= 1.0 {
        Formality::Formal
    } else if informal - formal >= 2.0 {
        Formality::Informal
    } else {
        Formality::Neutral
    }
}

/// Tone with the most marker words; exclamation marks count as enthusiasm.
/// No markers at all reads as friendly.
fn classify_tone(tokens: &[String], exclamations: usize) -> Tone {
    let mut best = (Tone::Friendly, 0usize);
    for tone in Tone::ALL {
        let mut hits = tokens
            .iter()
            .filter(|t| contains(lexicon::tone_words(tone), t))
            .count();
        if tone == Tone::Enthusiastic {
            hits += exclamations;
        }
        if hits > best.1 {
            best = (tone, hits);
        }
    }
    best.0
}

// ── Advanced attributes ──

fn analyze_advanced(text: &str, words: u64, sentences: &[String]) -> AdvancedStyle {
    AdvancedStyle {
        signature_phrases: signature_phrases(sentences),
        thought_patterns: thought_patterns(text, words, sentences),
        personality_markers: personality_markers(sentences),
        contextual_vocabulary: contextual_vocabulary(sentences),
    }
}

struct PhraseTally {
    first_seen: usize,
    count: u32,
    at_start: u32,
    at_end: u32,
}

/// Repeated 2- and 3-word phrases within sentences.
fn signature_phrases(sentences: &[String]) -> Vec<SignaturePhrase> {
    let mut tallies: HashMap<String, PhraseTally> = HashMap::new();
    let mut seen = 0usize;
    for sentence in sentences {
        let tokens = tokenize(sentence);
        for i in 0..tokens.len() {
            // Longer phrases first so a three-word opener outranks its own fragments.
            for n in [3usize, 2] {
                let Some(window) = tokens.get(i..i + n) else {
                    continue;
                };
                if window.iter().all(|t| is_stop_word(t) || t.len() < 3) {
                    continue;
                }
                let phrase = window.join(" ");
                let tally = tallies.entry(phrase).or_insert_with(|| {
                    seen += 1;
                    PhraseTally {
                        first_seen: seen,
                        count: 0,
                        at_start: 0,
                        at_end: 0,
                    }
                });
                tally.count += 1;
                if i == 0 {
                    tally.at_start += 1;
                }
                if i + n == tokens.len() {
                    tally.at_end += 1;
                }
            }
        }
    }

    let mut repeated: Vec<(String, PhraseTally)> = tallies
        .into_iter()
        .filter(|(_, t)| t.count >= MIN_PHRASE_OCCURRENCES)
        .collect();
    repeated.sort_by(|a, b| {
        b.1.count
            .cmp(&a.1.count)
            .then_with(|| a.1.first_seen.cmp(&b.1.first_seen))
    });
    repeated
        .into_iter()
        .take(MAX_PHRASES)
        .map(|(phrase, tally)| SignaturePhrase {
            category: phrase_category(&phrase, &tally),
            phrase,
            frequency: tally.count,
        })
        .collect()
}

fn phrase_category(phrase: &str, tally: &PhraseTally) -> PhraseCategory {
    let words: Vec<&str> = phrase.split(' ').collect();
    if tally.at_start * 2 > tally.count {
        PhraseCategory::Opener
    } else if tally.at_end * 2 > tally.count {
        PhraseCategory::Closer
    } else if words.iter().any(|w| contains(lexicon::TRANSITION_WORDS, w)) {
        PhraseCategory::Transition
    } else if words.iter().any(|w| contains(lexicon::FILLER_WORDS, w)) {
        PhraseCategory::Filler
    } else if words.iter().any(|w| contains(lexicon::EMPHASIS_WORDS, w)) {
        PhraseCategory::Emphasis
    } else {
        PhraseCategory::Expression
    }
}

/// Share of sentences carrying a transition word drives flow and transition style.
fn thought_patterns(text: &str, words: u64, sentences: &[String]) -> ThoughtPatterns {
    let with_transition = sentences
        .iter()
        .filter(|s| {
            tokenize(s)
                .iter()
                .any(|t| contains(lexicon::TRANSITION_WORDS, t))
        })
        .count();
    let density = with_transition as f64 / sentences.len().max(1) as f64;
    let transition_style = if density < 0.1 {
        TransitionStyle::Abrupt
    } else if density >= 0.3 {
        TransitionStyle::Smooth
    } else {
        TransitionStyle::Varied
    };

    let parentheticals = PARENTHETICAL_RE
        .as_ref()
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0);

    ThoughtPatterns {
        flow_score: (density * 200.0).min(100.0),
        transition_style,
        parenthetical_frequency: parentheticals as f64 * 100.0 / words.max(1) as f64,
    }
}

fn personality_markers(sentences: &[String]) -> Vec<PersonalityMarker> {
    let mut markers: Vec<PersonalityMarker> = Vec::new();
    for sentence in sentences {
        if markers.len() >= MAX_MARKERS {
            break;
        }
        let lower = normalize_term(sentence);
        let Some(marker_type) = lexicon::MARKER_TYPES
            .iter()
            .copied()
            .find(|m| lexicon::marker_phrases(*m).iter().any(|p| lower.contains(p)))
        else {
            continue;
        };
        let text: String = sentence.chars().take(MAX_MARKER_CHARS).collect();
        if markers.iter().all(|m| normalize_term(&m.text) != normalize_term(&text)) {
            markers.push(PersonalityMarker { text, marker_type });
        }
    }
    markers
}

/// Contexts with at least two sentences get their own vocabulary and tone.
fn contextual_vocabulary(sentences: &[String]) -> BTreeMap<String, ContextVocabulary> {
    let mut contexts = BTreeMap::new();
    for (name, keywords) in lexicon::CONTEXTS {
        let matching: Vec<String> = sentences
            .iter()
            .filter(|s| tokenize(s).iter().any(|t| contains(keywords, t)))
            .cloned()
            .collect();
        if matching.len() < 2 {
            continue;
        }
        let tokens: Vec<String> = matching.iter().flat_map(|s| tokenize(s)).collect();
        let exclamations = matching.iter().map(|s| s.matches('!').count()).sum();
        contexts.insert(
            name.to_string(),
            ContextVocabulary {
                vocabulary: distinctive_terms(&matching, MAX_CONTEXT_TERMS),
                tone: classify_tone(&tokens, exclamations),
            },
        );
    }
    contexts
}
