//! Marker word families used by the heuristic extractor.

use digitalme_core::models::{MarkerType, Tone};

pub const INFORMAL_WORDS: &[&str] = &[
    "hey", "lol", "gonna", "wanna", "yeah", "yep", "nope", "cool", "btw", "thx", "omg", "kinda",
    "sorta", "stuff", "awesome", "haha", "ok", "okay",
];

pub const FORMAL_WORDS: &[&str] = &[
    "therefore", "furthermore", "regards", "sincerely", "however", "moreover", "consequently",
    "accordingly", "hereby", "pursuant", "kindly", "respectfully", "nevertheless", "whereas",
];

pub const TRANSITION_WORDS: &[&str] = &[
    "however", "therefore", "also", "then", "next", "finally", "meanwhile", "moreover",
    "furthermore", "additionally", "instead", "similarly", "otherwise", "so", "because",
    "although", "besides", "anyway",
];

pub const FILLER_WORDS: &[&str] = &[
    "basically", "literally", "actually", "like", "um", "uh", "honestly", "anyway", "just",
];

pub const EMPHASIS_WORDS: &[&str] = &[
    "really", "totally", "absolutely", "definitely", "very", "super", "seriously",
];

/// Filler and buzzwords offered as avoidance candidates when a writer never uses them.
pub const AVOIDANCE_CANDIDATES: &[&str] = &[
    "synergy", "leverage", "circle back", "touch base", "paradigm", "utilize", "basically",
    "literally", "per my last email", "going forward",
];

/// Word families per tone, checked in `Tone::ALL` order.
pub fn tone_words(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Casual => &["hey", "lol", "yeah", "cool", "gonna", "btw", "kinda", "stuff", "haha"],
        Tone::Professional => &[
            "regards", "meeting", "schedule", "deadline", "project", "client", "deliverable",
            "stakeholder", "agenda", "quarterly",
        ],
        Tone::Friendly => &[
            "thanks", "thank", "please", "happy", "glad", "hope", "welcome", "cheers", "appreciate",
        ],
        Tone::Enthusiastic => &[
            "amazing", "awesome", "love", "excited", "fantastic", "thrilled", "incredible", "wow",
        ],
        Tone::Analytical => &[
            "because", "therefore", "data", "analysis", "evidence", "results", "metric",
            "hypothesis", "measured", "benchmark",
        ],
    }
}

/// Phrases marking each personality trait in a sentence (lowercase, substring match).
pub fn marker_phrases(marker: MarkerType) -> &'static [&'static str] {
    match marker {
        MarkerType::Humor => &["haha", "lol", "just kidding", "joking", "funny", "hilarious"],
        MarkerType::Empathy => &[
            "sorry to hear", "i understand", "i hear you", "sounds hard", "that must be",
            "take care",
        ],
        MarkerType::Enthusiasm => &["can't wait", "so excited", "love this", "amazing", "awesome"],
        MarkerType::Hedging => &["maybe", "perhaps", "i think", "might", "probably", "sort of"],
        MarkerType::Directness => &["you must", "need to", "do not", "definitely", "clearly", "no way"],
    }
}

pub const MARKER_TYPES: [MarkerType; 5] = [
    MarkerType::Humor,
    MarkerType::Empathy,
    MarkerType::Enthusiasm,
    MarkerType::Hedging,
    MarkerType::Directness,
];

/// Context names and the keywords that put a sentence in that context.
pub const CONTEXTS: &[(&str, &[&str])] = &[
    ("work", &["meeting", "deadline", "project", "client", "team", "sprint", "manager", "office"]),
    ("family", &["mom", "dad", "kids", "family", "dinner", "weekend", "brother", "sister"]),
    ("tech", &["code", "bug", "deploy", "api", "server", "database", "release", "compiler"]),
];

pub fn contains(list: &[&str], token: &str) -> bool {
    list.contains(&token)
}
