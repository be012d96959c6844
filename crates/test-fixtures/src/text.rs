//! Deterministic prose generators with controlled duplication and diversity.

const CONSONANTS: &[char] = &['b', 'd', 'f', 'g', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'z'];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// A pronounceable pseudo-word unique to `n`.
pub fn pseudo_word(n: usize) -> String {
    let base = CONSONANTS.len() * VOWELS.len();
    let mut word = String::new();
    let mut rest = n;
    loop {
        let syllable = rest % base;
        word.push(CONSONANTS[syllable / VOWELS.len()]);
        word.push(VOWELS[syllable % VOWELS.len()]);
        rest /= base;
        if rest == 0 {
            break;
        }
    }
    word
}

fn sentence(words: &[String]) -> String {
    let mut s = words.join(" ");
    if let Some(first) = s.get(0..1) {
        let upper = first.to_uppercase();
        s.replace_range(0..1, &upper);
    }
    s.push('.');
    s
}

/// `word_count` words, every word distinct, ten words per sentence.
/// No duplicate sentences; unique-word ratio 1.0.
pub fn unique_text(word_count: usize) -> String {
    unique_text_from(0, word_count)
}

/// Like [`unique_text`] but starting from pseudo-word `offset`, so two
/// generated texts share no words.
pub fn unique_text_from(offset: usize, word_count: usize) -> String {
    let words: Vec<String> = (offset..offset + word_count).map(pseudo_word).collect();
    words
        .chunks(10)
        .map(sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `total_sentences` ten-word sentences of which `duplicates` repeat the first one.
/// Duplicate-sentence ratio is `duplicates / total_sentences`.
pub fn duplicated_text(total_sentences: usize, duplicates: usize) -> String {
    let unique = total_sentences.saturating_sub(duplicates).max(1);
    let mut sentences: Vec<String> = (0..unique)
        .map(|i| {
            let words: Vec<String> = (i * 10..i * 10 + 10).map(pseudo_word).collect();
            sentence(&words)
        })
        .collect();
    let first = sentences[0].clone();
    for _ in 0..duplicates {
        sentences.push(first.clone());
    }
    sentences.join(" ")
}

/// Distinct sentences drawn from a twenty-word pool, each tagged with one
/// unique word. For 600+ words the unique-word ratio is below 0.15.
pub fn low_diversity_text(word_count: usize) -> String {
    let pool: Vec<String> = (0..20).map(pseudo_word).collect();
    let mut sentences = Vec::new();
    let mut produced = 0usize;
    let mut i = 0usize;
    while produced < word_count {
        let len = (word_count - produced).min(10);
        let mut words: Vec<String> = (0..len.saturating_sub(1))
            .map(|j| pool[(i * 3 + j * 7) % pool.len()].clone())
            .collect();
        words.push(pseudo_word(10_000 + i));
        produced += words.len();
        sentences.push(sentence(&words));
        i += 1;
    }
    sentences.join(" ")
}

/// Split a text into `parts` roughly equal messages on word boundaries.
pub fn as_messages(text: &str, parts: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let per = words.len().div_ceil(parts.max(1)).max(1);
    words.chunks(per).map(|c| c.join(" ")).collect()
}
