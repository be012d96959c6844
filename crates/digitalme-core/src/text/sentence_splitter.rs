//! Split prose into sentences for duplicate detection and style heuristics.

/// Split text into sentences using punctuation and line boundaries.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    for i in 0..len {
        let c = chars[i];

        // Blank lines separate messages even without terminal punctuation.
        if c == '\n' && i + 1 < len && chars[i + 1] == '\n' {
            push_sentence(&mut sentences, &mut current);
            continue;
        }

        current.push(c);

        let is_terminal = matches!(c, '.' | '!' | '?');
        if !is_terminal {
            continue;
        }

        // Look ahead: next char should be whitespace or end-of-string for a real boundary.
        let at_end = i + 1 >= len;
        let next_is_space = !at_end && chars[i + 1].is_whitespace();

        if at_end || next_is_space {
            push_sentence(&mut sentences, &mut current);
        }
    }

    // Remaining text that didn't end with punctuation.
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.chars().count() > 2 {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Comparison form of a sentence: lowercase, whitespace collapsed, trailing punctuation dropped.
pub fn normalize_sentence(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
        .to_string()
}
