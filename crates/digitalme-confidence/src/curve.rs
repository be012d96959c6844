/// Knots of the base curve: (total words, base confidence).
/// Linear between knots, flat after the last one.
pub const BASE_CURVE: [(u64, f64); 8] = [
    (0, 0.05),
    (100, 0.20),
    (500, 0.35),
    (1_500, 0.55),
    (3_000, 0.70),
    (5_000, 0.80),
    (10_000, 0.88),
    (20_000, 0.92),
];

/// Base confidence for `total_words` of evidence. Continuous and non-decreasing.
pub fn base_confidence(total_words: u64) -> f64 {
    for pair in BASE_CURVE.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if total_words < x1 {
            let t = (total_words - x0) as f64 / (x1 - x0) as f64;
            return y0 + t * (y1 - y0);
        }
    }
    BASE_CURVE[BASE_CURVE.len() - 1].1
}
