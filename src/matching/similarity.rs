//! Positional character-similarity scoring for fuzzy matching.

/// Calculate the positional character similarity between two strings.
///
/// This is a cheap order-aware approximation of edit distance, tolerant of
/// insertions and deletions, favoring characters that appear near the same
/// relative position in both strings. The result is in [0.0, 1.0], and 1.0
/// arises only from true equality of the two strings.
///
/// Each character index of the longer string contributes one full point for a
/// direct positional match, or partial credit `1 - |i - j| / divisor` for the
/// nearest occurrence of that character elsewhere in the shorter string. The
/// final score is the point total divided by the longer string's length.
pub fn positional_similarity(a: &str, b: &str) -> f64 {
    // Exact equality short-circuits, and covers the both-empty case
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // The longer string drives the scan; ties keep `a`
    let (larger, smaller) = if b_chars.len() > a_chars.len() {
        (&b_chars, &a_chars)
    } else {
        (&a_chars, &b_chars)
    };

    let divisor = larger.len();
    if divisor == 0 {
        // Both empty is caught by the equality branch above
        return 0.0;
    }

    let mut points = 0.0;
    for (i, &ch) in larger.iter().enumerate() {
        if smaller.get(i) == Some(&ch) {
            // Same character at the same index
            points += 1.0;
        } else if let Some(distance) = nearest_occurrence(smaller, ch, i) {
            // Partial credit that decays with positional distance
            points += 1.0 - distance as f64 / divisor as f64;
        }
    }

    points / divisor as f64
}

/// Find the occurrence of `ch` in `chars` closest to index `i`, returning the
/// positional distance `|i - j|`. Returns `None` if `ch` does not occur.
fn nearest_occurrence(chars: &[char], ch: char, i: usize) -> Option<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == ch)
        .map(|(j, _)| i.abs_diff(j))
        .min()
}
