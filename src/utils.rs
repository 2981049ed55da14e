/// How close a user's answer is to the stored correct answer, as a 0-100
/// percentage. Sørensen–Dice coefficient over character bigrams of the
/// trimmed, case-folded strings.
pub fn similarity_percent(user_input: &str, answer: &str) -> i64 {
    let left = normalize(user_input);
    let right = normalize(answer);

    if left == right {
        return 100;
    }

    let left_bigrams = bigrams(&left);
    let right_bigrams = bigrams(&right);
    if left_bigrams.is_empty() || right_bigrams.is_empty() {
        return 0;
    }

    let mut remaining = right_bigrams.clone();
    let mut shared = 0usize;
    for bigram in &left_bigrams {
        if let Some(pos) = remaining.iter().position(|b| b == bigram) {
            remaining.swap_remove(pos);
            shared += 1;
        }
    }

    let total = left_bigrams.len() + right_bigrams.len();
    ((2.0 * shared as f64 / total as f64) * 100.0).round() as i64
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn bigrams(s: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}
