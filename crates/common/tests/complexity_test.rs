use alp_common::complexity::{analyze, ComplexityLevel};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_empty_input_scores_zero() {
    let result = analyze("");

    assert_eq!(result.factors.length, 0);
    assert_eq!(result.factors.unique_words, 0);
    assert_eq!(result.factors.special_characters, 0);
    assert_close(result.factors.average_word_length, 0.0);
    assert_close(result.score, 0.0);
    assert_eq!(result.level, ComplexityLevel::Low);
}

#[test]
fn test_whitespace_only_input_has_no_tokens() {
    let result = analyze("   \t\n");

    // Whitespace still counts toward raw length, but yields no tokens.
    assert_eq!(result.factors.length, 5);
    assert_eq!(result.factors.unique_words, 0);
    assert_close(result.factors.average_word_length, 0.0);
    assert_eq!(result.factors.special_characters, 0);
    assert_close(result.score, 5.0 / 500.0 * 25.0);
    assert_eq!(result.level, ComplexityLevel::Low);
}

#[test]
fn test_simple_prompt_breakdown() {
    let result = analyze("Explain quantum computing.");

    assert_eq!(result.factors.length, 26);
    assert_eq!(result.factors.unique_words, 3);
    assert_eq!(result.factors.special_characters, 1);
    assert_close(result.factors.average_word_length, 8.0);

    let subs = result.sub_scores();
    assert_close(subs.length, 26.0 / 500.0 * 25.0);
    assert_close(subs.unique_words, 3.0 / 100.0 * 25.0);
    assert_close(subs.average_word_length, 8.0 / 10.0 * 25.0);
    assert_close(subs.special_characters, 1.0 / 50.0 * 25.0);
    assert_close(result.score, subs.total());
    assert_eq!(result.level, ComplexityLevel::Low);
}

#[test]
fn test_unique_words_are_case_insensitive() {
    let result = analyze("Rust rust RUST tokio");
    assert_eq!(result.factors.unique_words, 2);
}

#[test]
fn test_special_characters_counted_on_raw_input() {
    // Punctuation, braces, and non-ASCII letters all count; digits do not.
    let result = analyze("fn main() { 42 } é");
    assert_eq!(result.factors.special_characters, 5);
}

#[test]
fn test_all_factors_saturated_scores_exactly_100() {
    // 120 unique 12-char words, each carrying one special character:
    // every factor is past its saturation point.
    let text = (0..120)
        .map(|i| format!("w{:03}abcdefg@", i))
        .collect::<Vec<_>>()
        .join(" ");

    let result = analyze(&text);
    assert!(result.factors.length > 500);
    assert!(result.factors.unique_words > 100);
    assert!(result.factors.average_word_length > 10.0);
    assert!(result.factors.special_characters > 50);
    assert_close(result.score, 100.0);
    assert_eq!(result.level, ComplexityLevel::High);
}

#[test]
fn test_score_stays_in_bounds() {
    let long = "x".repeat(10_000);
    let noisy = "!@#$%^&*()".repeat(20);
    let samples = [
        "",
        "hi",
        "What is 2 + 2?",
        "Explain the borrow checker in depth, with examples of lifetimes.",
        long.as_str(),
        noisy.as_str(),
        "日本語のプロンプトです。",
    ];

    for text in samples {
        let result = analyze(text);
        assert!(
            (0.0..=100.0).contains(&result.score),
            "score out of range for {:?}: {}",
            text,
            result.score
        );
    }
}

#[test]
fn test_level_thresholds_match_score() {
    let medium = (0..30)
        .map(|i| format!("token{:02}", i))
        .collect::<Vec<_>>()
        .join(" ");
    let high = (0..200)
        .map(|i| format!("w{:03}abcdefg@", i))
        .collect::<Vec<_>>()
        .join(" ");
    let samples = [
        "",
        "short one",
        "A somewhat longer prompt with punctuation, several distinct words, and more!",
        medium.as_str(),
        high.as_str(),
    ];

    for text in samples {
        let result = analyze(text);
        let expected = if result.score < 33.0 {
            ComplexityLevel::Low
        } else if result.score < 66.0 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        };
        assert_eq!(result.level, expected, "wrong level for score {}", result.score);
    }
}

#[test]
fn test_analyze_is_deterministic() {
    let text = "The same input must always produce the same result, bit for bit.";
    assert_eq!(analyze(text), analyze(text));
}

#[test]
fn test_length_factor_monotone_until_saturation() {
    let mut previous = 0.0;
    for n in 1..=600 {
        let score = analyze(&"a".repeat(n)).score;
        assert!(
            score >= previous,
            "score decreased at length {}: {} < {}",
            n,
            score,
            previous
        );
        previous = score;
    }

    // Flat past the 500-character saturation point.
    assert_close(analyze(&"a".repeat(500)).score, analyze(&"a".repeat(600)).score);
}
