use wordprobe_core::{Profile, YearValue};
use wordprobe_generate::{GenerateOptions, Generator, WATERMARK};

const WEAK_PASSWORDS: [&str; 11] = [
    "123456",
    "password",
    "qwerty",
    "admin",
    "letmein",
    "welcome",
    "12345678",
    "123456789",
    "1234567890",
    "abc123",
    "password1",
];

fn rich_profile() -> Profile {
    Profile {
        full_name: Some("John Smith".to_string()),
        nickname: Some("Johnny".to_string()),
        dob: Some("15/06/1990".to_string()),
        phone: Some("5551234567".to_string()),
        email: Some("john@example.com".to_string()),
        lucky_number: Some("7".to_string()),
        extra_words: vec!["Rex".to_string()],
        important_years: vec![YearValue::Number(2015)],
        ..Profile::default()
    }
}

fn unmarked(line: &str) -> &str {
    assert!(
        line.ends_with(WATERMARK),
        "candidate {line:?} is missing the watermark"
    );
    &line[..line.len() - WATERMARK.len()]
}

#[test]
fn every_candidate_is_watermarked_and_length_bounded() {
    let options = GenerateOptions::default();
    let lines = Generator::new(options.clone()).run(&rich_profile());
    assert!(!lines.is_empty());

    for line in &lines {
        let base = unmarked(line);
        let len = base.chars().count();
        assert!(
            len >= options.min_len && len <= options.max_len,
            "candidate {base:?} has out-of-bounds length {len}"
        );
        assert!(!WEAK_PASSWORDS.contains(&base));
    }
}

#[test]
fn result_never_exceeds_the_requested_count() {
    let options = GenerateOptions {
        count: 50,
        ..GenerateOptions::default()
    };
    let lines = Generator::new(options).run(&rich_profile());
    assert_eq!(lines.len(), 50);
}

#[test]
fn result_never_exceeds_the_output_ceiling() {
    let options = GenerateOptions {
        count: 9999,
        ..GenerateOptions::default()
    };
    let lines = Generator::new(options).run(&rich_profile());
    assert!(lines.len() <= 5000);
}

#[test]
fn profile_without_tokens_yields_nothing() {
    let lines = Generator::new(GenerateOptions::default()).run(&Profile::default());
    assert!(lines.is_empty());

    // Fields that are not facts contribute no tokens either.
    let control_only = Profile {
        important_years: vec![YearValue::Number(2015)],
        apps: vec!["chess".to_string()],
        count: Some(100),
        ..Profile::default()
    };
    let lines = Generator::new(GenerateOptions::default()).run(&control_only);
    assert!(lines.is_empty());
}

#[test]
fn identical_input_produces_identical_output_sequences() {
    let profile = rich_profile();
    let first = Generator::new(GenerateOptions::default()).run(&profile);
    let second = Generator::new(GenerateOptions::default()).run(&profile);
    assert_eq!(first, second);
}

#[test]
fn name_and_birth_year_combinations_are_generated() {
    let profile = Profile {
        full_name: Some("John Smith".to_string()),
        dob: Some("15/06/1990".to_string()),
        extra_words: vec!["Rex".to_string()],
        ..Profile::default()
    };
    let lines = Generator::new(GenerateOptions::default()).run(&profile);

    let year_variants = ["1990", "1989", "1991", "90"];
    let hit = lines.iter().any(|line| {
        let base = unmarked(line).to_lowercase();
        base.contains("johnsmith") && year_variants.iter().any(|year| base.contains(year))
    });
    assert!(hit, "expected a johnsmith + birth-year derivation");
}

#[test]
fn single_short_token_yields_nothing_above_the_minimum_length() {
    let profile = Profile {
        extra_words: vec!["ab".to_string()],
        ..Profile::default()
    };
    let options = GenerateOptions {
        min_len: 6,
        ..GenerateOptions::default()
    };
    let lines = Generator::new(options).run(&profile);
    assert!(lines.is_empty());
}

#[test]
fn blacklisted_concatenations_are_rejected_but_variants_survive() {
    let profile = Profile {
        extra_words: vec!["pass".to_string(), "word".to_string()],
        ..Profile::default()
    };
    let options = GenerateOptions {
        include_specials: false,
        include_uppercase: false,
        ..GenerateOptions::default()
    };
    let lines = Generator::new(options).run(&profile);

    assert!(lines.contains(&format!("pass.word{WATERMARK}")));
    assert!(lines.contains(&format!("wordpass{WATERMARK}")));
    assert!(!lines.contains(&format!("password{WATERMARK}")));
    for line in &lines {
        assert!(!WEAK_PASSWORDS.contains(&unmarked(line)));
    }
}

#[test]
fn permutation_fallback_fills_remaining_capacity() {
    let profile = Profile {
        extra_words: vec![
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string(),
        ],
        ..Profile::default()
    };
    let options = GenerateOptions {
        count: 2000,
        include_specials: false,
        include_uppercase: false,
        ..GenerateOptions::default()
    };
    let lines = Generator::new(options).run(&profile);

    // Reversed-order concatenations only arise from the fallback.
    assert!(lines.contains(&format!("betaalpha{WATERMARK}")));
    assert!(lines.contains(&format!("gammabetaalpha{WATERMARK}")));
}

#[test]
fn disabling_specials_and_uppercase_suppresses_those_stages() {
    let profile = rich_profile();
    let options = GenerateOptions {
        include_specials: false,
        include_uppercase: false,
        ..GenerateOptions::default()
    };
    let lines = Generator::new(options).run(&profile);

    for line in &lines {
        let base = unmarked(line);
        assert!(
            !base.contains(['!', '@', '#', '$', '*']),
            "unexpected special character in {base:?}"
        );
        assert_eq!(base, base.to_lowercase(), "unexpected uppercase in {base:?}");
    }
}
