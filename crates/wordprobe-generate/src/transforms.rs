//! Pure transform stages. Each takes one or more base strings and
//! yields a finite list of candidate strings; none touch shared state.

use crate::facts::DobParts;

/// Symbols appended or prefixed by the append stage.
const APPEND_SPECIALS: [char; 5] = ['!', '@', '#', '$', '*'];

/// Symbols inserted at interior positions by the insert stage.
const INSERT_SPECIALS: [char; 4] = ['!', '@', '1', '2'];

/// Suffix material used even when the profile supplies no numbers.
const FALLBACK_NUMBERS: [&str; 9] = ["1", "2", "3", "123", "007", "69", "420", "12", "21"];

/// Lowercase always; with `include_upper`, also UPPER, Capitalized and
/// an alternating-case form (even positions upper) for multi-character
/// bases.
pub fn case_variants(base: &str, include_upper: bool) -> Vec<String> {
    let mut variants = vec![base.to_lowercase()];
    if include_upper {
        variants.push(base.to_uppercase());
        variants.push(capitalize(base));
        if base.chars().count() > 1 {
            variants.push(alternate_case(base));
        }
    }
    variants
}

fn capitalize(base: &str) -> String {
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn alternate_case(base: &str) -> String {
    base.chars()
        .enumerate()
        .map(|(index, ch)| {
            if index % 2 == 0 {
                ch.to_uppercase().to_string()
            } else {
                ch.to_lowercase().to_string()
            }
        })
        .collect()
}

fn leet_char(ch: char) -> Option<char> {
    match ch {
        'a' => Some('4'),
        'e' => Some('3'),
        'i' => Some('1'),
        'o' => Some('0'),
        's' => Some('5'),
        't' => Some('7'),
        'g' => Some('9'),
        'b' => Some('8'),
        _ => None,
    }
}

/// One fully-substituted variant plus one variant per substitutable
/// character position; positions outside the map are skipped.
pub fn leet_variants(base: &str) -> Vec<String> {
    let full: String = base.chars().map(|ch| leet_char(ch).unwrap_or(ch)).collect();
    let mut variants = vec![full];

    let chars: Vec<char> = base.chars().collect();
    for (index, ch) in chars.iter().enumerate() {
        if let Some(substitute) = leet_char(*ch) {
            let mut single = chars.clone();
            single[index] = substitute;
            variants.push(single.iter().collect());
        }
    }
    variants
}

/// `base+s` and `s+base` for each append symbol; empty when disabled.
pub fn append_specials(base: &str, include: bool) -> Vec<String> {
    if !include {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(APPEND_SPECIALS.len() * 2);
    for symbol in APPEND_SPECIALS {
        out.push(format!("{base}{symbol}"));
    }
    for symbol in APPEND_SPECIALS {
        out.push(format!("{symbol}{base}"));
    }
    out
}

/// One insert symbol at every interior position; empty when disabled or
/// the base is shorter than two characters.
pub fn insert_special(base: &str, include: bool) -> Vec<String> {
    let chars: Vec<char> = base.chars().collect();
    if !include || chars.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(INSERT_SPECIALS.len() * (chars.len() - 1));
    for symbol in INSERT_SPECIALS {
        for position in 1..chars.len() {
            let mut inserted: String = chars[..position].iter().collect();
            inserted.push(symbol);
            inserted.extend(chars[position..].iter());
            out.push(inserted);
        }
    }
    out
}

/// `base+n` and `n+base` for the supplied numbers followed by the fixed
/// fallback list.
pub fn numeric_suffixes(base: &str, numbers: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for number in numbers.iter().map(String::as_str).chain(FALLBACK_NUMBERS) {
        out.push(format!("{base}{number}"));
        out.push(format!("{number}{base}"));
    }
    out
}

/// The seven fixed date derivations for a parsed date of birth.
pub fn date_variants(parts: &DobParts) -> Vec<String> {
    let mut variants = vec![
        parts.full.clone(),
        format!("{}{}{}", parts.dd, parts.mm, parts.yyyy),
        parts.yyyy.clone(),
        parts.yyyy[2..].to_string(),
    ];
    if let Ok(year) = parts.yyyy.parse::<i32>() {
        variants.push((year - 1).to_string());
        variants.push((year + 1).to_string());
    }
    variants.push(format!("{}-{}-{}", parts.dd, parts.mm, parts.yyyy));
    variants
}

/// `a+b`, `a.b`, `a_b` for every unordered pair of distinct tokens, in
/// token order.
pub fn pairwise(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for (index, a) in tokens.iter().enumerate() {
        for b in &tokens[index + 1..] {
            out.push(format!("{a}{b}"));
            out.push(format!("{a}.{b}"));
            out.push(format!("{a}_{b}"));
        }
    }
    out
}

/// Ordered permutations of the tokens taken two and three at a time,
/// concatenated with no separator. Callers shuffle before consuming.
pub fn permutations(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for (i, a) in tokens.iter().enumerate() {
        for (j, b) in tokens.iter().enumerate() {
            if j == i {
                continue;
            }
            out.push(format!("{a}{b}"));
        }
    }
    for (i, a) in tokens.iter().enumerate() {
        for (j, b) in tokens.iter().enumerate() {
            if j == i {
                continue;
            }
            for (k, c) in tokens.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                out.push(format!("{a}{b}{c}"));
            }
        }
    }
    out
}
