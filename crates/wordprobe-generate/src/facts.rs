use std::sync::LazyLock;

use regex::Regex;

use wordprobe_core::{Profile, sanitize};

static DOB_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("dob pattern compiles"));

/// Structured decomposition of a `DD/MM/YYYY` date of birth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DobParts {
    pub dd: String,
    pub mm: String,
    pub yyyy: String,
    /// Concatenated digits, `dd + mm + yyyy`.
    pub full: String,
}

impl DobParts {
    /// Parse a date of birth in strict `DD/MM/YYYY` form. Any other
    /// shape yields `None` and callers proceed without DOB facts.
    pub fn parse(dob: &str) -> Option<Self> {
        let captures = DOB_SHAPE.captures(dob)?;
        let dd = captures[1].to_string();
        let mm = captures[2].to_string();
        let yyyy = captures[3].to_string();
        let full = format!("{dd}{mm}{yyyy}");
        Some(Self { dd, mm, yyyy, full })
    }
}

/// Gather the numeric strings usable as suffix material: DOB year,
/// each important year truncated to its last four characters, the
/// sanitized lucky number, and the phone's last four digits plus the
/// full number when it is exactly ten digits. Duplicates are allowed;
/// order is fixed so output stays reproducible.
pub fn number_pool(profile: &Profile, dob: Option<&DobParts>) -> Vec<String> {
    let mut numbers = Vec::new();

    if let Some(parts) = dob {
        numbers.push(parts.yyyy.clone());
    }

    for year in &profile.important_years {
        let text = year.to_text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let chars: Vec<char> = trimmed.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        numbers.push(tail);
    }

    if let Some(lucky) = profile.lucky_number.as_deref() {
        let lucky = sanitize(lucky);
        if !lucky.is_empty() {
            numbers.push(lucky);
        }
    }

    if let Some(phone) = profile.phone.as_deref() {
        let phone = sanitize(phone);
        if phone.len() == 10 && phone.chars().all(|ch| ch.is_ascii_digit()) {
            numbers.push(phone[6..].to_string());
            numbers.push(phone);
        }
    }

    numbers
}
