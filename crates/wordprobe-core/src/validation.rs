use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::profile::Profile;

/// Phrase a caller must supply before any generation happens.
pub const AUTH_PHRASE: &str = "I_HAVE_PERMISSION";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern compiles"));

/// Validate a submitted profile and return a normalized copy.
///
/// Checks, in order: authorization phrase, required fields, DOB shape
/// and calendar ranges, phone digit count, email shape. Normalization
/// rewrites the DOB as zero-padded `DD/MM/YYYY`, strips non-digits from
/// the phone, and trims the email. The first failing check wins.
pub fn validate_profile(profile: &Profile) -> Result<Profile> {
    if profile.auth_phrase.as_deref() != Some(AUTH_PHRASE) {
        return Err(ValidationError::AuthPhrase);
    }

    for (field, value) in [
        ("full_name", &profile.full_name),
        ("dob", &profile.dob),
        ("phone", &profile.phone),
        ("email", &profile.email),
    ] {
        if value.as_deref().is_none_or(str::is_empty) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let mut normalized = profile.clone();

    let dob = profile.dob.as_deref().unwrap_or_default().trim();
    normalized.dob = Some(normalize_dob(dob)?);

    let phone: String = profile
        .phone
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    if phone.len() != 10 {
        return Err(ValidationError::PhoneDigits);
    }
    normalized.phone = Some(phone);

    let email = profile.email.as_deref().unwrap_or_default().trim();
    if email.contains('@') && !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::EmailFormat);
    }
    normalized.email = Some(email.to_string());

    Ok(normalized)
}

/// Accepts `/` or `-` separators and unpadded day/month parts, then
/// renders the canonical zero-padded form the generator parses.
fn normalize_dob(dob: &str) -> Result<String> {
    let parts: Vec<&str> = dob.split(['/', '-']).collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|part| part.is_empty() || !part.chars().all(|ch| ch.is_ascii_digit()))
    {
        return Err(ValidationError::DobFormat);
    }

    let numbers: Vec<u32> = parts
        .iter()
        .map(|part| part.parse())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| ValidationError::DobFormat)?;
    let &[dd, mm, yyyy] = numbers.as_slice() else {
        return Err(ValidationError::DobFormat);
    };

    if !(1..=31).contains(&dd) || !(1..=12).contains(&mm) || !(1900..=2100).contains(&yyyy) {
        return Err(ValidationError::DobRange);
    }

    Ok(format!("{dd:02}/{mm:02}/{yyyy}"))
}
