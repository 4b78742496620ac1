use std::collections::HashSet;

use wordprobe_core::{Profile, sanitize};

/// Pull every usable fact out of the profile as sanitized tokens.
///
/// Control fields contribute nothing; `extra_words` elements are always
/// merged in because they are explicit user-supplied tokens. Field
/// order is fixed and duplicates keep their first position, so
/// downstream pairing and permutation are reproducible for a given
/// profile.
pub fn extract_tokens(profile: &Profile) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    let facts = [
        profile.full_name.as_deref(),
        profile.nickname.as_deref(),
        profile.dob.as_deref(),
        profile.phone.as_deref(),
        profile.email.as_deref(),
        profile.lucky_number.as_deref(),
    ];
    for fact in facts.into_iter().flatten() {
        push_token(&mut seen, &mut tokens, sanitize(fact));
    }

    for word in &profile.extra_words {
        push_token(&mut seen, &mut tokens, sanitize(word));
    }

    tokens
}

fn push_token(seen: &mut HashSet<String>, tokens: &mut Vec<String>, token: String) {
    if !token.is_empty() && seen.insert(token.clone()) {
        tokens.push(token);
    }
}
