use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use wordprobe_core::{Profile, sanitize};

use crate::MAX_OUTPUT;
use crate::accumulator::CandidateSet;
use crate::facts::{DobParts, number_pool};
use crate::model::GenerateOptions;
use crate::tokens::extract_tokens;
use crate::transforms;

/// Prefix caps bounding how many accumulated candidates each layering
/// stage re-derives from. Later candidates simply receive fewer
/// transforms; the caps are part of the observable contract.
const CASE_CAP: usize = 300;
const LEET_CAP: usize = 200;
const SPECIALS_CAP: usize = 400;
const NUMERIC_CAP: usize = 300;

/// Candidate-generation pipeline entry point.
///
/// One `run` call is fully self-contained: the RNG is constructed from
/// the configured seed per call and threaded through, so concurrent
/// callers never share randomness state and identical inputs produce
/// identical output sequences.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, profile: &Profile) -> Vec<String> {
        let options = &self.options;
        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);

        let tokens = extract_tokens(profile);
        if tokens.is_empty() {
            debug!("no usable tokens in profile");
            return Vec::new();
        }
        debug!(tokens = tokens.len(), "tokens extracted");

        let mut candidates = CandidateSet::new(options.min_len, options.max_len);
        let dob = profile.dob.as_deref().and_then(DobParts::parse);
        let numbers = number_pool(profile, dob.as_ref());

        // Highest-realism combinations are seeded first so they sit at
        // the front of every stage's prefix window.
        let name = [profile.full_name.as_deref(), profile.nickname.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .map(sanitize)
            .unwrap_or_default();

        if !name.is_empty() {
            if let Some(parts) = &dob {
                for variant in transforms::date_variants(parts) {
                    candidates.add(&format!("{name}{variant}"));
                    candidates.add(&format!("{variant}{name}"));
                }
            }
            if let Some(raw) = profile.lucky_number.as_deref()
                && !raw.is_empty()
            {
                let lucky = sanitize(raw);
                candidates.add(&format!("{name}{lucky}"));
                candidates.add(&format!("{lucky}{name}"));
            }
        }

        for pair in transforms::pairwise(&tokens) {
            candidates.add(&pair);
        }

        if options.include_uppercase {
            for base in candidates.bases(CASE_CAP) {
                for variant in transforms::case_variants(&base, true) {
                    candidates.add(&variant);
                }
            }
        }

        for base in candidates.bases(LEET_CAP) {
            for variant in transforms::leet_variants(&base) {
                candidates.add(&variant);
            }
        }

        if options.include_specials {
            for base in candidates.bases(SPECIALS_CAP) {
                for variant in transforms::append_specials(&base, true) {
                    candidates.add(&variant);
                }
                for variant in transforms::insert_special(&base, true) {
                    candidates.add(&variant);
                }
            }
        }

        for base in candidates.bases(NUMERIC_CAP) {
            for variant in transforms::numeric_suffixes(&base, &numbers) {
                candidates.add(&variant);
            }
        }

        // Fallback only fills remaining capacity; each consumed
        // permutation spends one attempt whether or not it is admitted.
        let mut remaining = options.count.saturating_sub(candidates.len());
        if remaining > 0 {
            let mut perms = transforms::permutations(&tokens);
            perms.shuffle(&mut rng);
            for perm in perms {
                if remaining == 0 {
                    break;
                }
                candidates.add(&perm);
                remaining -= 1;
            }
            debug!(accumulated = candidates.len(), "permutation fallback consumed");
        }

        let mut lines = candidates.into_candidates();
        lines.shuffle(&mut rng);
        lines.truncate(options.count.min(MAX_OUTPUT));

        info!(emitted = lines.len(), "generation finished");
        lines
    }
}
