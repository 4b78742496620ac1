use std::collections::HashSet;

use crate::WATERMARK;

/// Common weak passwords rejected before admission. Compared against
/// the unmarked candidate verbatim; kept deliberately small.
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

/// Insertion-ordered set of admitted, watermarked candidates.
///
/// Admission checks the unmarked string: character length within the
/// configured bounds and not a known weak password. Insertion order is
/// preserved so the prefix caps applied by later stages are
/// well-defined and reproducible.
#[derive(Debug)]
pub struct CandidateSet {
    min_len: usize,
    max_len: usize,
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl CandidateSet {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len,
            max_len,
            seen: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Admit a candidate, watermarking it on the way in. A no-op when
    /// the candidate fails the length or weak-password checks or is
    /// already present.
    pub fn add(&mut self, candidate: &str) {
        let len = candidate.chars().count();
        if len < self.min_len || len > self.max_len {
            return;
        }
        if WEAK_PASSWORDS.contains(&candidate) {
            return;
        }

        let marked = format!("{candidate}{WATERMARK}");
        if self.seen.insert(marked.clone()) {
            self.ordered.push(marked);
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Unmarked bases of the first `cap` admitted candidates, snapshot
    /// at call time so a stage can feed its own output back in.
    pub fn bases(&self, cap: usize) -> Vec<String> {
        self.ordered
            .iter()
            .take(cap)
            .map(|candidate| candidate[..candidate.len() - WATERMARK.len()].to_string())
            .collect()
    }

    pub fn into_candidates(self) -> Vec<String> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateSet;
    use crate::WATERMARK;

    #[test]
    fn watermarks_admitted_candidates() {
        let mut set = CandidateSet::new(3, 10);
        set.add("rex07");
        assert_eq!(set.into_candidates(), vec![format!("rex07{WATERMARK}")]);
    }

    #[test]
    fn rejects_out_of_bounds_lengths() {
        let mut set = CandidateSet::new(6, 8);
        set.add("short");
        set.add("waytoolongbase");
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_weak_passwords_and_duplicates() {
        let mut set = CandidateSet::new(1, 20);
        set.add("password");
        set.add("123456");
        assert!(set.is_empty());

        set.add("rexthedog");
        set.add("rexthedog");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn bases_preserve_insertion_order_and_cap() {
        let mut set = CandidateSet::new(1, 20);
        set.add("first");
        set.add("second");
        set.add("third");
        assert_eq!(set.bases(2), vec!["first", "second"]);
    }
}
