//! Letter frequency calculations
//!
//! Counts, for every letter, how many candidate words contain it at least once.
//! A letter present in many candidates is the guess most likely to hit.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Letters of English ordered from most to least common
pub const ENGLISH_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Count the candidate words containing each letter
///
/// Each word counts at most once per letter, so "kitten" adds 1 to `t`.
#[must_use]
pub fn letter_coverage(candidates: &[&Word]) -> FxHashMap<u8, usize> {
    let mut coverage: FxHashMap<u8, usize> = FxHashMap::default();
    for word in candidates {
        let mut seen = [false; 26];
        for &letter in word.letters() {
            let idx = usize::from(letter - b'a');
            if !seen[idx] {
                seen[idx] = true;
                *coverage.entry(letter).or_insert(0) += 1;
            }
        }
    }
    coverage
}

/// Pick the letter outside `excluded` covering the most candidates
///
/// Ties go to the alphabetically first letter. Returns `None` if no candidate
/// contains an unexcluded letter.
#[must_use]
pub fn most_common_letter(candidates: &[&Word], excluded: &[u8]) -> Option<(u8, usize)> {
    let coverage = letter_coverage(candidates);
    (b'a'..=b'z')
        .filter(|letter| !excluded.contains(letter))
        .filter_map(|letter| coverage.get(&letter).map(|&count| (letter, count)))
        .fold(None, |best: Option<(u8, usize)>, (letter, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((letter, count)),
        })
}

/// First letter of [`ENGLISH_ORDER`] not yet excluded
#[must_use]
pub fn english_fallback(excluded: &[u8]) -> Option<u8> {
    ENGLISH_ORDER
        .iter()
        .copied()
        .find(|letter| !excluded.contains(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t, "").unwrap()).collect()
    }

    #[test]
    fn coverage_counts_each_word_once() {
        let owned = words(&["kitten", "mitten"]);
        let refs: Vec<&Word> = owned.iter().collect();
        let coverage = letter_coverage(&refs);

        assert_eq!(coverage.get(&b't'), Some(&2));
        assert_eq!(coverage.get(&b'k'), Some(&1));
        assert_eq!(coverage.get(&b'm'), Some(&1));
        assert_eq!(coverage.get(&b'z'), None);
    }

    #[test]
    fn most_common_skips_excluded() {
        let owned = words(&["kitten", "mitten", "bitten"]);
        let refs: Vec<&Word> = owned.iter().collect();

        // i, t, e, n all cover 3 words; 'e' is alphabetically first
        assert_eq!(most_common_letter(&refs, &[]), Some((b'e', 3)));
        assert_eq!(most_common_letter(&refs, b"eint"), Some((b'b', 1)));
    }

    #[test]
    fn most_common_none_when_all_excluded() {
        let owned = words(&["aaa"]);
        let refs: Vec<&Word> = owned.iter().collect();
        assert_eq!(most_common_letter(&refs, b"a"), None);
        assert_eq!(most_common_letter(&[], b""), None);
    }

    #[test]
    fn english_fallback_order() {
        assert_eq!(english_fallback(&[]), Some(b'e'));
        assert_eq!(english_fallback(b"et"), Some(b'a'));
        assert_eq!(english_fallback(ENGLISH_ORDER), None);
    }
}
