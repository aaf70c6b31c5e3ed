//! Sequence similarity based on longest matching blocks.
//!
//! The ratio of two strings `a` and `b` is `2·M / (|a| + |b|)`, where `M` is
//! the number of characters in the matching blocks found by repeatedly taking
//! the longest common substring and recursing on the pieces to its left and
//! right. Identical strings score 1.0, strings with nothing in common 0.0.

use std::collections::HashMap;

/// Length at which frequent characters of the fixed string stop seeding matches
const AUTOJUNK_MIN_LEN: usize = 200;

/// Compares many candidate strings against one fixed string.
///
/// The fixed string is indexed once, so scoring a candidate only walks the
/// candidate.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    b: Vec<char>,
    /// Positions of each character in `b`, ascending; frequent characters of
    /// long strings are left out
    b2j: HashMap<char, Vec<usize>>,
    b_counts: HashMap<char, usize>,
}

impl SequenceMatcher {
    pub fn new(b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        let mut b_counts: HashMap<char, usize> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
            *b_counts.entry(c).or_default() += 1;
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { b, b2j, b_counts }
    }

    /// Similarity of `a` to the fixed string, in `[0, 1]`
    pub fn ratio(&self, a: &[char]) -> f64 {
        calculate_ratio(self.matching_characters(a), a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from character counts alone
    pub fn quick_ratio(&self, a: &[char]) -> f64 {
        let mut available: HashMap<char, isize> = HashMap::new();
        let mut matches = 0;
        for &c in a {
            let remaining = available.entry(c).or_insert_with(|| {
                isize::try_from(self.b_counts.get(&c).copied().unwrap_or(0)).unwrap_or(isize::MAX)
            });
            if *remaining > 0 {
                matches += 1;
            }
            *remaining -= 1;
        }
        calculate_ratio(matches, a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone
    pub fn real_quick_ratio(&self, a_len: usize) -> f64 {
        calculate_ratio(a_len.min(self.b.len()), a_len + self.b.len())
    }

    /// Total size of the matching blocks between `a` and the fixed string
    fn matching_characters(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` within the given bounds.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`.
    fn find_longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // j -> length of the match ending at a[i-1], b[j]
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(c) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            run_lengths = next;
        }

        // Frequent characters were left out of the index; grow the block over them
        while best_i > alo && best_j > blo && a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}

#[allow(clippy::cast_precision_loss)] // String lengths are far below 2^52
fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// A candidate that scored at or above the cutoff
#[derive(Debug, Clone, PartialEq)]
pub struct CloseMatch<'c> {
    /// The candidate string
    pub candidate: &'c str,
    /// Position of the candidate in the input slice
    pub index: usize,
    /// Similarity ratio
    pub score: f64,
}

/// The best `limit` candidates whose similarity to `word` is at least `cutoff`.
///
/// Results are ordered by score, highest first. Equal scores are ordered by
/// candidate string, descending, then by input position. Duplicate candidate
/// strings are all reported.
pub fn close_matches<'c, S: AsRef<str>>(
    word: &str,
    candidates: &'c [S],
    limit: usize,
    cutoff: f64,
) -> Vec<CloseMatch<'c>> {
    if limit == 0 {
        return Vec::new();
    }

    let matcher = SequenceMatcher::new(word);
    let mut scored: Vec<CloseMatch<'c>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let candidate = candidate.as_ref();
            let chars: Vec<char> = candidate.chars().collect();
            if matcher.real_quick_ratio(chars.len()) < cutoff
                || matcher.quick_ratio(&chars) < cutoff
            {
                return None;
            }
            let score = matcher.ratio(&chars);
            (score >= cutoff).then_some(CloseMatch {
                candidate,
                index,
                score,
            })
        })
        .collect();

    scored.sort_by(|x, y| {
        y.score
            .partial_cmp(&x.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| y.candidate.cmp(x.candidate))
            .then_with(|| x.index.cmp(&y.index))
    });
    scored.truncate(limit);
    scored
}
