//! Ratcliff/Obershelp string similarity.
//!
//! Repeatedly takes the longest common contiguous block, then recurses into
//! the unmatched text on either side of it. The ratio is `2*M / (|a|+|b|)`
//! where `M` is the total length of all blocks found. Works on `char`s so
//! multi-byte text is compared per character, not per byte.
//!
//! Block search breaks ties by position in the first argument, so `M` can
//! depend on argument order (`"tide"`/`"diet"`). [`ratio`] scores both
//! orders and keeps the larger, which makes it symmetric.

/// A matched block: `a[a_start..a_start+len] == b[b_start..b_start+len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Similarity in `[0, 1]`, symmetric in its arguments.
/// Two empty strings are identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_len(&a, &b).max(matched_len(&b, &a));
    (2 * matched) as f64 / total as f64
}

fn matched_len(a: &[char], b: &[char]) -> usize {
    blocks(a, b).iter().map(|m| m.len).sum()
}

/// All matching blocks between `a` and `b`, sorted by position.
/// Unlike [`ratio`], this depends on argument order.
pub fn matching_blocks(a: &str, b: &str) -> Vec<Block> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    blocks(&a, &b)
}

fn blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut found = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = longest_match(a, b, alo, ahi, blo, bhi);
        if m.len == 0 {
            continue;
        }
        if alo < m.a_start && blo < m.b_start {
            pending.push((alo, m.a_start, blo, m.b_start));
        }
        if m.a_start + m.len < ahi && m.b_start + m.len < bhi {
            pending.push((m.a_start + m.len, ahi, m.b_start + m.len, bhi));
        }
        found.push(m);
    }

    found.sort_by_key(|m| (m.a_start, m.b_start));
    found
}

/// Longest common block inside `a[alo..ahi]` and `b[blo..bhi]`.
/// Ties go to the earliest start in `a`, then the earliest in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        len: 0,
    };
    // run[j + 1] = length of the common suffix ending at a[i], b[j]
    let width = bhi - blo + 1;
    let mut prev = vec![0usize; width];
    let mut run = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo;
            run[k + 1] = if a[i] == b[j] { prev[k] + 1 } else { 0 };
            if run[k + 1] > best.len {
                best = Block {
                    a_start: i + 1 - run[k + 1],
                    b_start: j + 1 - run[k + 1],
                    len: run[k + 1],
                };
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(x: f64, y: f64) -> bool {
        (x - y).abs() < 1e-9
    }

    #[test]
    fn test_identical() {
        assert!(close(ratio("what is the bus fee?", "what is the bus fee?"), 1.0));
        assert!(close(ratio("", ""), 1.0));
        assert!(close(ratio("ज्ञान", "ज्ञान"), 1.0));
    }

    #[test]
    fn test_disjoint_and_empty() {
        assert!(close(ratio("abc", "xyz"), 0.0));
        assert!(close(ratio("", "hostel rules"), 0.0));
        assert!(close(ratio("жжж", "hostel rules"), 0.0));
    }

    #[test]
    fn test_known_values() {
        // Matching blocks "bcd" => 2*3 / 8
        assert!(close(ratio("abcd", "bcde"), 0.75));
        // "hostel fee" is fully inside "what is the hostel fee?"
        assert!(close(ratio("hostel fee", "what is the hostel fee?"), 20.0 / 33.0));
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("what is the bus fee", "bus fees per year"),
            ("library timings", "what are the library timings?"),
            ("abcd", "dcba"),
            ("tide", "diet"),
            ("what is the hostel fee?", "hostel fees and rules"),
        ];
        for (a, b) in pairs {
            assert!(close(ratio(a, b), ratio(b, a)), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_order_dependent_blocks_take_best() {
        // "tide" → "diet" finds only "t"; "diet" → "tide" finds "d" and "e"
        let forward: usize = matching_blocks("tide", "diet").iter().map(|m| m.len).sum();
        let backward: usize = matching_blocks("diet", "tide").iter().map(|m| m.len).sum();
        assert_eq!((forward, backward), (1, 2));
        assert!(close(ratio("tide", "diet"), 0.5));
        assert!(close(ratio("diet", "tide"), 0.5));
    }

    #[test]
    fn test_contiguous_beats_scattered() {
        let contiguous = ratio("abcd", "abcdxxxx");
        let scattered = ratio("abcd", "dcbaxxxx");
        assert!(contiguous > scattered);
    }

    #[test]
    fn test_matching_blocks() {
        let blocks = matching_blocks("abxcd", "abcd");
        assert_eq!(
            blocks,
            vec![
                Block { a_start: 0, b_start: 0, len: 2 },
                Block { a_start: 3, b_start: 2, len: 2 },
            ]
        );
    }

    #[test]
    fn test_tie_prefers_earliest() {
        // "ab" occurs twice in b, the first occurrence wins
        let blocks = matching_blocks("ab", "abab");
        assert_eq!(blocks, vec![Block { a_start: 0, b_start: 0, len: 2 }]);
    }
}
