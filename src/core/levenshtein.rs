use crate::core::normalize::normalize;

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`, compared case-insensitively.
///
/// Runs the classic `(len(a)+1) × (len(b)+1)` recurrence but keeps only two
/// rows of it, so time is O(len(a)·len(b)) and memory O(min(len(a), len(b))).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = normalize(a);
    let b = normalize(b);
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    edit_distance(&a_chars, &b_chars)
}

/// Levenshtein similarity as a percentage (0-100)
///
/// `(max_len - distance) / max_len * 100`, with two empty strings defined as 100.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 100.0;
    }

    let distance = edit_distance(&a_chars, &b_chars);
    (max_len - distance) as f64 / max_len as f64 * 100.0
}

/// Cells in one rolling row of the edit-distance table for a pair of lengths
///
/// The shorter input runs along the row; two rows are live at a time.
#[inline]
pub fn row_cells(a_len: usize, b_len: usize) -> usize {
    a_len.min(b_len) + 1
}

fn edit_distance(a: &[char], b: &[char]) -> usize {
    // Distance is symmetric; keep the shorter input along the row
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..row_cells(long.len(), short.len())).collect();
    let mut curr = vec![0usize; prev.len()];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j + 1]         // deletion
                    .min(curr[j])       // insertion
                    .min(prev[j])       // substitution
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
