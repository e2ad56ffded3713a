use crate::core::normalize::normalize;

/// Winkler prefix scaling factor
const PREFIX_SCALE: f64 = 0.1;

/// Longest common prefix that earns the Winkler boost
const MAX_PREFIX_LEN: usize = 4;

/// Jaro similarity (0-1) of two strings, compared case-insensitively.
///
/// Characters match when equal and no further apart than
/// `max(len1, len2) / 2 - 1` positions. With `m` matches and `t` matched
/// pairs that appear in a different order:
///
/// `jaro = (m/len1 + m/len2 + (m - t/2)/m) / 3`
///
/// Identical strings (including two empty ones) are 1.0; no matches is 0.0.
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a == b {
        return 1.0;
    }

    // Canonical order keeps the greedy matching symmetric
    let (first, second) = if a <= b { (&a, &b) } else { (&b, &a) };
    let s1: Vec<char> = first.chars().collect();
    let s2: Vec<char> = second.chars().collect();

    jaro_chars(&s1, &s2)
}

fn jaro_chars(s1: &[char], s2: &[char]) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();
    if len1 == 0 || len2 == 0 {
        return 0.0;
    }

    let window = (len1.max(len2) / 2).saturating_sub(1);
    let mut matched1 = vec![false; len1];
    let mut matched2 = vec![false; len2];
    let mut matches = 0usize;

    for (i, c1) in s1.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len2);

        for j in start..end {
            if matched2[j] || *c1 != s2[j] {
                continue;
            }
            matched1[i] = true;
            matched2[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0;
    for (i, c1) in s1.iter().enumerate() {
        if !matched1[i] {
            continue;
        }
        while !matched2[k] {
            k += 1;
        }
        if *c1 != s2[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;

    (m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0
}

/// Length of the shared prefix, capped at four characters
#[inline]
pub fn common_prefix_length(a: &str, b: &str) -> usize {
    let a = normalize(a);
    let b = normalize(b);

    a.chars()
        .zip(b.chars())
        .take(MAX_PREFIX_LEN)
        .take_while(|(c1, c2)| c1 == c2)
        .count()
}

/// Jaro-Winkler similarity (0-1)
///
/// `jaro + prefix_len * 0.1 * (1 - jaro)`
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    let jaro = jaro_distance(&a, &b);

    jaro + common_prefix_length(&a, &b) as f64 * PREFIX_SCALE * (1.0 - jaro)
}

/// Jaro-Winkler similarity as a percentage (0-100)
#[inline]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    (jaro_winkler(a, b) * 100.0).clamp(0.0, 100.0)
}
