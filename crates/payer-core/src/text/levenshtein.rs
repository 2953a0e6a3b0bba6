//! Levenshtein edit distance.

/// Case-insensitive Levenshtein distance over Unicode scalar values.
///
/// Insertion, deletion and substitution each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Smallest distance from `word` to any of `tokens`, or `None` if `tokens` is empty.
pub fn min_distance<'a, I>(word: &str, tokens: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<usize> = None;
    for token in tokens {
        let d = levenshtein(word, token);
        if best.is_none_or(|b| d < b) {
            best = Some(d);
            if d == 0 {
                break;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_case_insensitive() {
        assert_eq!(levenshtein("JULIA", "julia"), 0);
        assert_eq!(levenshtein("SOUZA", "souza"), 0);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("JOÃO", "joao"), 1);
        assert_eq!(levenshtein("conceição", "conceicao"), 2);
    }

    #[test]
    fn test_min_distance() {
        assert_eq!(min_distance("SILVA", ["ana", "silva", "souza"]), Some(0));
        assert_eq!(min_distance("SLIVA", ["ana", "silva"]), Some(2));
        assert_eq!(min_distance("SILVA", std::iter::empty()), None);
    }
}
