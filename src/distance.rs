//! String distance and name normalization helpers

/// Compute the Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost one. Works on Unicode
/// scalar values, so a multi-byte character counts as a single edit.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    let len_a = chars_a.len();
    let len_b = chars_b.len();

    let mut matrix = vec![vec![0usize; len_b + 1]; len_a + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=len_b {
        matrix[0][j] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let cost = usize::from(chars_a[i - 1] != chars_b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[len_a][len_b]
}

/// Remove every occurrence of any character in `chars` from `s`
pub fn strip_chars(s: &str, chars: &str) -> String {
    s.chars().filter(|c| !chars.contains(*c)).collect()
}
