// Fuzzy matching for search filters and "did you mean" suggestions

/// Edit distance between two strings (insertions, deletions, substitutions)
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == *cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Case-insensitive substring test (`needle` inside `haystack`)
pub fn is_substring_match(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Candidates within `max_distance` edits of `search`, or containing it
///
/// Closest first, at most three.
pub fn find_near_matches(search: &str, candidates: &[&str], max_distance: usize) -> Vec<String> {
    let search_lower = search.to_lowercase();
    let mut matches: Vec<(usize, &str)> = candidates
        .iter()
        .filter_map(|candidate| {
            let lower = candidate.to_lowercase();
            let distance = levenshtein_distance(&search_lower, &lower);
            if distance <= max_distance {
                Some((distance, *candidate))
            } else if !search_lower.is_empty() && lower.contains(&search_lower) {
                Some((max_distance + 1, *candidate))
            } else {
                None
            }
        })
        .collect();

    matches.sort();
    matches.into_iter().take(3).map(|(_, c)| c.to_string()).collect()
}

/// "unknown X 'y'" message with suggestions appended when any are close
pub fn unknown_with_suggestions(kind: &str, value: &str, candidates: &[&str]) -> String {
    let near = find_near_matches(value, candidates, 2);
    if near.is_empty() {
        format!("Unknown {} '{}'. Known: {}", kind, value, candidates.join(", "))
    } else {
        format!("Unknown {} '{}'. Did you mean: {}?", kind, value, near.join(", "))
    }
}
