//! Search filter matching.
//!
//! A filter argument without wildcard characters matches by case-insensitive
//! substring containment; with wildcards it becomes a glob-style expression
//! where `*` matches any run of characters and `?` exactly one.

/// Returns true when `value` satisfies the folder/name filter `filter`.
///
/// Callers treat an empty filter as "no filter on this axis" and skip the
/// call entirely.
pub(crate) fn matches_filter(value: &str, filter: &str) -> bool {
    if filter.contains(['*', '?']) {
        matches_expression(filter, value)
    } else {
        value.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Case-insensitive glob match of `value` against `pattern`.
fn matches_expression(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let value: Vec<char> = value.to_lowercase().chars().collect();
    matches_at(&pattern, &value)
}

fn matches_at(pattern: &[char], value: &[char]) -> bool {
    match pattern.split_first() {
        None => value.is_empty(),
        Some(('*', rest)) => (0..=value.len()).any(|skip| matches_at(rest, &value[skip..])),
        Some(('?', rest)) => value
            .split_first()
            .is_some_and(|(_, tail)| matches_at(rest, tail)),
        Some((expected, rest)) => value
            .split_first()
            .is_some_and(|(actual, tail)| actual == expected && matches_at(rest, tail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_case_insensitive() {
        assert!(matches_filter("Quarterly Report", "report"));
        assert!(matches_filter("report", "REP"));
        assert!(!matches_filter("readme", "report"));
    }

    #[test]
    fn star_matches_any_run() {
        assert!(matches_filter("report", "rep*"));
        assert!(matches_filter("report", "*port"));
        assert!(matches_filter("report", "r*t"));
        assert!(matches_filter("report", "*"));
        assert!(!matches_filter("readme", "rep*"));
    }

    #[test]
    fn question_mark_matches_exactly_one() {
        assert!(matches_filter("report", "repor?"));
        assert!(matches_filter("report", "?eport"));
        assert!(!matches_filter("report", "report?"));
        assert!(!matches_filter("rport", "r?port"));
    }

    #[test]
    fn glob_is_case_insensitive() {
        assert!(matches_filter("Report", "rep*"));
        assert!(matches_filter("report", "REP*"));
    }

    #[test]
    fn glob_is_anchored_at_both_ends() {
        assert!(!matches_filter("my report", "rep*"));
        assert!(matches_filter("my report", "*rep*"));
    }
}
