// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

/// Split a comma-separated list, trimming items and dropping blanks.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("budget, planner ,notes"),
            vec!["budget", "planner", "notes"]
        );
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
        assert_eq!(split_list(""), Vec::<String>::new());
    }
}
