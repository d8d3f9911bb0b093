//! Small string helpers shared by list pages: avatar initials, search that
//! ignores Spanish accents, PACE daily-goal page counts, and level labels.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Pages credited for a self-test ("st") daily goal.
pub const SELF_TEST_PAGES: u32 = 3;

static PAGE_RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").ok());

/// Returns up to two uppercase initials for an avatar. Empty names yield `?`.
pub fn get_initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_string();
    };

    let leading = |word: &str| word.chars().take(1).flat_map(char::to_uppercase).collect::<String>();
    match words.last() {
        Some(last) => leading(first) + &leading(last),
        None => leading(first),
    }
}

/// Lowercases and strips diacritics so "Dámaso" and "damaso" compare equal.
pub fn normalize_for_search(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Substring test that ignores case and accents. An empty needle matches everything.
pub fn includes_ignore_accents(haystack: &str, needle: &str) -> bool {
    let needle = normalize_for_search(needle.trim());
    if needle.is_empty() {
        return true;
    }
    normalize_for_search(haystack).contains(&needle)
}

/// Converts a daily goal as typed by a teacher into a page count.
///
/// `"5-9"` is an inclusive page range, `"st"` a self test, and a bare number a
/// page count. Reversed ranges, ranges too wide to count and anything
/// unrecognised count as zero.
pub fn calculate_pages_from_goal_text(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    if text.eq_ignore_ascii_case("st") {
        return SELF_TEST_PAGES;
    }

    if let Some(captures) = PAGE_RANGE.as_ref().and_then(|re| re.captures(text)) {
        let start = captures[1].parse::<u32>();
        let end = captures[2].parse::<u32>();
        return match (start, end) {
            (Ok(start), Ok(end)) => end
                .checked_sub(start)
                .and_then(|span| span.checked_add(1))
                .unwrap_or(0),
            _ => 0,
        };
    }

    text.parse::<u32>().unwrap_or(0)
}

/// Maps a curriculum level ("L1", "7", "ABC") to a school grade, where 0 is
/// kindergarten.
pub fn level_to_grade(level: &str) -> Option<u8> {
    let level = level.trim();
    if level.eq_ignore_ascii_case("abc") || level.eq_ignore_ascii_case("k") {
        return Some(0);
    }

    let digits = level
        .strip_prefix('L')
        .or_else(|| level.strip_prefix('l'))
        .unwrap_or(level);
    match digits.parse::<u8>() {
        Ok(grade @ 1..=12) => Some(grade),
        _ => None,
    }
}

/// Human label for a grade produced by [`level_to_grade`].
pub fn grade_label(grade: Option<u8>) -> String {
    match grade {
        Some(0) => "Kindergarten".to_string(),
        Some(1) => "1st grade".to_string(),
        Some(2) => "2nd grade".to_string(),
        Some(3) => "3rd grade".to_string(),
        Some(n) => format!("{n}th grade"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_text_ranges_are_inclusive() {
        assert_eq!(calculate_pages_from_goal_text("5-9"), 5);
        assert_eq!(calculate_pages_from_goal_text(" 1 - 1 "), 1);
    }

    #[test]
    fn goal_text_reversed_range_is_zero() {
        assert_eq!(calculate_pages_from_goal_text("9-5"), 0);
    }

    #[test]
    fn goal_text_self_test_and_plain_numbers() {
        assert_eq!(calculate_pages_from_goal_text("st"), 3);
        assert_eq!(calculate_pages_from_goal_text("ST"), 3);
        assert_eq!(calculate_pages_from_goal_text("12"), 12);
    }

    #[test]
    fn goal_text_blank_or_garbage_is_zero() {
        assert_eq!(calculate_pages_from_goal_text(""), 0);
        assert_eq!(calculate_pages_from_goal_text("   "), 0);
        assert_eq!(calculate_pages_from_goal_text("abc"), 0);
        assert_eq!(calculate_pages_from_goal_text("5-"), 0);
        assert_eq!(calculate_pages_from_goal_text("-3"), 0);
    }

    #[test]
    fn goal_text_range_wider_than_u32_is_zero() {
        assert_eq!(calculate_pages_from_goal_text("0-4294967295"), 0);
        assert_eq!(calculate_pages_from_goal_text("1-4294967295"), u32::MAX);
        assert_eq!(calculate_pages_from_goal_text("0-99999999999"), 0);
    }

    #[test]
    fn search_ignores_accents_and_case() {
        assert!(includes_ignore_accents("Dámaso", "damaso"));
        assert!(includes_ignore_accents("José Núñez", "NUNEZ"));
        assert!(includes_ignore_accents("anything", "  "));
        assert!(!includes_ignore_accents("Dámaso", "damian"));
    }

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(get_initials("maría del carmen lópez"), "ML");
        assert_eq!(get_initials("  Ana "), "A");
        assert_eq!(get_initials(""), "?");
    }

    #[test]
    fn levels_map_to_grades() {
        assert_eq!(level_to_grade("L1"), Some(1));
        assert_eq!(level_to_grade("l12"), Some(12));
        assert_eq!(level_to_grade("7"), Some(7));
        assert_eq!(level_to_grade("ABC"), Some(0));
        assert_eq!(level_to_grade("L13"), None);
        assert_eq!(level_to_grade("L0"), None);
        assert_eq!(level_to_grade("advanced"), None);
    }

    #[test]
    fn grade_labels_use_ordinals() {
        assert_eq!(grade_label(Some(0)), "Kindergarten");
        assert_eq!(grade_label(Some(2)), "2nd grade");
        assert_eq!(grade_label(Some(11)), "11th grade");
        assert_eq!(grade_label(None), "-");
    }
}
