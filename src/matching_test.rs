use super::*;

const SOURCE: &str = "Fragment Example";

#[derive(Debug, Clone)]
struct Item {
    strings: Vec<String>,
}

impl Item {
    fn new(strings: &[&str]) -> Self {
        Self {
            strings: strings.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Matchable for Item {
    fn strings_to_match(&self) -> &[String] {
        &self.strings
    }
}

struct Group {
    label: Vec<String>,
    items: Vec<Item>,
}

impl Matchable for Group {
    fn strings_to_match(&self) -> &[String] {
        &self.label
    }
}

impl GroupMatchable for Group {
    type Child = Item;

    fn children(&self) -> &[Item] {
        &self.items
    }
}

// ============================================================================
// fuzzy_matches
// ============================================================================

#[test]
fn exact_string_matches() {
    assert!(fuzzy_matches(SOURCE, "Fragment Example"));
}

#[test]
fn query_longer_than_source_does_not_match() {
    assert!(!fuzzy_matches(SOURCE, "Fragment Examplee"));
}

#[test]
fn ordered_subsequence_with_gaps_matches() {
    assert!(fuzzy_matches(SOURCE, "Fgmnt Exmple"));
}

#[test]
fn out_of_order_character_does_not_match() {
    assert!(!fuzzy_matches(SOURCE, "Fgrmnt Exmple"));
}

#[test]
fn empty_query_always_matches() {
    assert!(fuzzy_matches(SOURCE, ""));
    assert!(fuzzy_matches("", ""));
}

#[test]
fn empty_source_rejects_non_empty_query() {
    assert!(!fuzzy_matches("", "a"));
}

#[test]
fn matching_is_case_sensitive() {
    assert!(!fuzzy_matches(SOURCE, "fragment"));
    assert!(fuzzy_matches(&SOURCE.to_lowercase(), "fragment"));
}

#[test]
fn leftover_source_characters_are_ignored() {
    assert!(fuzzy_matches("annotation creation", "ann"));
}

#[test]
fn multibyte_characters_are_compared_per_char() {
    assert!(fuzzy_matches("überblick", "übk"));
    assert!(!fuzzy_matches("ü", "üü"));
}

// ============================================================================
// fuzzy_match_positions
// ============================================================================

#[test]
fn positions_follow_greedy_cursor() {
    assert_eq!(fuzzy_match_positions("fragment", "fan"), Some(vec![0, 2, 6]));
}

#[test]
fn positions_none_when_not_matching() {
    assert_eq!(fuzzy_match_positions(SOURCE, "Fgrmnt Exmple"), None);
}

#[test]
fn lowercase_positions_point_into_original_text() {
    assert_eq!(
        lowercase_match_positions("Form Filling", "ff"),
        Some(vec![0, 5])
    );
}

#[test]
fn lowercase_positions_survive_expanding_characters() {
    // "İ" は小文字化すると2文字になる
    assert_eq!(lowercase_match_positions("İab", "b"), Some(vec![2]));
    assert_eq!(lowercase_match_positions("İab", "i"), Some(vec![0]));
    assert_eq!(lowercase_match_positions("İab", "ia"), Some(vec![0, 1]));
}

#[test]
fn lowercase_positions_none_when_not_matching() {
    assert_eq!(lowercase_match_positions("İab", "ba"), None);
}

#[test]
fn positions_empty_for_empty_query() {
    assert_eq!(fuzzy_match_positions(SOURCE, ""), Some(vec![]));
}

// ============================================================================
// Matchable / GroupMatchable
// ============================================================================

#[test]
fn matchable_matches_if_any_string_matches() {
    let item = Item::new(&["default example", "opens a document", "defaultexample"]);
    assert!(item.matches("opdoc"));
    assert!(item.matches("dflt"));
    assert!(!item.matches("xyz"));
}

#[test]
fn matchable_without_strings_never_matches_non_empty_query() {
    let item = Item::new(&[]);
    assert!(!item.matches("a"));
    assert!(!item.matches(""));
}

#[test]
fn matching_children_preserves_order() {
    let group = Group {
        label: vec!["basic".to_string()],
        items: vec![
            Item::new(&["zoom example"]),
            Item::new(&["outline provider"]),
            Item::new(&["zoom to annotation"]),
        ],
    };

    let matching = group.matching_children("zoom");
    assert_eq!(matching.len(), 2);
    assert_eq!(matching[0].strings[0], "zoom example");
    assert_eq!(matching[1].strings[0], "zoom to annotation");
}
