use super::*;

fn layout() -> Preference {
    Preference::radio("Page layout", "page_layout_mode", &["AUTO", "SINGLE", "DOUBLE"], "AUTO")
}

#[test]
fn checkbox_parses_common_spellings() {
    let pref = Preference::checkbox("Grayscale", "grayscale", false);
    for raw in ["true", "ON", "yes", "1"] {
        assert_eq!(pref.parse_value(raw).unwrap(), PreferenceValue::Bool(true));
    }
    for raw in ["false", "Off", "no", "0"] {
        assert_eq!(pref.parse_value(raw).unwrap(), PreferenceValue::Bool(false));
    }
    assert!(pref.parse_value("maybe").is_err());
}

#[test]
fn integer_parses_signed_numbers() {
    let pref = Preference::integer("Start page", "start_page", "", 0);
    assert_eq!(pref.parse_value(" 7 ").unwrap(), PreferenceValue::Int(7));
    assert_eq!(pref.parse_value("-1").unwrap(), PreferenceValue::Int(-1));
    assert!(pref.parse_value("seven").is_err());
}

#[test]
fn radio_returns_canonical_option() {
    assert_eq!(
        layout().parse_value("single").unwrap(),
        PreferenceValue::Text("SINGLE".to_string())
    );
}

#[test]
fn radio_error_lists_options() {
    let err = layout().parse_value("triple").unwrap_err();
    assert!(err.to_string().contains("AUTO, SINGLE, DOUBLE"));
}

#[test]
fn button_has_no_default_and_rejects_values() {
    let pref = Preference::button("Clear cache", "clear_cache", "Removes caches");
    assert!(pref.default.is_none());
    assert!(pref.parse_value("true").is_err());
    assert!(!pref.accepts(&PreferenceValue::Bool(true)));
}

#[test]
fn accepts_checks_kind_and_options() {
    let pref = layout();
    assert!(pref.accepts(&PreferenceValue::Text("DOUBLE".to_string())));
    assert!(!pref.accepts(&PreferenceValue::Text("double".to_string())));
    assert!(!pref.accepts(&PreferenceValue::Int(1)));
}

#[test]
fn preference_matches_title_and_description() {
    let pref = Preference::integer("Start Page", "start_page", "Page index the document opens at", 0);
    assert!(pref.matches("strt"));
    assert!(pref.matches("index"));
    assert!(!pref.matches("start_page"));
}

#[test]
fn section_matches_title_and_rebuilds_with_subset() {
    let section = PreferencesSection::new(
        "Double page",
        vec![
            Preference::checkbox("First page as single", "first_page_as_single", false),
            Preference::checkbox("Show gap between pages", "show_gap_between_pages", false),
        ],
    );
    assert!(section.matches("dbl"));

    let gaps = section.matching_children("gap");
    assert_eq!(gaps.len(), 1);

    let rebuilt = section.with_preferences(gaps);
    assert_eq!(rebuilt.title, "Double page");
    assert_eq!(rebuilt.preferences.len(), 1);
    assert!(rebuilt.matches("dbl"));
}

#[test]
fn value_display_is_plain() {
    assert_eq!(PreferenceValue::Bool(true).to_string(), "true");
    assert_eq!(PreferenceValue::Int(3).to_string(), "3");
    assert_eq!(PreferenceValue::Text("NIGHT".to_string()).to_string(), "NIGHT");
}
