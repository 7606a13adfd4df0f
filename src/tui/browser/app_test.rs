use super::*;
use crate::catalog::ExampleLanguage;
use crate::preferences::{keys, SETTINGS_FILE};
use tempfile::TempDir;

fn example(title: &str, name: &str) -> Example {
    Example::new(title, "", name, ExampleLanguage::Kotlin)
}

fn catalog() -> Catalog {
    Catalog {
        sections: vec![
            Section::new(
                "Basic",
                "",
                vec![
                    example("Fragment Example", "FragmentExample"),
                    example("Simple Example", "SimpleExample"),
                ],
            ),
            Section::new(
                "Forms",
                "",
                vec![example("Form Filling", "FormFillingExample")],
            ),
        ],
    }
}

fn model(dir: &TempDir) -> Model {
    let store = PreferenceStore::load_from(dir.path().join(SETTINGS_FILE)).unwrap();
    Model::new(catalog(), store)
}

fn type_query(model: &mut Model, query: &str) {
    for c in query.chars() {
        update(model, Msg::SearchInput(c));
    }
}

/// 設定ページで指定キーの行を選択する
fn select_preference(model: &mut Model, key: &str) {
    update(model, Msg::OpenSettings);
    let section = model
        .filtered_preference_sections()
        .iter()
        .position(|s| s.preferences.iter().any(|p| p.key == key))
        .unwrap();
    model.expanded_preferences.clear();
    model
        .expanded_preferences
        .insert(model.filtered_preference_sections()[section].title.clone());
    model.rebuild_rows();

    let index = model
        .rows
        .iter()
        .position(|row| model.preference_at(*row).is_some_and(|p| p.key == key))
        .unwrap();
    model.list_state.select(Some(index));
}

// ==================== 初期状態 ====================

#[test]
fn starts_on_collapsed_example_list() {
    let dir = TempDir::new().unwrap();
    let model = model(&dir);

    assert_eq!(model.page, Page::ExampleList);
    assert_eq!(model.search, SearchState::Hidden);
    assert_eq!(model.filtered_sections().len(), 2);
    assert_eq!(
        model.rows,
        vec![
            Row::Header { section: 0, open: false },
            Row::Header { section: 1, open: false },
        ]
    );
    assert_eq!(model.list_state.selected(), Some(0));
}

// ==================== 移動 ====================

#[test]
fn selection_stays_within_rows() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::Up);
    assert_eq!(model.list_state.selected(), Some(0));

    update(&mut model, Msg::Down);
    update(&mut model, Msg::Down);
    update(&mut model, Msg::Down);
    assert_eq!(model.list_state.selected(), Some(1));
}

#[test]
fn activating_header_toggles_section() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::Activate);
    assert!(model.expanded_examples.contains("Basic"));
    assert_eq!(model.rows.len(), 4);

    update(&mut model, Msg::Activate);
    assert!(model.expanded_examples.is_empty());
    assert_eq!(model.rows.len(), 2);
}

#[test]
fn activating_example_shows_its_details() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::Activate);
    update(&mut model, Msg::Down);
    update(&mut model, Msg::Activate);

    let status = model.status.clone().unwrap();
    assert!(status.contains("Fragment Example"));
    assert!(status.contains("FragmentExample"));
}

// ==================== 検索 ====================

#[test]
fn typing_filters_and_opens_sections() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    assert!(model.search_focused);
    type_query(&mut model, "Frag");

    assert_eq!(model.search, SearchState::visible("frag", "fra"));
    assert_eq!(model.search_input, "Frag");
    let sections = model.filtered_sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].examples.len(), 1);
    assert_eq!(
        model.rows,
        vec![
            Row::Header { section: 0, open: true },
            Row::Item { section: 0, item: 0 },
        ]
    );
}

#[test]
fn section_name_match_keeps_every_example() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "basic");

    let sections = model.filtered_sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].examples.len(), 2);
}

#[test]
fn backspace_widens_the_result_again() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "formf");
    assert_eq!(model.filtered_sections().len(), 1);

    update(&mut model, Msg::SearchBackspace);
    update(&mut model, Msg::SearchBackspace);
    update(&mut model, Msg::SearchBackspace);
    update(&mut model, Msg::SearchBackspace);
    assert_eq!(model.search_input, "f");
    // "f" は Fragment と Forms に一致し、Simple には一致しない
    let sections = model.filtered_sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].examples.len(), 1);
}

#[test]
fn reopened_search_looks_at_every_section() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "form");
    let names: Vec<&str> = model.filtered_sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Forms"]);

    update(&mut model, Msg::CancelSearch);
    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "basic");

    let names: Vec<&str> = model.filtered_sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Basic"]);
}

#[test]
fn cleared_search_looks_at_every_section() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "form");
    update(&mut model, Msg::SearchClear);
    type_query(&mut model, "simple");

    let sections = model.filtered_sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name, "Basic");
    assert_eq!(sections[0].examples[0].name, "SimpleExample");
}

#[test]
fn selection_is_clamped_when_rows_shrink() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);
    update(&mut model, Msg::Down);
    assert_eq!(model.list_state.selected(), Some(1));

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "zzz");
    assert!(model.rows.is_empty());
    assert_eq!(model.list_state.selected(), None);
}

#[test]
fn whitespace_query_shows_everything_collapsed() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "  ");
    assert_eq!(model.filtered_sections().len(), 2);
    assert_eq!(model.rows.len(), 2);
}

#[test]
fn back_closes_search_before_quitting() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "form");
    update(&mut model, Msg::SearchUnfocus);

    update(&mut model, Msg::Back);
    assert_eq!(model.search, SearchState::Hidden);
    assert!(model.search_input.is_empty());
    assert_eq!(model.filtered_sections().len(), 2);
    assert!(!model.should_quit);

    update(&mut model, Msg::Back);
    assert!(model.should_quit);
}

#[test]
fn search_applies_to_settings_page_too() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSearch);
    type_query(&mut model, "grayscale");
    update(&mut model, Msg::TogglePage);

    assert_eq!(model.page, Page::Settings);
    let sections = model.filtered_preference_sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].preferences[0].key, keys::GRAYSCALE);
}

// ==================== 設定 ====================

#[test]
fn back_from_settings_returns_to_examples() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    update(&mut model, Msg::OpenSettings);
    assert_eq!(model.page, Page::Settings);
    assert_eq!(model.rows.len(), model.store.sections().len());

    update(&mut model, Msg::Back);
    assert_eq!(model.page, Page::ExampleList);
    assert!(!model.should_quit);
}

#[test]
fn activating_checkbox_toggles_and_saves() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);
    select_preference(&mut model, keys::GRAYSCALE);

    update(&mut model, Msg::Activate);
    assert_eq!(
        model.store.value(keys::GRAYSCALE),
        Some(PreferenceValue::Bool(true))
    );

    let reloaded = PreferenceStore::load_from(dir.path().join(SETTINGS_FILE)).unwrap();
    assert_eq!(
        reloaded.value(keys::GRAYSCALE),
        Some(PreferenceValue::Bool(true))
    );
}

#[test]
fn radio_cycles_through_options() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);
    select_preference(&mut model, keys::PAGE_LAYOUT_MODE);

    update(&mut model, Msg::Increment);
    assert_eq!(
        model.store.value(keys::PAGE_LAYOUT_MODE),
        Some(PreferenceValue::Text("SINGLE".to_string()))
    );

    update(&mut model, Msg::Decrement);
    update(&mut model, Msg::Decrement);
    assert_eq!(
        model.store.value(keys::PAGE_LAYOUT_MODE),
        Some(PreferenceValue::Text("DOUBLE".to_string()))
    );
}

#[test]
fn integer_does_not_go_below_zero() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);
    select_preference(&mut model, keys::START_PAGE);

    update(&mut model, Msg::Decrement);
    assert_eq!(model.store.value(keys::START_PAGE), Some(PreferenceValue::Int(0)));

    update(&mut model, Msg::Increment);
    update(&mut model, Msg::Increment);
    assert_eq!(model.store.value(keys::START_PAGE), Some(PreferenceValue::Int(2)));
}

#[test]
fn clear_app_data_button_resets_settings() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);
    select_preference(&mut model, keys::GRAYSCALE);
    update(&mut model, Msg::Activate);
    assert!(model.store.is_modified(keys::GRAYSCALE));

    select_preference(&mut model, keys::CLEAR_APP_DATA);
    update(&mut model, Msg::Activate);

    assert!(!model.store.is_modified(keys::GRAYSCALE));
    assert_eq!(
        model.status.as_deref(),
        Some("Settings restored to defaults")
    );
}

#[test]
fn steps_are_ignored_on_example_list() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);
    update(&mut model, Msg::Increment);
    assert!(model.status.is_none());
}

// ==================== キー入力 ====================

#[test]
fn keys_depend_on_search_focus() {
    let dir = TempDir::new().unwrap();
    let mut model = model(&dir);

    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit));
    assert_eq!(model.key_to_msg(KeyCode::Char('/')), Some(Msg::OpenSearch));
    assert_eq!(model.key_to_msg(KeyCode::Down), Some(Msg::Down));

    update(&mut model, Msg::OpenSearch);
    assert_eq!(
        model.key_to_msg(KeyCode::Char('q')),
        Some(Msg::SearchInput('q'))
    );
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::CancelSearch));

    update(&mut model, Msg::SearchInput('a'));
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::SearchClear));

    update(&mut model, Msg::SearchUnfocus);
    assert_eq!(model.key_to_msg(KeyCode::Char('/')), Some(Msg::SearchFocus));
}
