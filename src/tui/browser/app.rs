//! カタログブラウザの Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: アプリケーション全体の状態（データ + 画面 + 検索）
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新

use super::rows::{flatten_sections, Row};
use crate::catalog::{Catalog, Example, Section};
use crate::matching::GroupMatchable;
use crate::preferences::{
    ButtonOutcome, Preference, PreferenceKind, PreferenceStore, PreferenceValue,
    PreferencesSection,
};
use crate::search::{FilterCache, SearchState};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::collections::HashSet;

// ============================================================================
// Page（表示中のページ）
// ============================================================================

/// 表示中のページ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    ExampleList,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::ExampleList, Page::Settings]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::ExampleList => "Examples",
            Page::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::ExampleList => 0,
            Page::Settings => 1,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Page::ExampleList => Page::Settings,
            Page::Settings => Page::ExampleList,
        }
    }
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 戻る（検索を閉じる → 例の一覧へ → 終了）
    Back,
    /// 検索バーを開く
    OpenSearch,
    /// 検索をキャンセル（検索バーを閉じる）
    CancelSearch,
    /// 検索欄からフォーカスを外す（リストへ）
    SearchUnfocus,
    /// 検索欄にフォーカス
    SearchFocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// 設定ページへ
    OpenSettings,
    /// 例の一覧へ
    OpenExamples,
    /// ページ切替
    TogglePage,
    /// 選択を上に移動
    Up,
    /// 選択を下に移動
    Down,
    /// 選択行を実行（ヘッダーなら開閉）
    Activate,
    /// 整数設定を増やす / 選択肢を進める
    Increment,
    /// 整数設定を減らす / 選択肢を戻す
    Decrement,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub catalog: Catalog,
    pub store: PreferenceStore,
    pub page: Page,
    pub search: SearchState,
    /// 検索欄の入力（表示用、小文字化前）
    pub search_input: String,
    pub search_focused: bool,
    pub expanded_examples: HashSet<String>,
    pub expanded_preferences: HashSet<String>,
    example_filter: FilterCache<Section>,
    preference_filter: FilterCache<PreferencesSection>,
    /// 現在のページの表示行
    pub rows: Vec<Row>,
    pub list_state: ListState,
    /// ステータス行のメッセージ
    pub status: Option<String>,
    pub should_quit: bool,
}

impl Model {
    pub fn new(catalog: Catalog, store: PreferenceStore) -> Self {
        let mut model = Self {
            catalog,
            store,
            page: Page::default(),
            search: SearchState::Hidden,
            search_input: String::new(),
            search_focused: false,
            expanded_examples: HashSet::new(),
            expanded_preferences: HashSet::new(),
            example_filter: FilterCache::new(),
            preference_filter: FilterCache::new(),
            rows: Vec::new(),
            list_state: ListState::default(),
            status: None,
            should_quit: false,
        };
        model.refilter();
        model
    }

    /// 絞り込み済みのセクション
    pub fn filtered_sections(&self) -> &[Section] {
        self.example_filter.current().unwrap_or_default()
    }

    /// 絞り込み済みの設定セクション
    pub fn filtered_preference_sections(&self) -> &[PreferencesSection] {
        self.preference_filter.current().unwrap_or_default()
    }

    /// 選択中の行
    pub fn selected_row(&self) -> Option<Row> {
        self.list_state
            .selected()
            .and_then(|i| self.rows.get(i).copied())
    }

    /// 行に対応する例
    pub fn example_at(&self, row: Row) -> Option<&Example> {
        match row {
            Row::Item { section, item } => self.filtered_sections().get(section)?.examples.get(item),
            Row::Header { .. } => None,
        }
    }

    /// 行に対応する設定項目
    pub fn preference_at(&self, row: Row) -> Option<&Preference> {
        match row {
            Row::Item { section, item } => self
                .filtered_preference_sections()
                .get(section)?
                .preferences
                .get(item),
            Row::Header { .. } => None,
        }
    }

    /// ヘッダー行の表示名と全項目数
    pub fn section_title(&self, section: usize) -> Option<(&str, usize)> {
        match self.page {
            Page::ExampleList => self
                .filtered_sections()
                .get(section)
                .map(|s| (s.name.as_str(), s.children().len())),
            Page::Settings => self
                .filtered_preference_sections()
                .get(section)
                .map(|s| (s.title.as_str(), s.children().len())),
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.search_focused {
            // 検索欄にフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.search_input.is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc => Some(Msg::CancelSearch),
                KeyCode::Down | KeyCode::Enter => Some(Msg::SearchUnfocus),
                KeyCode::Tab => Some(Msg::TogglePage),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            }
        } else {
            // リスト（通常）フォーカス時のキー処理
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Esc | KeyCode::Backspace => Some(Msg::Back),
                KeyCode::Char('/') if self.search.is_visible() => Some(Msg::SearchFocus),
                KeyCode::Char('/') => Some(Msg::OpenSearch),
                KeyCode::Char('s') => Some(Msg::OpenSettings),
                KeyCode::Char('e') => Some(Msg::OpenExamples),
                KeyCode::Tab => Some(Msg::TogglePage),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Activate),
                KeyCode::Right | KeyCode::Char('+') => Some(Msg::Increment),
                KeyCode::Left | KeyCode::Char('-') => Some(Msg::Decrement),
                _ => None,
            }
        }
    }

    /// 検索状態が変わったときに両ページの絞り込み結果を更新する
    fn refilter(&mut self) {
        self.example_filter
            .refresh(&self.catalog.sections, &self.search, Section::with_examples);
        self.preference_filter.refresh(
            self.store.sections(),
            &self.search,
            PreferencesSection::with_preferences,
        );
        tracing::trace!(
            query = self.search.query_or_blank(),
            sections = self.filtered_sections().len(),
            preference_sections = self.filtered_preference_sections().len(),
            "refiltered"
        );
        self.rebuild_rows();
    }

    /// 表示行を作り直し、選択位置を整合させる
    fn rebuild_rows(&mut self) {
        let search_active = !self.search.is_blank();
        self.rows = match self.page {
            Page::ExampleList => flatten_sections(
                self.filtered_sections(),
                &self.expanded_examples,
                search_active,
            ),
            Page::Settings => flatten_sections(
                self.filtered_preference_sections(),
                &self.expanded_preferences,
                search_active,
            ),
        };
        clamp_selection(&mut self.list_state, self.rows.len());
    }

    fn set_search_input(&mut self, input: String) {
        self.search = self.search.advance(&input);
        self.search_input = input;
        self.refilter();
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Back => back(model),
        Msg::OpenSearch => {
            model.search = SearchState::visible("", "");
            model.search_input.clear();
            model.search_focused = true;
            model.refilter();
        }
        Msg::CancelSearch => {
            model.search = SearchState::Hidden;
            model.search_input.clear();
            model.search_focused = false;
            model.refilter();
        }
        Msg::SearchUnfocus => model.search_focused = false,
        Msg::SearchFocus => model.search_focused = true,
        Msg::SearchInput(c) => {
            let mut input = model.search_input.clone();
            input.push(c);
            model.set_search_input(input);
        }
        Msg::SearchBackspace => {
            let mut input = model.search_input.clone();
            input.pop();
            model.set_search_input(input);
        }
        Msg::SearchClear => model.set_search_input(String::new()),
        Msg::OpenSettings => switch_page(model, Page::Settings),
        Msg::OpenExamples => switch_page(model, Page::ExampleList),
        Msg::TogglePage => {
            let page = model.page.toggle();
            switch_page(model, page);
        }
        Msg::Up => {
            let current = model.list_state.selected().unwrap_or(0);
            if !model.rows.is_empty() {
                model.list_state.select(Some(current.saturating_sub(1)));
            }
        }
        Msg::Down => {
            let len = model.rows.len();
            if len > 0 {
                let next = model
                    .list_state
                    .selected()
                    .map_or(0, |current| (current + 1).min(len - 1));
                model.list_state.select(Some(next));
            }
        }
        Msg::Activate => activate(model),
        Msg::Increment => step(model, 1),
        Msg::Decrement => step(model, -1),
    }
}

/// 戻る操作
fn back(model: &mut Model) {
    if model.search.is_visible() {
        update(model, Msg::CancelSearch);
    } else if model.page == Page::Settings {
        switch_page(model, Page::ExampleList);
    } else {
        model.should_quit = true;
    }
}

/// ページを切り替え
fn switch_page(model: &mut Model, page: Page) {
    if model.page != page {
        model.page = page;
        model.status = None;
        model.list_state.select(Some(0));
        model.rebuild_rows();
    }
}

/// 選択行を実行
fn activate(model: &mut Model) {
    let Some(row) = model.selected_row() else {
        return;
    };

    match (model.page, row) {
        (_, Row::Header { section, .. }) => toggle_section(model, section),
        (Page::ExampleList, row) => {
            model.status = model.example_at(row).map(|example| {
                format!(
                    "{} ({}, {}): {}",
                    example.title,
                    example.name,
                    example.language.as_str(),
                    example.description
                )
            });
        }
        (Page::Settings, row) => {
            let Some(pref) = model.preference_at(row).cloned() else {
                return;
            };
            match &pref.kind {
                PreferenceKind::Checkbox => {
                    let current = matches!(
                        model.store.value(&pref.key),
                        Some(PreferenceValue::Bool(true))
                    );
                    change_preference(model, &pref, PreferenceValue::Bool(!current));
                }
                PreferenceKind::Radio { .. } | PreferenceKind::Integer => step(model, 1),
                PreferenceKind::Button => press_button(model, &pref),
            }
        }
    }
}

/// セクションの開閉を切り替え
fn toggle_section(model: &mut Model, section: usize) {
    let (expanded, key) = match model.page {
        Page::ExampleList => (
            &mut model.expanded_examples,
            model.example_filter.current().unwrap_or_default().get(section).map(|s| s.name.clone()),
        ),
        Page::Settings => (
            &mut model.expanded_preferences,
            model
                .preference_filter
                .current()
                .unwrap_or_default()
                .get(section)
                .map(|s| s.title.clone()),
        ),
    };
    let Some(key) = key else {
        return;
    };

    if !expanded.remove(&key) {
        expanded.insert(key);
    }
    model.rebuild_rows();
}

/// 選択中の設定項目を1段階変更する
fn step(model: &mut Model, delta: i64) {
    if model.page != Page::Settings {
        return;
    }
    let Some(pref) = model.selected_row().and_then(|row| model.preference_at(row)).cloned() else {
        return;
    };

    let next = match (&pref.kind, model.store.value(&pref.key)) {
        (PreferenceKind::Integer, Some(PreferenceValue::Int(current))) => {
            PreferenceValue::Int(current.saturating_add(delta).max(0))
        }
        (PreferenceKind::Radio { options }, Some(PreferenceValue::Text(current))) => {
            if options.is_empty() {
                return;
            }
            let len = options.len() as i64;
            let index = options.iter().position(|o| *o == current).unwrap_or(0) as i64;
            let next = (index + delta).rem_euclid(len) as usize;
            PreferenceValue::Text(options[next].clone())
        }
        _ => return,
    };
    change_preference(model, &pref, next);
}

/// 設定値を変更して保存
fn change_preference(model: &mut Model, pref: &Preference, value: PreferenceValue) {
    let result = model
        .store
        .set(&pref.key, value.clone())
        .and_then(|_| model.store.save());

    model.status = Some(match result {
        Ok(()) => format!("{} = {}", pref.title, value),
        Err(e) => {
            tracing::warn!(key = %pref.key, error = %e, "failed to save preference");
            format!("Error: {}", e)
        }
    });
}

/// ボタンを押す
fn press_button(model: &mut Model, pref: &Preference) {
    model.status = Some(match model.store.press(&pref.key) {
        Ok(ButtonOutcome::CacheCleared) => "Cache cleared".to_string(),
        Ok(ButtonOutcome::AppDataCleared) => "Settings restored to defaults".to_string(),
        Err(e) => format!("Error: {}", e),
    });
}

/// 行数に合わせて選択位置を補正
fn clamp_selection(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
    } else {
        let selected = state.selected().unwrap_or(0).min(len - 1);
        state.select(Some(selected));
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
