//! カタログブラウザの view（描画）

use super::app::{Model, Page};
use super::rows::{current_header, Row};
use crate::matching::lowercase_match_positions;
use crate::preferences::{Preference, PreferenceKind, PreferenceValue};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};

/// 画面を描画
pub fn view(f: &mut Frame, model: &mut Model) {
    let search_height = if model.search.is_visible() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // タブバー
            Constraint::Length(search_height), // 検索バー
            Constraint::Length(1),             // 固定ヘッダー
            Constraint::Min(1),                // リスト
            Constraint::Length(1),             // ステータス / ヘルプ
        ])
        .split(f.area());

    // タブバー
    let tab_titles: Vec<&str> = Page::all().iter().map(|p| p.title()).collect();
    let tabs = Tabs::new(tab_titles)
        .select(model.page.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[0]);

    // 検索バー
    if model.search.is_visible() {
        let cursor = if model.search_focused { "_" } else { "" };
        let search = Paragraph::new(Line::from(vec![
            Span::styled(" / ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}{}", model.search_input, cursor)),
        ]));
        f.render_widget(search, chunks[1]);
    }

    // リスト
    let query = model.search.query_or_blank().trim().to_string();
    let items: Vec<ListItem> = model
        .rows
        .iter()
        .map(|row| row_item(model, *row, &query))
        .collect();

    let title = match model.page {
        Page::ExampleList => format!(" Examples ({}) ", model.catalog.example_count()),
        Page::Settings => format!(" Settings ({}) ", model.store.path().display()),
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");
    let mut state = model.list_state.clone();
    f.render_stateful_widget(list, chunks[3], &mut state);
    // スクロール位置を次のフレームに引き継ぐ
    model.list_state = state;

    // 先頭行が属するセクションを固定表示
    let sticky = current_header(&model.rows, model.list_state.offset())
        .and_then(|index| model.rows.get(index))
        .and_then(|row| model.section_title(row.section()))
        .map(|(name, count)| format!(" {} ({})", name, count))
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(sticky).style(Style::default().fg(Color::Cyan)),
        chunks[2],
    );

    // ステータス / ヘルプ
    let footer = match &model.status {
        Some(status) => Paragraph::new(format!(" {}", status)).style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(help_text(model)).style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer, chunks[4]);
}

fn help_text(model: &Model) -> &'static str {
    if model.search_focused {
        " type to filter | Enter/down: list | Esc: clear/close | Tab: switch"
    } else {
        match model.page {
            Page::ExampleList => {
                " /: search | Enter: open/info | Tab: settings | Esc: back | q: quit"
            }
            Page::Settings => {
                " /: search | Enter: toggle | left/right: change | Tab: examples | Esc: back"
            }
        }
    }
}

/// 表示行を ListItem に変換
fn row_item<'a>(model: &'a Model, row: Row, query: &str) -> ListItem<'a> {
    match row {
        Row::Header { section, open } => {
            let marker = if open { "v" } else { ">" };
            let (name, count) = model.section_title(section).unwrap_or(("", 0));
            let icon = match model.page {
                Page::ExampleList => model
                    .filtered_sections()
                    .get(section)
                    .map(|s| s.icon.as_str())
                    .unwrap_or_default(),
                Page::Settings => "",
            };
            let mut spans = vec![Span::raw(format!("{} ", marker))];
            if !icon.is_empty() {
                spans.push(Span::raw(format!("{} ", icon)));
            }
            spans.extend(highlighted(name, query, Style::default().add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(
                format!(" ({})", count),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        }
        Row::Item { .. } => match model.page {
            Page::ExampleList => {
                let Some(example) = model.example_at(row) else {
                    return ListItem::new("");
                };
                let mut spans = vec![Span::raw("    ")];
                spans.extend(highlighted(&example.title, query, Style::default()));
                spans.push(Span::styled(
                    format!("  {}", example.description),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(Line::from(spans))
            }
            Page::Settings => {
                let Some(pref) = model.preference_at(row) else {
                    return ListItem::new("");
                };
                let mut spans = vec![Span::raw("    ")];
                spans.extend(highlighted(&pref.title, query, Style::default()));
                spans.push(Span::raw("  "));
                spans.push(preference_value_span(model, pref));
                ListItem::new(Line::from(spans))
            }
        },
    }
}

/// 現在値の表示
fn preference_value_span<'a>(model: &Model, pref: &Preference) -> Span<'a> {
    let modified = model.store.is_modified(&pref.key);
    let style = if modified {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = match (&pref.kind, model.store.value(&pref.key)) {
        (PreferenceKind::Checkbox, Some(PreferenceValue::Bool(true))) => "[x]".to_string(),
        (PreferenceKind::Checkbox, _) => "[ ]".to_string(),
        (PreferenceKind::Button, _) => format!("[{}]", pref.description),
        (_, Some(value)) => format!("< {} >", value),
        (_, None) => String::new(),
    };
    Span::styled(text, style)
}

/// クエリに一致した文字を強調した Span 列
///
/// 照合は小文字化した表示文字列に対して行い、元の文字をそのまま表示する。
fn highlighted<'a>(text: &'a str, query: &str, base: Style) -> Vec<Span<'a>> {
    let positions = if query.is_empty() {
        None
    } else {
        lowercase_match_positions(text, query)
    };

    let Some(positions) = positions else {
        return vec![Span::styled(text, base)];
    };

    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let style = if positions.contains(&i) {
                base.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED)
            } else {
                base
            };
            Span::styled(c.to_string(), style)
        })
        .collect()
}
