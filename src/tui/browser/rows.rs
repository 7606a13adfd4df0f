//! 展開可能なセクションリスト
//!
//! セクション（ヘッダー）と項目の2階層を1本のリスト行に展開する。
//! 検索中はすべてのセクションを開いた状態で表示する。

use crate::catalog::Section;
use crate::preferences::PreferencesSection;
use std::collections::HashSet;

/// 展開状態を持てるセクション
pub trait ExpandableSection {
    /// 展開状態の識別キー
    fn key(&self) -> &str;
    /// 項目数
    fn item_count(&self) -> usize;
}

impl ExpandableSection for Section {
    fn key(&self) -> &str {
        &self.name
    }

    fn item_count(&self) -> usize {
        self.examples.len()
    }
}

impl ExpandableSection for PreferencesSection {
    fn key(&self) -> &str {
        &self.title
    }

    fn item_count(&self) -> usize {
        self.preferences.len()
    }
}

/// 表示行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// セクションヘッダー
    Header { section: usize, open: bool },
    /// セクション内の項目
    Item { section: usize, item: usize },
}

impl Row {
    pub fn section(&self) -> usize {
        match self {
            Row::Header { section, .. } | Row::Item { section, .. } => *section,
        }
    }
}

/// セクションを表示行に展開
///
/// 検索中（`search_active`）または展開済みのセクションは項目行も含める。
pub fn flatten_sections<S: ExpandableSection>(
    sections: &[S],
    expanded: &HashSet<String>,
    search_active: bool,
) -> Vec<Row> {
    let mut rows = Vec::new();
    for (section_index, section) in sections.iter().enumerate() {
        let open = search_active || expanded.contains(section.key());
        rows.push(Row::Header {
            section: section_index,
            open,
        });
        if open {
            rows.extend((0..section.item_count()).map(|item| Row::Item {
                section: section_index,
                item,
            }));
        }
    }
    rows
}

/// `top` 行目の上に固定表示すべきヘッダー行のインデックス
///
/// `top` 自身がヘッダーならそれを返す。
pub fn current_header(rows: &[Row], top: usize) -> Option<usize> {
    let top = top.min(rows.len().checked_sub(1)?);
    rows[..=top]
        .iter()
        .rposition(|row| matches!(row, Row::Header { .. }))
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod tests;
