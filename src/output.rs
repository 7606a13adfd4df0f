//! 端末出力の共通処理

use crate::matching::lowercase_match_positions;
use owo_colors::OwoColorize;

/// クエリに一致した文字を色付けした文字列
///
/// 照合は小文字化した `text` に対して行う。一致しなければそのまま返す。
pub fn highlight_matches(text: &str, query: &str) -> String {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return text.to_string();
    }
    let Some(positions) = lowercase_match_positions(text, &query) else {
        return text.to_string();
    };

    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if positions.contains(&i) {
                c.yellow().bold().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// 成功メッセージ
pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

/// 件数の要約
pub fn count_summary(shown: usize, total: usize, noun: &str) -> String {
    if shown == total {
        format!("{} {}(s)", total.green(), noun)
    } else {
        format!("{} of {} {}(s)", shown.green(), total, noun)
    }
}
