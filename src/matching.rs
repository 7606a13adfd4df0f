//! あいまい検索（順序付き部分列マッチ）
//!
//! カタログの例と設定を検索可能にするための共通 trait を提供する。
//!
//! - `fuzzy_matches`: クエリの各文字が順番通りに含まれるか
//! - `Matchable`: 照合対象の文字列を公開するエンティティ
//! - `GroupMatchable`: 子エンティティを持つグループ

/// `source` が `query` の全文字を順番通りに含むかどうか
///
/// 大文字小文字は区別する。正規化（小文字化など）は呼び出し側の責務。
pub fn fuzzy_matches(source: &str, query: &str) -> bool {
    if source.chars().count() < query.chars().count() {
        return false;
    }

    let mut cursor = source.chars();
    query
        .chars()
        .all(|wanted| cursor.by_ref().any(|c| c == wanted))
}

/// マッチした文字位置（char 単位のインデックス）を返す
///
/// `fuzzy_matches` と同じ貪欲な走査を行い、マッチしなければ `None`。
pub fn fuzzy_match_positions(source: &str, query: &str) -> Option<Vec<usize>> {
    if source.chars().count() < query.chars().count() {
        return None;
    }

    let mut cursor = source.chars().enumerate();
    let mut positions = Vec::with_capacity(query.chars().count());
    for wanted in query.chars() {
        let (index, _) = cursor.by_ref().find(|(_, c)| *c == wanted)?;
        positions.push(index);
    }
    Some(positions)
}

/// 小文字化した `source` に対してマッチし、元の `source` の文字位置を返す
///
/// 小文字化で文字数が変わる文字（`İ` など）があっても元の文字を指す。
/// 同じ元の文字から複数の位置がマッチした場合は1つにまとめる。
pub fn lowercase_match_positions(source: &str, query: &str) -> Option<Vec<usize>> {
    let (folded, origins): (String, Vec<usize>) = source
        .chars()
        .enumerate()
        .flat_map(|(index, c)| c.to_lowercase().map(move |lower| (lower, index)))
        .unzip();

    let mut positions: Vec<usize> = fuzzy_match_positions(&folded, query)?
        .into_iter()
        .map(|i| origins[i])
        .collect();
    positions.dedup();
    Some(positions)
}

/// 検索対象になれるエンティティ
pub trait Matchable {
    /// 照合対象の文字列（小文字化済み）
    fn strings_to_match(&self) -> &[String];

    /// いずれかの文字列がクエリにあいまい一致すれば true
    fn matches(&self, query: &str) -> bool {
        self.strings_to_match()
            .iter()
            .any(|s| fuzzy_matches(s, query))
    }
}

/// 子エンティティを持つ検索対象（セクションなど）
pub trait GroupMatchable: Matchable {
    type Child: Matchable + Clone;

    /// 表示順に並んだ子エンティティ
    fn children(&self) -> &[Self::Child];

    /// クエリに一致する子だけを元の順序で返す
    fn matching_children(&self, query: &str) -> Vec<Self::Child> {
        self.children()
            .iter()
            .filter(|child| child.matches(query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "matching_test.rs"]
mod tests;

#[cfg(test)]
#[path = "matching_proptests.rs"]
mod proptests;
