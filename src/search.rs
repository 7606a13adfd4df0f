//! 検索状態と階層フィルタ
//!
//! セクション（グループ）と子要素の2階層リストを検索クエリで絞り込む。
//!
//! - グループ名が一致すればグループ全体を残す
//! - そうでなければ一致した子だけを持つグループに再構築する
//! - どちらも一致しなければグループごと除外する
//!
//! 直前のクエリを伸ばしただけの入力では、直前の結果を探索範囲にする。

use crate::matching::GroupMatchable;
use std::borrow::Cow;

/// 検索バーの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// 検索バー非表示
    #[default]
    Hidden,
    /// 検索バー表示中（クエリは小文字化済み）
    Visible {
        query: String,
        previous_query: String,
    },
}

impl SearchState {
    /// 表示状態を作成（両クエリを小文字化する）
    pub fn visible(query: &str, previous_query: &str) -> Self {
        SearchState::Visible {
            query: query.to_lowercase(),
            previous_query: previous_query.to_lowercase(),
        }
    }

    /// 入力が変わったときの次の状態（現在のクエリが直前のクエリになる）
    pub fn advance(&self, raw_query: &str) -> Self {
        Self::visible(raw_query, self.query_or_blank())
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SearchState::Visible { .. })
    }

    /// 現在のクエリ（非表示なら空文字）
    pub fn query_or_blank(&self) -> &str {
        match self {
            SearchState::Hidden => "",
            SearchState::Visible { query, .. } => query,
        }
    }

    /// 直前のクエリ（非表示なら空文字）
    pub fn previous_query_or_blank(&self) -> &str {
        match self {
            SearchState::Hidden => "",
            SearchState::Visible { previous_query, .. } => previous_query,
        }
    }

    /// クエリが空白のみ（＝フィルタなし）かどうか
    pub fn is_blank(&self) -> bool {
        is_blank(self.query_or_blank())
    }
}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// グループのリストを検索クエリで絞り込む
///
/// - `current_query` が空白のみなら `groups` をそのまま返す（`Cow::Borrowed`）
/// - `current_query` が `previous_query` で始まり `previous_result` があれば、
///   それを探索範囲にする
/// - `rebuild` は元グループと一致した子から同じ形のグループを作る
///
/// `previous_result` は `previous_query` に対してこの関数が返した結果であること。
pub fn filter_groups<'a, G, F>(
    groups: &'a [G],
    current_query: &str,
    previous_query: &str,
    previous_result: Option<&'a [G]>,
    rebuild: F,
) -> Cow<'a, [G]>
where
    G: GroupMatchable + Clone,
    F: Fn(&G, Vec<G::Child>) -> G,
{
    if is_blank(current_query) {
        return Cow::Borrowed(groups);
    }

    let base = match previous_result {
        Some(previous) if current_query.starts_with(previous_query) => {
            tracing::trace!(
                query = current_query,
                base_len = previous.len(),
                "refining previous result"
            );
            previous
        }
        _ => groups,
    };

    let filtered = base
        .iter()
        .filter_map(|group| {
            // グループ名が一致すれば子はすべて残す
            if group.matches(current_query) {
                return Some(group.clone());
            }

            let children = group.matching_children(current_query);
            if children.is_empty() {
                None
            } else {
                Some(rebuild(group, children))
            }
        })
        .collect();

    Cow::Owned(filtered)
}

/// `SearchState` のクエリで `filter_groups` を実行する
pub fn filter_by_search_state<'a, G, F>(
    groups: &'a [G],
    state: &SearchState,
    previous_result: Option<&'a [G]>,
    rebuild: F,
) -> Cow<'a, [G]>
where
    G: GroupMatchable + Clone,
    F: Fn(&G, Vec<G::Child>) -> G,
{
    filter_groups(
        groups,
        state.query_or_blank(),
        state.previous_query_or_blank(),
        previous_result,
        rebuild,
    )
}

/// 直前のフィルタ結果を保持し、次の絞り込みの探索範囲として渡す
#[derive(Debug, Clone)]
pub struct FilterCache<G> {
    last: Option<Vec<G>>,
}

impl<G> Default for FilterCache<G> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<G: GroupMatchable + Clone> FilterCache<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 検索状態に合わせて結果を更新し、更新後の結果を返す
    pub fn refresh<F>(&mut self, groups: &[G], state: &SearchState, rebuild: F) -> &[G]
    where
        F: Fn(&G, Vec<G::Child>) -> G,
    {
        let next = filter_by_search_state(groups, state, self.last.as_deref(), rebuild).into_owned();
        self.last.insert(next).as_slice()
    }

    /// 最後に計算した結果
    pub fn current(&self) -> Option<&[G]> {
        self.last.as_deref()
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;

#[cfg(test)]
#[path = "search_proptests.rs"]
mod proptests;
