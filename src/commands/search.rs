//! catalog search コマンド
//!
//! 例（または設定項目）をあいまい検索する。セクション名に一致した場合は
//! そのセクションの項目をすべて表示する。

use crate::catalog::{Catalog, Section};
use crate::error::Result;
use crate::output::{count_summary, highlight_matches};
use crate::preferences::{builtin_sections, PreferencesSection};
use crate::search::filter_groups;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Parser)]
pub struct Args {
    /// Search query (matched as an ordered subsequence, case-insensitive)
    pub query: String,

    /// Search settings instead of examples
    #[arg(long)]
    pub settings: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// JSON 出力用の設定項目
#[derive(Debug, Serialize)]
struct PreferenceHit<'a> {
    section: &'a str,
    title: &'a str,
    key: &'a str,
    kind: &'static str,
}

pub fn run(args: Args, catalog: &Catalog) -> Result<()> {
    let query = args.query.to_lowercase();
    tracing::debug!(query = %query, settings = args.settings, "search");

    if args.settings {
        let sections = builtin_sections();
        let hits = search_preferences(&sections, &query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&preference_hits(&hits))?);
        } else {
            print_preferences(&hits, &query);
        }
    } else {
        let hits = search_examples(&catalog.sections, &query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&hits)?);
        } else {
            print_examples(&hits, &query, catalog.example_count());
        }
    }

    Ok(())
}

/// 例を検索（クエリは小文字化済みであること）
fn search_examples<'a>(sections: &'a [Section], query: &str) -> Cow<'a, [Section]> {
    filter_groups(sections, query, "", None, Section::with_examples)
}

/// 設定項目を検索（クエリは小文字化済みであること）
fn search_preferences<'a>(
    sections: &'a [PreferencesSection],
    query: &str,
) -> Cow<'a, [PreferencesSection]> {
    filter_groups(sections, query, "", None, PreferencesSection::with_preferences)
}

fn preference_hits(sections: &[PreferencesSection]) -> Vec<PreferenceHit<'_>> {
    sections
        .iter()
        .flat_map(|section| {
            section.preferences.iter().map(move |pref| PreferenceHit {
                section: &section.title,
                title: &pref.title,
                key: &pref.key,
                kind: pref.kind.label(),
            })
        })
        .collect()
}

fn print_examples(sections: &[Section], query: &str, total: usize) {
    if sections.is_empty() {
        println!("No examples matched '{}'", query);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Section", "Title", "Name"]);

    let mut shown = 0;
    for section in sections {
        for example in &section.examples {
            table.add_row(vec![
                highlight_matches(&section.name, query),
                highlight_matches(&example.title, query),
                example.name.clone(),
            ]);
            shown += 1;
        }
    }

    println!("{table}");
    println!("{}", count_summary(shown, total, "example"));
}

fn print_preferences(sections: &[PreferencesSection], query: &str) {
    if sections.is_empty() {
        println!("No settings matched '{}'", query);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Section", "Title", "Key", "Kind"]);

    for section in sections {
        for pref in &section.preferences {
            table.add_row(vec![
                highlight_matches(&section.title, query),
                highlight_matches(&pref.title, query),
                pref.key.clone(),
                pref.kind.label().to_string(),
            ]);
        }
    }

    println!("{table}");
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
