//! catalog prefs コマンド
//!
//! 設定値の一覧・取得・変更を行う。変更は設定ファイルに保存される。

use crate::error::Result;
use crate::output::success;
use crate::preferences::{ButtonOutcome, PreferenceStore, PreferenceValue};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List settings with their current values
    List {
        /// Show only settings changed from their defaults
        #[arg(long)]
        modified: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the current value of a setting
    Get {
        /// Setting key (e.g. page_scroll_direction)
        key: String,
    },

    /// Change a setting
    #[command(
        long_about = "Change a setting. Checkboxes accept true/false, radio settings accept one of their options (case-insensitive)."
    )]
    Set {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },

    /// Restore a setting (or every setting) to its default
    Reset {
        /// Setting key (resets all settings if not specified)
        key: Option<String>,
    },

    /// Run a button action (clear_cache, clear_app_data)
    Press {
        /// Button key
        key: String,
    },
}

/// JSON 出力用の設定項目
#[derive(Debug, Serialize)]
struct PreferenceRow {
    section: String,
    title: String,
    key: String,
    kind: &'static str,
    value: Option<PreferenceValue>,
    modified: bool,
}

pub fn run(args: Args) -> Result<()> {
    let mut store = PreferenceStore::load()?;
    run_with_store(args, &mut store)
}

fn run_with_store(args: Args, store: &mut PreferenceStore) -> Result<()> {
    match args.command {
        Command::List { modified, json } => {
            let rows = preference_rows(store, modified);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_table(&rows);
            }
        }
        Command::Get { key } => println!("{}", store.get(&key)?),
        Command::Set { key, value } => {
            let value = store.set_from_str(&key, &value)?;
            store.save()?;
            println!("{}", success(&format!("{} = {}", key, value)));
        }
        Command::Reset { key: Some(key) } => {
            store.reset(&key)?;
            store.save()?;
            println!("{}", success(&format!("{} reset to default", key)));
        }
        Command::Reset { key: None } => {
            store.reset_all();
            store.save()?;
            println!("{}", success("All settings reset to defaults"));
        }
        Command::Press { key } => match store.press(&key)? {
            ButtonOutcome::CacheCleared => println!("{}", success("Cache cleared")),
            ButtonOutcome::AppDataCleared => {
                println!("{}", success("Settings restored to defaults"))
            }
        },
    }
    Ok(())
}

fn preference_rows(store: &PreferenceStore, modified_only: bool) -> Vec<PreferenceRow> {
    store
        .entries()
        .into_iter()
        .map(|(section, pref, value)| PreferenceRow {
            section: section.title.clone(),
            title: pref.title.clone(),
            key: pref.key.clone(),
            kind: pref.kind.label(),
            value,
            modified: store.is_modified(&pref.key),
        })
        .filter(|row| !modified_only || row.modified)
        .collect()
}

fn print_table(rows: &[PreferenceRow]) {
    if rows.is_empty() {
        println!("No settings changed from their defaults");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["SECTION", "KEY", "KIND", "VALUE"]);

    for row in rows {
        let value = match &row.value {
            Some(v) if row.modified => v.to_string().yellow().to_string(),
            Some(v) => v.to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            row.section.clone(),
            row.key.clone(),
            row.kind.to_string(),
            value,
        ]);
    }

    println!("{table}");
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
