//! catalog list コマンド
//!
//! カタログの例をセクションごとに一覧表示する。

use crate::catalog::{Catalog, ExampleLanguage, Section};
use crate::error::Result;
use crate::output::count_summary;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Show only sections whose name contains this text (case-insensitive)
    #[arg(long)]
    pub section: Option<String>,

    /// Show only examples written in this language
    #[arg(long, value_enum)]
    pub language: Option<ExampleLanguage>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only example type names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args, catalog: &Catalog) -> Result<()> {
    let sections = filter_sections(&catalog.sections, args.section.as_deref(), args.language);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
    } else if args.simple {
        print_simple(&sections);
    } else {
        print_table(&sections, catalog.example_count());
    }

    Ok(())
}

/// セクション名と言語で絞り込む（例が残らないセクションは除外）
fn filter_sections(
    sections: &[Section],
    name: Option<&str>,
    language: Option<ExampleLanguage>,
) -> Vec<Section> {
    let needle = name.map(str::to_lowercase);
    sections
        .iter()
        .filter(|s| match &needle {
            Some(needle) => s.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter_map(|s| match language {
            Some(language) => {
                let examples: Vec<_> = s
                    .examples
                    .iter()
                    .filter(|e| e.language == language)
                    .cloned()
                    .collect();
                (!examples.is_empty()).then(|| s.with_examples(examples))
            }
            None => Some(s.clone()),
        })
        .collect()
}

fn print_simple(sections: &[Section]) {
    for example in sections.iter().flat_map(|s| s.examples.iter()) {
        println!("{}", example.name);
    }
}

fn print_table(sections: &[Section], total: usize) {
    if sections.is_empty() {
        println!("No sections matched");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Section", "Title", "Name", "Language"]);

    let mut shown = 0;
    for section in sections {
        for example in &section.examples {
            table.add_row(vec![
                section.name.as_str(),
                example.title.as_str(),
                example.name.as_str(),
                example.language.as_str(),
            ]);
            shown += 1;
        }
    }

    println!("{table}");
    println!("{}", count_summary(shown, total, "example"));
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
