//! catalog info コマンド
//!
//! 型名を指定して例の詳細を表示する。

use crate::catalog::{Catalog, Example, Section};
use crate::error::{CatalogError, Result};
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// 例の型名（大文字小文字は区別しない）
    pub name: String,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// 出力用の例の詳細
#[derive(Debug, Serialize)]
struct ExampleDetail<'a> {
    section: &'a str,
    #[serde(flatten)]
    example: &'a Example,
}

pub fn run(args: Args, catalog: &Catalog) -> Result<()> {
    let (section, example) = catalog
        .find_example(&args.name)
        .ok_or_else(|| CatalogError::ExampleNotFound(args.name.clone()))?;

    let detail = ExampleDetail {
        section: &section.name,
        example,
    };

    match args.format {
        OutputFormat::Table => print_table(section, example),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&detail)?),
    }

    Ok(())
}

fn print_table(section: &Section, example: &Example) {
    println!("Example Information");
    println!("===================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    for (field, value) in detail_rows(section, example) {
        table.add_row(vec![field, value]);
    }

    println!("{table}");
}

fn detail_rows<'a>(section: &'a Section, example: &'a Example) -> Vec<(&'static str, &'a str)> {
    let description = if example.description.is_empty() {
        "-"
    } else {
        example.description.as_str()
    };

    vec![
        ("Title", example.title.as_str()),
        ("Name", example.name.as_str()),
        ("Section", section.name.as_str()),
        ("Language", example.language.as_str()),
        ("Description", description),
    ]
}

#[cfg(test)]
#[path = "info_test.rs"]
mod tests;
