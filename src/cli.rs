use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{info, list, prefs, search};

#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(about = "Browse and search the example catalog", long_about = None)]
pub struct Cli {
    /// Catalog file to load (TOML or YAML). Defaults to $CATALOG_FILE or the built-in catalog.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 例の一覧
    List(list::Args),

    /// 例や設定をあいまい検索
    Search(search::Args),

    /// 例の詳細表示
    Info(info::Args),

    /// 設定の表示と変更
    Prefs(prefs::Args),

    /// 対話的なブラウザを起動
    Browse,
}
