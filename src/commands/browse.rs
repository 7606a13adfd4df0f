//! catalog browse コマンド
//!
//! 例と設定を対話的に閲覧する TUI を起動する。

use crate::catalog::Catalog;
use crate::error::Result;
use crate::preferences::PreferenceStore;

pub fn run(catalog: Catalog) -> Result<()> {
    let store = PreferenceStore::load()?;
    tracing::debug!(
        sections = catalog.sections.len(),
        settings = %store.path().display(),
        "starting browser"
    );
    crate::tui::run(catalog, store)?;
    Ok(())
}
