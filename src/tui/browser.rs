//! カタログブラウザ TUI
//!
//! 例の一覧と設定画面を、検索バー付きの展開可能なリストで表示する。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update
//! - `rows`: セクションの表示行への展開
//! - `view`: 画面描画

mod app;
mod rows;
mod view;

use crate::catalog::Catalog;
use crate::preferences::PreferenceStore;
use app::Model;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// TUI を実行
pub fn run(catalog: Catalog, store: PreferenceStore) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = event_loop(Model::new(catalog, store));

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(mut model: Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| view::view(f, &mut model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    tracing::trace!(?msg, "key");
                    app::update(&mut model, msg);
                }
            }
        }
    }

    Ok(())
}
