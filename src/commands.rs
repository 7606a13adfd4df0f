use crate::catalog::Catalog;
use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod browse;
pub mod info;
pub mod list;
pub mod prefs;
pub mod search;

pub fn dispatch(cli: Cli) -> Result<()> {
    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Command::List(args) => list::run(args, &Catalog::load(catalog_path)?),
        Command::Search(args) => search::run(args, &Catalog::load(catalog_path)?),
        Command::Info(args) => info::run(args, &Catalog::load(catalog_path)?),
        Command::Prefs(args) => prefs::run(args),
        Command::Browse => browse::run(Catalog::load(catalog_path)?),
    }
}
