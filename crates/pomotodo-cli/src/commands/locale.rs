use clap::Subcommand;
use pomotodo_core::{Locale, TaskStore};

#[derive(Subcommand)]
pub enum LocaleAction {
    /// Print the stored locale tag
    Get,
    /// Store a locale tag (ja or en)
    Set {
        /// Locale tag
        tag: Locale,
    },
}

pub fn run(action: LocaleAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    match action {
        LocaleAction::Get => println!("{}", store.locale()?),
        LocaleAction::Set { tag } => {
            store.set_locale(tag)?;
            println!("ok");
        }
    }
    Ok(())
}
