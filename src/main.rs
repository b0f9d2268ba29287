use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use contactbook::application::ContactStore;
use contactbook::infrastructure::{CliArgs, StorageManager, init_logging};
use contactbook::presentation::App;

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let (mut config, source) = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;
    source.log();

    info!(version = contactbook::VERSION, "Starting {}", contactbook::NAME);

    let store = if config.seed_contacts {
        ContactStore::seeded()
    } else {
        ContactStore::new()
    };

    Ok(App::new(store, &config))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
