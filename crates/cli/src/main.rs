use std::io;

use anyhow::Context;
use clap::Parser;

use stockroom_auth::Authenticator;
use stockroom_cli::{Cli, Config, Session};
use stockroom_inventory::InventoryStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockroom_observability::init(cli.log_format());

    let config = Config::load(&cli);
    let store = InventoryStore::new().with_policy(config.update_policy);
    let authenticator = Authenticator::new(config.credentials);

    let end = Session::new(io::stdin().lock(), io::stdout().lock(), authenticator, store)
        .run()
        .context("interactive session failed")?;

    tracing::debug!(?end, "session ended");
    Ok(())
}
