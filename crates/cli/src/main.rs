use std::io;

use anyhow::Context;

use shoestock_cli::{Console, SessionConfig, session};
use shoestock_infra::StoreConfig;

fn main() -> anyhow::Result<()> {
    shoestock_observability::init();

    let config = StoreConfig::default();
    let (mut store, report) = config
        .open()
        .with_context(|| format!("could not load inventory from {}", config.path.display()))?;
    tracing::debug!(records = store.list().len(), "store opened");

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    session::report_load(&mut console, &report, &config.path)?;

    let session_config = SessionConfig {
        default_restock: config.default_restock,
    };
    session::run(&mut store, &mut console, session_config).context("inventory session aborted")?;
    Ok(())
}
