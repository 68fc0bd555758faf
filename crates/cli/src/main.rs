use std::io;

use anyhow::Context;

use sunrise_cli::{ReaderSource, Shell};
use sunrise_inventory::InMemoryInventoryStore;

fn main() -> anyhow::Result<()> {
    sunrise_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        InMemoryInventoryStore::new(),
        ReaderSource::new(stdin.lock()),
        stdout.lock(),
    );

    let end = shell.run().context("interactive session failed")?;
    tracing::debug!(?end, "session finished");
    Ok(())
}
