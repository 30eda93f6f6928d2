//! Auto-parts inventory entry point.

use autoshop_observability::ObservabilityConfig;
use autoshop_shell::{InventorySession, ShellConfig};

fn main() -> anyhow::Result<()> {
    autoshop_observability::init(&ObservabilityConfig::from_env());

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    let mut session = InventorySession::start(stdin, stdout, ShellConfig::default())?;
    session.run()
}
