//! Four-function calculator entry point.

use autoshop_observability::ObservabilityConfig;
use autoshop_shell::{CalculatorSession, ShellConfig};

fn main() -> anyhow::Result<()> {
    autoshop_observability::init(&ObservabilityConfig::from_env());

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    CalculatorSession::new(stdin, stdout, ShellConfig::default()).run()
}
