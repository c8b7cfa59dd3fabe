//! Strategy comparison demo
//!
//! Downloads the default page list once with each strategy and prints the report lines
//! followed by the run's total execution time.
//!
//! Usage: cargo run --release --example compare_strategies
//!
//! Set `RUST_LOG=page_fetch=debug` to see per-fetch logging.

use page_fetch::report::WriterSink;
use page_fetch::{Config, Session, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("page_fetch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(Config::default())?;
    let mut stdout = WriterSink::stdout();

    println!("═══════════════════════════════════════════════════════════");
    println!("  page-fetch strategy comparison");
    println!("═══════════════════════════════════════════════════════════");

    for strategy in Strategy::ALL {
        println!();
        println!("── {strategy} ──");
        if let Err(e) = session.run(strategy, &mut stdout) {
            eprintln!("{strategy} run failed: {e}");
        }
    }

    Ok(())
}
