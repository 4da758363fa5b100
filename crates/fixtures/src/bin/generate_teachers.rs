//! Writes teacher fixtures 101-150 into `teachers_xml/`.
//!
//! Run with:
//! ```
//! cargo run -p fixtures --bin generate-teachers
//! ```

use fixtures::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let writer = FixtureWriter::new(FixtureConfig::teachers());

    // Unseeded: every run produces different field values
    let mut rng = rand::thread_rng();
    let summary = writer.write_all(&TeacherGenerator::new(), &mut rng)?;

    println!("{summary}");

    Ok(())
}
