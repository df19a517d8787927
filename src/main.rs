use anyhow::{Context, Result};
use clap::Parser;
use hashtable_fixture::{Fixture, DEFAULT_OUTPUT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hashtable-fixture",
    about = "Writes the hash table test fixture to hash_table_test_data.txt",
    version
)]
struct Cli {
    /// Seed the generator to make the fixture reproducible
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fixture = Fixture::default();

    info!(path = DEFAULT_OUTPUT, count = fixture.count(), seed = ?cli.seed, "writing fixture");
    let written = match cli.seed {
        Some(seed) => fixture.write_file(DEFAULT_OUTPUT, &mut StdRng::seed_from_u64(seed)),
        None => fixture.write_file(DEFAULT_OUTPUT, &mut rand::rng()),
    }
    .with_context(|| format!("failed to write fixture to {DEFAULT_OUTPUT}"))?;
    info!(records = written, "fixture written");

    Ok(())
}
