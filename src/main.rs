//! pubkeyring CLI.
//!
//! Collects the public keys of `all_keys/0.key` .. `all_keys/<N-1>.key` into
//! `pubkeyring_<N>.keys`.

use clap::{ArgAction, Parser};
use pubkeyring::builder::{
    build_keyring, parse_count, write_keyring, KeyringLayout, DEFAULT_KEYS_DIR,
};
use pubkeyring::error::Result;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "pubkeyring")]
#[command(about = "Aggregate per-identity public keys into a single keyring", long_about = None)]
struct Cli {
    /// Number of key records to aggregate (reads indices 0..N)
    #[arg(value_name = "N", value_parser = parse_count)]
    count: usize,

    /// Directory holding the <index>.key records
    #[arg(long, default_value = DEFAULT_KEYS_DIR)]
    keys_dir: PathBuf,

    /// Directory the keyring file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let layout = KeyringLayout::new(cli.keys_dir, cli.output_dir);
    let keyring = build_keyring(&layout, cli.count)?;

    println!("{}", keyring);
    write_keyring(&layout, cli.count, &keyring)?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
