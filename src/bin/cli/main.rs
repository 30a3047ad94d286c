//! # MIRA Protocol Command Line Interface
//!
//! The keys are those of the bundled linear test relation and offer no unforgeability.
//!
//! ```text
//! Usage: mira [OPTIONS] [COMMAND]
//!
//! Commands:
//!   keygen      MIRA signature protocol -- key generation
//!   sign        MIRA signature protocol -- signing
//!   verify      MIRA signature protocol -- verification
//!   parameters  MIRA signature protocol -- print parameters
//!   help        Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -v, --verbose  Log protocol events (overrides RUST_LOG)
//!   -h, --help     Print help
//!   -V, --version  Print version
//! ```
//!
//! ## Keygen
//!
//! ```text
//! $ mira keygen -o key
//! Seed: wmcuKiOGX/OXRBdC4dimmA==
//! Public key saved to "key.pub"
//! Secret key saved to "key"
//! ```
//!
//! ## Signing
//!
//! ```text
//! $ mira sign --msg "hello world" --sk key > signature.txt
//! ```
//!
//! ## Verification
//!
//! ```text
//! $ mira verify --pk key.pub --msg "hello world" --signature signature.txt
//! Signature is valid: true
//! ```

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use colored::Colorize as _;
use tracing_subscriber::EnvFilter;

use keygen::Keygen;
use parameters::Parameters;
use signing::Signing;
use verifying::Verifying;

mod keygen;
mod parameters;
mod signing;
mod utilities;
mod verifying;

#[derive(Parser)]
#[command(version, about("MIRA signature protocol"))]
#[cfg_attr(
    not(any(feature = "category_three", feature = "category_five")),
    command(about("MIRA signature protocol\nNIST Category ONE variant\nInsecure test relation"))
)]
#[cfg_attr(
    feature = "category_three",
    command(about("MIRA signature protocol\nNIST Category THREE variant\nInsecure test relation"))
)]
#[cfg_attr(
    all(feature = "category_five", not(feature = "category_three")),
    command(about("MIRA signature protocol\nNIST Category FIVE variant\nInsecure test relation"))
)]
pub struct Cli {
    /// Log protocol events (overrides RUST_LOG)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Keygen(Keygen),
    Sign(Signing),
    Verify(Verifying),
    Parameters(Parameters),
}

/// Logs go to stderr so that keys and signatures on stdout stay pipeable
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rmira=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match &cli.command {
        Some(Commands::Keygen(keygen)) => keygen.generate_keys(),
        Some(Commands::Sign(signing)) => signing.sign_message(),
        Some(Commands::Verify(verify)) => verify.verify_signature(),
        Some(Commands::Parameters(parameters)) => parameters.print_info(),
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(err) = res {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}
