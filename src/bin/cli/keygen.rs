//! Keygen

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::PathBuf;

use clap::{ArgAction, Error, Parser};
use colored::Colorize as _;

use rmira::{
    keygen::{keygen, PublicKey, SecretKey},
    utils::marshalling::Marshalling as _,
};

use crate::utilities::{get_seed, print_title};

#[derive(Parser)]
#[command(version, about("MIRA signature protocol -- key generation"), long_about = None)]
pub struct Keygen {
    /// Root seed, base64 encoded. Random if omitted.
    #[arg(short, long)]
    seed: Option<String>,

    /// Output file. The public key is written next to it with the `pub` extension.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only output the public key
    #[arg(long("pk"), action = ArgAction::SetTrue, conflicts_with("sec_key"))]
    pub_key: bool,

    /// Only output the secret key
    #[arg(long("sk"), action = ArgAction::SetTrue, conflicts_with("pub_key"))]
    sec_key: bool,
}

impl Keygen {
    /// Writes the keys to files if an output is given, otherwise prints them to stdout
    fn output_keys(&self, pk: &PublicKey, sk: &SecretKey) -> Result<(), Error> {
        let print_all = !self.pub_key && !self.sec_key;
        let pk_plain = STANDARD.encode(pk.serialise());
        let sk_plain = STANDARD.encode(sk.serialise());

        let Some(output) = &self.output else {
            if print_all || self.pub_key {
                eprint!("\n{}", "Public key: ".blue());
                println!("{}", pk_plain);
            }
            if print_all || self.sec_key {
                eprint!("\n{}", "Secret key: ".blue());
                println!("{}", sk_plain);
            }
            return Ok(());
        };

        let mut path = output.clone();
        if path.is_dir() {
            path.push("mira");
        }

        if print_all || self.pub_key {
            let pk_path = path.with_extension("pub");
            std::fs::write(&pk_path, pk_plain)?;
            eprintln!("{} {:?}", "Public key saved to".blue(), pk_path.display());
        }
        if print_all || self.sec_key {
            std::fs::write(&path, sk_plain)?;
            eprintln!("{} {:?}", "Secret key saved to".blue(), path.display());
        }
        Ok(())
    }

    pub fn generate_keys(&self) -> Result<(), Error> {
        print_title("Generating MIRA key pair.");
        let seed = get_seed(self.seed.as_ref())?;
        let (pk, sk) = keygen(seed);
        self.output_keys(&pk, &sk)
    }
}
