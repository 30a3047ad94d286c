use clap::{Error, Parser};
use colored::Colorize as _;

use rmira::{
    api::{CRYPTO_BYTES, CRYPTO_PUBLICKEYBYTES, CRYPTO_SECRETKEYBYTES},
    constants::params::{self, PARAMETERS},
};

#[derive(Parser)]
#[command(version, about("MIRA signature protocol -- print parameters"), long_about = None)]
pub struct Parameters {}

fn print_row(value: usize, description: &str) {
    println!("{}\t{}", value.to_string().bold(), description);
}

impl Parameters {
    pub fn print_info(&self) -> Result<(), Error> {
        println!("MIRA signature protocol parameters");
        println!("NIST Category {:?} variant", params::COMPILED_CATEGORY);
        if cfg!(feature = "variant_short") {
            println!("Short signature variant");
        } else {
            println!("Fast signature variant");
        }
        println!();

        println!("{}", "MinRank Parameters:".blue().bold());
        print_row(PARAMETERS.k, "(k) Witness length");
        print_row(PARAMETERS.m_sub_k, "(m - k) Syndrome length");

        println!("{}", "\nMPCitH Parameters:".blue().bold());
        print_row(PARAMETERS.n_mpc(), "(N) Number of parties");
        print_row(PARAMETERS.log_n_mpc, "(log_2(N)) Depth of the seed tree");
        print_row(PARAMETERS.tau, "(τ) Number of repetitions of the protocol");

        println!("{}", "\nSignature Parameters:".blue().bold());
        print_row(params::PARAM_SECURITY_BYTES, "(λ) Seed size in bytes");
        print_row(params::PARAM_SALT_SIZE, "Salt size in bytes");
        print_row(params::PARAM_DIGEST_SIZE, "Digest (Hash) size in bytes");
        print_row(CRYPTO_PUBLICKEYBYTES, "Public key size in bytes");
        print_row(CRYPTO_SECRETKEYBYTES, "Secret key size in bytes");
        print_row(CRYPTO_BYTES, "Signature size in bytes");

        Ok(())
    }
}
