//! Verification

use clap::{Error, Parser};
use colored::Colorize as _;

use rmira::{keygen::PublicKey, signature::Signature, utils::marshalling::Marshalling as _};

use crate::utilities::{
    clap_err_result_msg, get_decoded_string_from_file_or_string, get_msg, print_title,
};

#[derive(Parser)]
#[command(version, about("MIRA signature protocol -- verification"), long_about = None)]
pub struct Verifying {
    /// Public key file or string
    #[arg(long("pk"))]
    pub pub_key: String,

    /// Message file (base64) or string
    #[arg(short, long)]
    pub msg: String,

    /// Signature file or string
    #[arg(short, long)]
    pub signature: String,
}

impl Verifying {
    fn get_public_key(&self) -> Result<PublicKey, Error> {
        let decoded = get_decoded_string_from_file_or_string(&self.pub_key, "Public Key")?;
        clap_err_result_msg!(PublicKey::parse(&decoded), "Could not parse public key")
    }

    pub fn verify_signature(&self) -> Result<(), Error> {
        print_title("Verifying message.");
        let pk = self.get_public_key()?;
        let msg = get_msg(&self.msg)?;
        let signature = get_decoded_string_from_file_or_string(&self.signature, "Signature")?;

        let is_valid = clap_err_result_msg!(
            Signature::verify_signature(&pk, &signature, &msg),
            "Malformed signature"
        )?;

        eprint!(
            "{}",
            match is_valid {
                true => "Signature is valid: ".green(),
                false => "Signature is invalid: ".red(),
            }
        );
        println!("{}", is_valid);

        Ok(())
    }
}
