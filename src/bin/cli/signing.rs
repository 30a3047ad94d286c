//! Signing

use base64::{engine::general_purpose::STANDARD, Engine as _};

use clap::{Error, Parser};

use rmira::{keygen::SecretKey, signature::Signature, utils::marshalling::Marshalling as _};

use crate::utilities::{
    clap_err_result, clap_err_result_msg, get_decoded_string_from_file_or_string, get_msg,
    get_salt, get_seed, print_title,
};

#[derive(Parser)]
#[command(version, about("MIRA signature protocol -- signing"), long_about = None)]
pub struct Signing {
    /// Message file (base64) or string
    #[arg(short, long)]
    pub msg: String,

    /// Secret key file or string
    #[arg(long("sk"))]
    pub secret_key: String,

    /// Master seed of the seed trees, base64 encoded. Random if omitted.
    #[arg(long)]
    pub seed: Option<String>,

    /// Signing salt, base64 encoded. Random if omitted.
    #[arg(long)]
    pub salt: Option<String>,
}

impl Signing {
    fn get_secret_key(&self) -> Result<SecretKey, Error> {
        let decoded = get_decoded_string_from_file_or_string(&self.secret_key, "Secret Key")?;
        clap_err_result_msg!(SecretKey::parse(&decoded), "Could not parse secret key")
    }

    pub fn sign_message(&self) -> Result<(), Error> {
        print_title("Signing message.");
        let secret_key = self.get_secret_key()?;
        let msg = get_msg(&self.msg)?;
        let seed = get_seed(self.seed.as_ref())?;
        let salt = get_salt(self.salt.as_ref())?;

        let signature = clap_err_result!(Signature::sign_message((seed, salt), &secret_key, &msg))?;

        eprintln!();
        println!("{}", STANDARD.encode(signature));
        Ok(())
    }
}
