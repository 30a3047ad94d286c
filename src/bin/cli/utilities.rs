//! Shared helpers of the subcommands

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

use clap::Error;
use colored::Colorize as _;
use rand::{rngs::StdRng, RngCore, SeedableRng};

use rmira::constants::params::{PARAM_SALT_SIZE, PARAM_SEED_SIZE};

/// Unwraps a result or returns it as a [`clap::Error`] of kind `$t` (default `InvalidValue`)
macro_rules! clap_err_result {
    ($e:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, e)),
        }
    };

    ($e:expr) => {
        clap_err_result!($e, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result;

/// Like [`clap_err_result`], prefixing the error with `$m`
macro_rules! clap_err_result_msg {
    ($e:expr, $m:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, format!("{}: {}\n", $m, e))),
        }
    };

    ($e:expr, $m:expr) => {
        clap_err_result_msg!($e, $m, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result_msg;

pub(super) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

/// Decodes `value` from base64 into `N` bytes, or samples fresh bytes and prints them if `value`
/// is `None`.
fn get_random_or_decoded<const N: usize>(
    value: Option<&String>,
    name: &str,
) -> Result<[u8; N], Error> {
    let mut bytes = [0u8; N];
    match value {
        None => {
            StdRng::from_entropy().fill_bytes(&mut bytes);
            eprintln!("{}: {}", name.blue(), STANDARD.encode(bytes));
        }
        Some(encoded) => {
            let decoded = clap_err_result_msg!(
                STANDARD.decode(encoded),
                format!("Could not decode {} from base64", name.to_lowercase())
            )?;
            if decoded.len() != N {
                return Err(Error::raw(
                    clap::error::ErrorKind::InvalidValue,
                    format!("{} must be {} bytes long\n", name, N),
                ));
            }
            bytes.copy_from_slice(&decoded);
        }
    }
    Ok(bytes)
}

/// Returns the given seed, or a random one
pub(super) fn get_seed(seed: Option<&String>) -> Result<[u8; PARAM_SEED_SIZE], Error> {
    get_random_or_decoded(seed, "Seed")
}

/// Returns the given salt, or a random one
pub(super) fn get_salt(salt: Option<&String>) -> Result<[u8; PARAM_SALT_SIZE], Error> {
    get_random_or_decoded(salt, "Salt")
}

/// Reads base64 from the file at `file_or_string` if it exists, otherwise decodes the argument
/// itself.
pub(super) fn get_decoded_string_from_file_or_string(
    file_or_string: &str,
    title: &str,
) -> Result<Vec<u8>, Error> {
    let path = Path::new(file_or_string);
    let encoded = if path.exists() {
        eprintln!(
            "{}: {}",
            format!("Reading {} from file", title).blue(),
            path.display()
        );
        std::fs::read_to_string(path)?.trim().to_string()
    } else {
        file_or_string.to_string()
    };

    clap_err_result_msg!(
        STANDARD.decode(encoded),
        format!("Could not decode {} from base64", title)
    )
}

/// Message bytes: the base64 content of a file, or the raw argument
pub(super) fn get_msg(msg: &str) -> Result<Vec<u8>, Error> {
    let path = Path::new(msg);
    if path.exists() {
        clap_err_result_msg!(
            STANDARD.decode(std::fs::read_to_string(path)?.trim()),
            "Could not decode message using base64"
        )
    } else {
        Ok(msg.as_bytes().to_vec())
    }
}
