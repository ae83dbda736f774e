// src/cli/mod.rs
//! Command-line handling
//!
//! Single-character switches, optionally prefixed with `-` or `/`,
//! processed left to right. The last occurrence of a flag wins, and an
//! unknown switch only warns, so a stray argument cannot stop the
//! demonstration from running. The one fatal case is `l` with no value.

use log::{info, warn};

use crate::core::options::Options;
use crate::utils::error::{FiletrapError, Result};
use crate::utils::numeric::leading_i32;

/// Prints the usage banner, with an optional complaint line first.
pub fn usage(complaint: Option<&str>) {
    if let Some(msg) = complaint {
        println!("{}", msg);
    }
    println!(
        "filetrap: a utility to trigger a serious bug\n\
         \n\
         filetrap [[-|/]d]      run as daemon (default)\n\
         \x20        [[-|/]c]      run as console\n\
         \x20        [[-|/]w]      take workaround, keep the standard handles open\n\
         \x20        [[-|/]l <n>]  set log level threshold\n\
         \x20        [[-|/]h]      show this help\n"
    );
}

/// Folds the raw argument tokens (program name excluded) into an
/// [`Options`] value.
///
/// `h` and `?` print the usage text and keep going. `l` consumes the
/// following token as its value; when that token is missing, parsing
/// fails and startup must abort.
pub fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut iter = args.into_iter();
    let mut position = 0;

    while let Some(token) = iter.next() {
        position += 1;
        let flag = token
            .strip_prefix('-')
            .or_else(|| token.strip_prefix('/'))
            .unwrap_or(&token);
        match flag.chars().next() {
            Some('h') | Some('?') => usage(None),
            Some('d') => options.run_as_daemon = true,
            Some('c') => options.run_as_daemon = false,
            Some('w') => options.close_std_handles = false,
            Some('l') => match iter.next() {
                Some(value) => options.log_level = leading_i32(value.as_bytes()),
                None => {
                    usage(Some("-l missing log level value"));
                    return Err(FiletrapError::UsageError(
                        "missing log level value".to_string(),
                    ));
                }
            },
            _ => warn!("bad argument[{}]: {}", position, token),
        }
    }

    info!("got command line options 0x{:x}", options.bits());
    Ok(options)
}
