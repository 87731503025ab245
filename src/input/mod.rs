//! Reading and parsing the two operands.
//!
//! Tokens are separated by ASCII whitespace and may span several lines.
//! Reading stops as soon as two tokens have been collected, so an
//! interactive user never has to send EOF. Anything after the second token
//! is ignored. Input is read as bytes; a token that is not UTF-8 is an
//! ordinary invalid token.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::PROMPT;
use crate::models::{InvalidInputPolicy, Operands};

/// Number of operands the calculator consumes.
pub const OPERAND_COUNT: usize = 2;

/// Errors while reading or parsing operands.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("expected two numbers, but the {position} one is missing")]
    Missing { position: &'static str },

    #[error("the {position} number {token:?} is not a valid integer")]
    InvalidToken {
        position: &'static str,
        token: String,
    },

    #[error("the {position} number {token} does not fit in a 64-bit integer")]
    OutOfRange {
        position: &'static str,
        token: String,
    },

    #[error("failed to read input")]
    Read(#[from] io::Error),
}

/// Write the prompt without a trailing newline and flush it.
pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

/// Collect up to `count` whitespace-separated tokens from `reader`.
///
/// Returns fewer than `count` tokens only if the input ends first.
pub fn read_tokens<R: BufRead>(mut reader: R, count: usize) -> Result<Vec<String>, InputError> {
    let mut tokens = Vec::with_capacity(count);
    let mut line = Vec::new();

    while tokens.len() < count {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        tokens.extend(
            line.split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty())
                .take(count - tokens.len())
                .map(|token| String::from_utf8_lossy(token).into_owned()),
        );
    }

    debug!(tokens = ?tokens, "read operand tokens");
    Ok(tokens)
}

/// Parse operands from already-split tokens, applying `policy`.
pub fn parse_operands<S: AsRef<str>>(
    tokens: &[S],
    policy: InvalidInputPolicy,
) -> Result<Operands, InputError> {
    let a = parse_operand(tokens.first().map(AsRef::as_ref), "first", policy)?;
    let b = parse_operand(tokens.get(1).map(AsRef::as_ref), "second", policy)?;
    Ok(Operands::new(a, b))
}

/// Read and parse two operands from `reader`.
pub fn read_operands<R: BufRead>(
    reader: R,
    policy: InvalidInputPolicy,
) -> Result<Operands, InputError> {
    let tokens = read_tokens(reader, OPERAND_COUNT)?;
    parse_operands(&tokens, policy)
}

fn parse_operand(
    token: Option<&str>,
    position: &'static str,
    policy: InvalidInputPolicy,
) -> Result<i64, InputError> {
    let result = match token {
        None => Err(InputError::Missing { position }),
        Some(token) => token.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange {
                position,
                token: token.to_string(),
            },
            _ => InputError::InvalidToken {
                position,
                token: token.to_string(),
            },
        }),
    };

    match (result, policy) {
        (Ok(value), _) => Ok(value),
        (Err(err), InvalidInputPolicy::Zero) => {
            warn!("{err}; using 0");
            Ok(0)
        }
        (Err(err), InvalidInputPolicy::Reject) => Err(err),
    }
}
