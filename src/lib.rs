//! cal — read two integers and print their sum, difference, product and
//! quotient (library crate).
//!
//! Re-exports public modules for the binary and integration tests.

pub mod calc;
pub mod config;
pub mod constants;
pub mod env;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
