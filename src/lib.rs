pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;

pub use error::{EnvGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
