pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod output;
pub mod scanner;

pub use error::{Result, SmellGuardError};

pub const EXIT_CLEAN: i32 = 0;
pub const EXIT_WARNINGS: i32 = 1;
pub const EXIT_ERRORS: i32 = 2;
pub const EXIT_RUNTIME_ERROR: i32 = 3;
