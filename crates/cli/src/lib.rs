//! `sunrise-cli` — the interactive rice-sack inventory terminal.
//!
//! The [`Shell`] owns one store for the lifetime of the process and talks to the
//! user through an injectable [`LineSource`] and any `std::io::Write`.

pub mod error;
pub mod input;
pub mod menu;
pub mod prompt;
pub mod shell;

pub use error::{IntegerInputError, ShellError};
pub use input::{LineSource, ReaderSource, ScriptedInput};
pub use menu::MenuChoice;
pub use shell::{SessionEnd, Shell};
