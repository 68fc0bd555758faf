use thiserror::Error;

use sunrise_core::DomainError;

/// Terminal-level failure. Domain rejections never surface here; the shell
/// reports them and returns to the menu.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),

    /// The input source reached end of file.
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Why a line was not accepted as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegerInputError {
    #[error("Please enter a valid integer.")]
    NotAnInteger,

    #[error("{}", below_minimum_message(.minimum))]
    BelowMinimum { minimum: u64 },

    #[error("Please enter a number less than or equal to {maximum}.")]
    AboveMaximum { maximum: u64 },
}

fn below_minimum_message(minimum: &u64) -> String {
    if *minimum == 1 {
        "1 is the minimum value allowed.".to_string()
    } else {
        format!("Please enter a number greater than or equal to {minimum}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_messages() {
        assert_eq!(IntegerInputError::NotAnInteger.to_string(), "Please enter a valid integer.");
        assert_eq!(
            IntegerInputError::BelowMinimum { minimum: 1 }.to_string(),
            "1 is the minimum value allowed."
        );
        assert_eq!(
            IntegerInputError::BelowMinimum { minimum: 5 }.to_string(),
            "Please enter a number greater than or equal to 5."
        );
        assert_eq!(
            IntegerInputError::AboveMaximum { maximum: 9 }.to_string(),
            "Please enter a number less than or equal to 9."
        );
    }
}
