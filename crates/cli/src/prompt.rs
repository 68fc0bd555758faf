//! Prompting for lines and validated integers.

use std::io::Write;

use crate::error::{IntegerInputError, ShellError};
use crate::input::LineSource;

/// Write `prompt`, then read one line and return it trimmed.
pub fn prompt_line<I, W>(input: &mut I, out: &mut W, prompt: &str) -> Result<String, ShellError>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{prompt}")?;
    out.flush()?;
    match input.next_line()? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err(ShellError::InputClosed),
    }
}

/// Parse `text` as an integer no smaller than `minimum`.
///
/// Well-formed integers outside the representable range get a range message
/// rather than [`IntegerInputError::NotAnInteger`].
pub fn parse_integer(text: &str, minimum: u64) -> Result<u64, IntegerInputError> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IntegerInputError::NotAnInteger);
    }

    let is_zero = digits.bytes().all(|b| b == b'0');
    if negative && !is_zero {
        return Err(IntegerInputError::BelowMinimum { minimum });
    }

    let value: u64 = digits.parse().map_err(|_| IntegerInputError::AboveMaximum {
        maximum: u64::MAX,
    })?;
    if value < minimum {
        return Err(IntegerInputError::BelowMinimum { minimum });
    }
    Ok(value)
}

/// Prompt until the user supplies an integer `>= minimum`.
///
/// Each rejected line prints the reason and asks again; there is no retry cap.
pub fn prompt_integer<I, W>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
    minimum: u64,
) -> Result<u64, ShellError>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let line = prompt_line(input, out, prompt)?;
        match parse_integer(&line, minimum) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "rejected integer input");
                writeln!(out, "{e}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    fn transcript(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_accepts_padded_and_signed() {
        assert_eq!(parse_integer(" 3 ", 1), Ok(3));
        assert_eq!(parse_integer("+7", 1), Ok(7));
    }

    #[test]
    fn parse_rejects_garbage_and_small_values() {
        assert_eq!(parse_integer("abc", 1), Err(IntegerInputError::NotAnInteger));
        assert_eq!(parse_integer("", 1), Err(IntegerInputError::NotAnInteger));
        assert_eq!(parse_integer("2.5", 1), Err(IntegerInputError::NotAnInteger));
        assert_eq!(parse_integer("0", 1), Err(IntegerInputError::BelowMinimum { minimum: 1 }));
        assert_eq!(parse_integer("-4", 1), Err(IntegerInputError::BelowMinimum { minimum: 1 }));
        assert_eq!(parse_integer("9", 10), Err(IntegerInputError::BelowMinimum { minimum: 10 }));
    }

    #[test]
    fn parse_reports_range_for_huge_values() {
        assert_eq!(
            parse_integer("18446744073709551616", 1),
            Err(IntegerInputError::AboveMaximum { maximum: u64::MAX })
        );
        assert_eq!(parse_integer("18446744073709551615", 1), Ok(u64::MAX));
        assert_eq!(
            parse_integer("-999999999999999999999999999999999999999999", 1),
            Err(IntegerInputError::BelowMinimum { minimum: 1 })
        );
        assert_eq!(parse_integer("-0", 1), Err(IntegerInputError::BelowMinimum { minimum: 1 }));
        assert_eq!(parse_integer("-", 1), Err(IntegerInputError::NotAnInteger));
        assert_eq!(parse_integer("+-3", 1), Err(IntegerInputError::NotAnInteger));
    }

    #[test]
    fn prompt_integer_reprompts_until_valid() {
        let mut input = ScriptedInput::new(["abc", "0", "3"]);
        let mut out = Vec::new();

        let value = prompt_integer(&mut input, &mut out, "Qty: ", 1).unwrap();

        assert_eq!(value, 3);
        assert_eq!(
            transcript(out),
            "Qty: Please enter a valid integer.\n\
             Qty: 1 is the minimum value allowed.\n\
             Qty: "
        );
    }

    #[test]
    fn prompt_integer_reports_custom_minimum() {
        let mut input = ScriptedInput::new(["4", "5"]);
        let mut out = Vec::new();

        assert_eq!(prompt_integer(&mut input, &mut out, "> ", 5).unwrap(), 5);
        assert!(transcript(out).contains("Please enter a number greater than or equal to 5."));
    }

    #[test]
    fn prompt_integer_stops_at_end_of_input() {
        let mut input = ScriptedInput::new(["nope"]);
        let mut out = Vec::new();

        let err = prompt_integer(&mut input, &mut out, "> ", 1).unwrap_err();
        assert!(matches!(err, ShellError::InputClosed));
    }

    #[test]
    fn prompt_line_trims() {
        let mut input = ScriptedInput::new(["  Jasmine  "]);
        let mut out = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut out, "Name: ").unwrap(), "Jasmine");
        assert_eq!(transcript(out), "Name: ");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every value at or above the minimum is accepted verbatim.
            #[test]
            fn accepts_everything_at_or_above_minimum(minimum in 1u64..1_000, extra in 0u64..1_000_000) {
                let value = minimum + extra;
                prop_assert_eq!(parse_integer(&value.to_string(), minimum), Ok(value));
            }

            /// Property: anything below the minimum names the minimum.
            #[test]
            fn rejects_everything_below_minimum(minimum in 1u64..1_000, below in -1_000i64..0) {
                let value = i128::from(minimum) + i128::from(below);
                prop_assert_eq!(
                    parse_integer(&value.to_string(), minimum),
                    Err(IntegerInputError::BelowMinimum { minimum })
                );
            }
        }
    }
}
