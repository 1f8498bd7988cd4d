//! Bounded integer prompting.

use std::io::{self, BufRead, Write};

/// Prompts for an integer in `[min, max]`, re-prompting until one arrives.
///
/// Writes `"Please Enter {label} ({min}-{max}): "`, then reads one line per
/// attempt. Anything that does not parse as an integer in range draws
/// `"Invalid input. Please enter a number between {min} and {max}: "` and
/// another read. Malformed input is never surfaced as a failure.
///
/// # Errors
///
/// Fails only if the console itself does; end of input while prompting is
/// reported as [`io::ErrorKind::UnexpectedEof`].
pub fn prompt_axis<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    min: u8,
    max: u8,
) -> io::Result<u8>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Please Enter {} ({}-{}): ", label, min, max)?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while prompting",
            ));
        }

        match line.trim().parse::<u8>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => {
                write!(
                    output,
                    "Invalid input. Please enter a number between {} and {}: ",
                    min, max
                )?;
                output.flush()?;
            }
        }
    }
}
