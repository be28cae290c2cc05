// Numbered line-based menu. Reads from any `BufRead` and writes to any
// `Write` so the same code drives stdin/stdout and in-memory test buffers.

use crate::error::ConsoleError;
use std::io::{BufRead, Write};

pub const INVALID_CHOICE: &str = "Invalid choice, try again.";

/// Show `title` and the numbered `options`, then read lines until one is a
/// valid 1-based index. Returns `ConsoleError::Aborted` on end of input.
pub fn prompt_menu<R, W, S>(
    input: &mut R,
    output: &mut W,
    title: &str,
    options: &[S],
) -> Result<usize, ConsoleError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    writeln!(output, "\n{title}")?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, option.as_ref())?;
    }

    // Raw bytes: a line that is not UTF-8 is an invalid choice, not an I/O error.
    let mut line = Vec::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::Aborted);
        }
        if let Some(choice) = parse_choice(&String::from_utf8_lossy(&line), options.len()) {
            return Ok(choice);
        }
        writeln!(output, "{INVALID_CHOICE}")?;
    }
}

/// Plain ASCII digits only: no sign, no whitespace inside, within `1..=len`.
fn parse_choice(raw: &str, len: usize) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=len).contains(choice))
}
