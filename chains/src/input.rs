//! Console and random sequence input.
//!
//! Reading is generic over `BufRead`/`Write` so the re-prompt loop is
//! testable without a terminal. Malformed console input is recovered locally
//! by asking again; it never surfaces as an error.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::debug;

/// Prompt for whitespace-separated integers, re-prompting until a line parses.
///
/// An empty line yields an empty sequence (callers treat that as a request to
/// generate one), as does end of input. Only I/O failures are returned.
pub fn read_sequence<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<Vec<i64>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Vec::new());
        }
        match parse_sequence(&line) {
            Ok(seq) => return Ok(seq),
            Err(token) => {
                debug!(token, "rejected console input");
                writeln!(
                    writer,
                    "'{token}' is not a whole number; enter integers separated by spaces"
                )?;
            }
        }
    }
}

/// Parse whitespace-separated integers. Returns the first offending token.
fn parse_sequence(line: &str) -> Result<Vec<i64>, String> {
    line.split_whitespace()
        .map(|token| token.parse::<i64>().map_err(|_| token.to_string()))
        .collect()
}

/// Generate `len` integers uniformly sampled from `min..=max`.
///
/// Callers must ensure `min <= max`.
pub fn generate_sequence<R: Rng>(rng: &mut R, len: usize, min: i64, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(min..=max)).collect()
}
