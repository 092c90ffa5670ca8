//! Interactive demo: swap the longest runs of equal elements between two
//! integer lists.
//!
//! Lists are read from the console; a blank entry generates one with the
//! `--len`/`--min`/`--max` parameters instead.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;

use chains::input::{generate_sequence, read_sequence};
use chains::logging;
use chains::run::{longest_run, swap_longest_runs};

#[derive(Parser)]
#[command(
    name = "chains",
    version,
    about = "Swap the longest runs of equal elements between two integer lists"
)]
struct Cli {
    /// Number of elements when a list is generated.
    #[arg(long, default_value_t = 10)]
    len: usize,
    /// Inclusive lower bound for generated values.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i64,
    /// Inclusive upper bound for generated values.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    max: i64,
}

fn main() {
    logging::init();
    if let Err(err) = run(&Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.len == 0 {
        bail!("--len must be > 0");
    }
    if cli.min > cli.max {
        bail!("--min must not exceed --max");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    let a = obtain_sequence(&mut reader, &mut out, "Enter list A (blank to generate): ", cli)?;
    let b = obtain_sequence(&mut reader, &mut out, "Enter list B (blank to generate): ", cli)?;

    let run_a = longest_run(&a);
    let run_b = longest_run(&b);
    debug!(?run_a, ?run_b, "longest runs located");

    println!("A: {a:?}");
    println!("B: {b:?}");
    println!("longest run in A: start {}, length {}", run_a.start, run_a.len);
    println!("longest run in B: start {}, length {}", run_b.start, run_b.len);

    let (swapped_a, swapped_b) = swap_longest_runs(&a, &b);
    println!("after swap:");
    println!("A: {swapped_a:?}");
    println!("B: {swapped_b:?}");

    Ok(())
}

/// Read a list from the console; a blank entry generates one instead.
fn obtain_sequence<R, W>(reader: &mut R, writer: &mut W, prompt: &str, cli: &Cli) -> Result<Vec<i64>>
where
    R: BufRead,
    W: Write,
{
    let seq = read_sequence(reader, writer, prompt).context("read sequence")?;
    if !seq.is_empty() {
        return Ok(seq);
    }
    let mut rng = rand::thread_rng();
    let generated = generate_sequence(&mut rng, cli.len, cli.min, cli.max);
    writeln!(writer, "generated: {generated:?}").context("write generated sequence")?;
    Ok(generated)
}
