//! CLI over a certificate CSV file: list, sort, filter, add.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use registry::certificate::{Certificate, Field};
use registry::collection::CertificateCollection;
use registry::logging;
use registry::store;

#[derive(Parser)]
#[command(
    name = "registry",
    version,
    about = "Manage stipend certificate records stored in a CSV file"
)]
struct Cli {
    /// Path to the certificate CSV file.
    #[arg(long, default_value = "data.csv")]
    file: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every record in collection order.
    List,
    /// Sort records by a field and print them.
    Sort {
        /// One of: number, date, full_name, stipend, destination.
        field: String,
        /// Sort in descending order.
        #[arg(long)]
        descending: bool,
        /// Persist the sorted order back to the file.
        #[arg(long)]
        write: bool,
    },
    /// Print records whose stipend strictly exceeds the threshold.
    Filter {
        #[arg(allow_negative_numbers = true)]
        min: f64,
    },
    /// Validate a new record, append it, and save.
    Add {
        #[arg(allow_negative_numbers = true)]
        number: i64,
        /// Issue date, YYYY-MM-DD.
        date: String,
        full_name: String,
        #[arg(allow_negative_numbers = true)]
        stipend: f64,
        destination: String,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List => cmd_list(&cli.file),
        Command::Sort {
            field,
            descending,
            write,
        } => cmd_sort(&cli.file, &field, descending, write),
        Command::Filter { min } => cmd_filter(&cli.file, min),
        Command::Add {
            number,
            date,
            full_name,
            stipend,
            destination,
        } => cmd_add(&cli.file, number, &date, &full_name, stipend, &destination),
    }
}

fn cmd_list(file: &Path) -> Result<()> {
    let collection = load(file)?;
    print_records(collection.iter());
    Ok(())
}

fn cmd_sort(file: &Path, field: &str, descending: bool, write: bool) -> Result<()> {
    let field: Field = field.parse()?;
    let mut collection = load(file)?;
    collection.sort_by_field(field, descending);
    print_records(collection.iter());
    if write {
        store::save(file, &collection).with_context(|| format!("save {}", file.display()))?;
        info!(path = %file.display(), "sorted order persisted");
    }
    Ok(())
}

fn cmd_filter(file: &Path, min: f64) -> Result<()> {
    let collection = load(file)?;
    print_records(collection.with_min_stipend(min));
    Ok(())
}

fn cmd_add(
    file: &Path,
    number: i64,
    date: &str,
    full_name: &str,
    stipend: f64,
    destination: &str,
) -> Result<()> {
    // An absent file starts an empty collection; anything else must load.
    let mut collection = if file.exists() {
        load(file)?
    } else {
        CertificateCollection::new()
    };
    let certificate = Certificate::new(number, date, full_name, stipend, destination)?;
    println!("{certificate}");
    collection.add(certificate);
    store::save(file, &collection).with_context(|| format!("save {}", file.display()))?;
    info!(records = collection.len(), path = %file.display(), "record added");
    Ok(())
}

fn load(file: &Path) -> Result<CertificateCollection> {
    store::load(file).with_context(|| format!("load {}", file.display()))
}

fn print_records<'a, I>(records: I)
where
    I: Iterator<Item = &'a Certificate>,
{
    for certificate in records {
        println!("{certificate}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_with_default_file() {
        let cli = Cli::parse_from(["registry", "list"]);
        assert_eq!(cli.file, PathBuf::from("data.csv"));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_sort_flags() {
        let cli = Cli::parse_from(["registry", "--file", "x.csv", "sort", "stipend", "--descending"]);
        assert_eq!(cli.file, PathBuf::from("x.csv"));
        match cli.command {
            Command::Sort {
                field,
                descending,
                write,
            } => {
                assert_eq!(field, "stipend");
                assert!(descending);
                assert!(!write);
            }
            _ => panic!("expected sort"),
        }
    }

    #[test]
    fn parse_add_accepts_negative_number() {
        // Negative values parse at the CLI and are rejected by validation.
        let cli = Cli::parse_from(["registry", "add", "-1", "2025-06-19", "Иванов", "100", "Банк"]);
        match cli.command {
            Command::Add { number, .. } => assert_eq!(number, -1),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn unknown_sort_field_is_reported() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("data.csv");
        std::fs::write(&path, "№,дата,ФИО студента,размер стипендии,куда выдается справка\n")
            .expect("write");
        let err = cmd_sort(&path, "salary", false, false).expect_err("unknown field");
        assert!(err.to_string().contains("unknown field 'salary'"));
    }
}
