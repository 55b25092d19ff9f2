/*!
  Binary for the CLI of reljoin: rjn
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod cli;
pub mod error;

use std::fs::File;
use std::time::Instant;

use clap::Parser;
use cli::{CliApp, Operation};
use colored::Colorize;
use error::CliError;
use reljoin::{
    display::{render_rows, render_table},
    io::dsv,
    operations::{cartesian_attributes, cartesian_product, left_outer_join, natural_join},
    schema::JoinSchema,
    table::Table,
};

fn print_finished_message(rows: usize, elapsed_ms: u128, exported: Option<&std::path::Path>) {
    println!(
        "Computed {} result rows in {}{}.",
        rows.to_string().green().bold(),
        elapsed_ms.to_string().green().bold(),
        "ms".green().bold(),
    );

    if let Some(path) = exported {
        println!("Exported result to {}.", path.display());
    }
}

fn load_table(path: &std::path::Path, heading: &str, delimiter: u8) -> Result<Table, CliError> {
    log::info!("loading {heading} from {path:?}");
    let table = dsv::read_table_from_file(path, delimiter)?;

    println!("------ {heading} ------");
    println!("{}", render_table(&table));

    Ok(table)
}

fn run(cli: CliApp) -> Result<(), CliError> {
    let delimiter = u8::try_from(cli.delimiter).map_err(|_| CliError::InvalidDelimiter {
        delimiter: cli.delimiter,
    })?;

    if let Some(path) = &cli.export.file {
        if path.exists() && !cli.export.overwrite {
            return Err(reljoin::Error::ExportExists {
                filename: path.clone(),
            }
            .into());
        }
    }

    let table_a = load_table(&cli.table_a, "Table A", delimiter)?;
    let table_b = load_table(&cli.table_b, "Table B", delimiter)?;

    let schema = JoinSchema::reconcile(&table_a, &table_b);
    log::debug!(
        "{} shared attributes, {} appended",
        schema.shared().len(),
        schema.appended().len()
    );

    let started = Instant::now();
    let (heading, attributes, rows) = match cli.operation {
        Operation::Cartesian => (
            "CARTESIAN PRODUCT",
            cartesian_attributes(&table_a, &table_b),
            cartesian_product(&table_a, &table_b),
        ),
        Operation::Natural => (
            "NATURAL JOIN",
            schema.output_attributes(&table_a),
            natural_join(&table_a, &table_b, &schema),
        ),
        Operation::Outer => (
            "LEFT OUTER JOIN",
            schema.output_attributes(&table_a),
            left_outer_join(&table_a, &table_b, &schema, &cli.placeholder),
        ),
    };
    let elapsed = started.elapsed();

    println!("------ {heading} ------");
    println!("{}", render_rows(&attributes, &rows));

    if let Some(path) = &cli.export.file {
        log::info!("exporting result to {path:?}");
        let file = File::create(path)?;
        dsv::write_rows(file, delimiter, &attributes, &rows)?;
    }

    print_finished_message(rows.len(), elapsed.as_millis(), cli.export.file.as_deref());

    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Table files: {:?}, {:?}", cli.table_a, cli.table_b);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
