//! Reading and writing of [DSV](https://en.wikipedia.org/wiki/Delimiter-separated_values)
//! (delimiter separated values) files.
//!
//! The first record of an input file is the table header; every further
//! record is a data row and must have as many fields as the header.
//! Fields are kept as opaque strings, no value parsing is attempted.
//! Double quotes are accepted for field escaping.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::{
    error::Error,
    table::{Row, Table},
};

/// Field delimiter used when none is specified.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Create a csv reader for the given delimiter.
fn dsv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<R>
where
    R: Read,
{
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .double_quote(true)
        .from_reader(reader)
}

/// Read a table from an arbitrary [reader][Read].
///
/// The reader is configured as flexible so that records of uneven width
/// reach the arity check in [Table::new] instead of failing inside the
/// csv layer without a row number.
pub fn read_table<R>(reader: R, delimiter: u8) -> Result<Table, Error>
where
    R: Read,
{
    let mut records = dsv_reader(reader, delimiter).into_records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(Error::EmptyTable),
    };
    let attributes: Vec<String> = header.iter().map(str::to_owned).collect();

    let mut rows: Vec<Row> = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    let table = Table::new(attributes, rows)?;
    log::info!(
        "read table with {} attributes and {} rows",
        table.arity(),
        table.rows().len()
    );

    Ok(table)
}

/// Read a table from a file, attaching the filename to any I/O failure.
pub fn read_table_from_file(path: &Path, delimiter: u8) -> Result<Table, Error> {
    let file = File::open(path).map_err(|error| Error::IoReading {
        error,
        filename: path.to_path_buf(),
    })?;

    read_table(BufReader::new(file), delimiter)
}

/// Write a header and result rows as a delimited file.
pub fn write_rows<W>(
    writer: W,
    delimiter: u8,
    attributes: &[String],
    rows: &[Row],
) -> Result<(), Error>
where
    W: Write,
{
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .double_quote(true)
        .from_writer(writer);

    writer.write_record(attributes)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    log::info!("wrote {} rows", rows.len());

    Ok(())
}
