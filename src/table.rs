//! The persisted CSV schema and the report-side table built from it.
//!
//! The runner writes rows verbatim (it never interprets the fields the
//! executables emit); the report side parses them into typed records and
//! stamps each row with the provenance of the file it came from.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    experiment::RawRow,
};

pub const CSV_HEADER: &str = "Matrix_Size,N_Threads,Thread,Time,Algorithm";

const COLUMNS: [&str; 5] = ["Matrix_Size", "N_Threads", "Thread", "Time", "Algorithm"];

/// One typed measurement read back from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub matrix_size: u32,
    pub n_threads: u32,
    pub thread: u32,
    /// Elapsed time in microseconds, as emitted by the executable.
    pub time_us: f64,
    pub algorithm: String,
}

/// A [`Record`] plus the columns the report derives: the source machine
/// and the timing converted to seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub machine: String,
    pub matrix_size: u32,
    pub n_threads: u32,
    pub thread: u32,
    pub time_us: f64,
    pub time_secs: f64,
    pub algorithm: String,
}

/// Writes the experiment table with the fixed header, one line per row,
/// in the order the rows were produced.
pub fn write_csv(path: &Path, rows: &[RawRow]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(io_err)?;
    writeln!(file, "{}", CSV_HEADER).map_err(io_err)?;
    for row in rows {
        for field in &row.fields {
            write!(file, "{},", field).map_err(io_err)?;
        }
        writeln!(file, "{}", row.algorithm).map_err(io_err)?;
    }
    Ok(())
}

/// Reads an experiment CSV back into typed records. The header and every
/// field are validated; the first offending line aborts the load with its
/// path and line number.
pub fn read_csv(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = contents.lines();

    let header = lines.next().unwrap_or("");
    let header_cols: Vec<&str> = header.split(',').map(str::trim).collect();
    if header_cols != COLUMNS {
        return Err(Error::HeaderMismatch {
            path: path.to_path_buf(),
            expected: CSV_HEADER.to_string(),
            found: header.to_string(),
        });
    }

    let schema_err = |line: usize, message: String| Error::Schema {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        let lineno = i + 2;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != COLUMNS.len() {
            return Err(schema_err(
                lineno,
                format!("expected {} fields, found {}", COLUMNS.len(), fields.len()),
            ));
        }

        let int = |idx: usize| -> Result<u32> {
            fields[idx].parse().map_err(|_| {
                schema_err(
                    lineno,
                    format!("{} is not an integer: {:?}", COLUMNS[idx], fields[idx]),
                )
            })
        };
        let time_us: f64 = fields[3].parse().map_err(|_| {
            schema_err(lineno, format!("Time is not numeric: {:?}", fields[3]))
        })?;

        records.push(Record {
            matrix_size: int(0)?,
            n_threads: int(1)?,
            thread: int(2)?,
            time_us,
            algorithm: fields[4].to_string(),
        });
    }

    Ok(records)
}

/// Derives the provenance label from a file name: everything before the
/// first `.`, with underscores turned into dots, so `aws_t2_micro.csv`
/// labels its rows `aws.t2.micro`.
pub fn machine_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let stem = name.split('.').next().unwrap_or(&name);
    stem.replace('_', ".")
}

/// Reads every input file and concatenates the rows in file order, each
/// stamped with its machine label. `time_secs` is left for
/// [`derive_time_seconds`].
pub fn load_and_merge(files: &[PathBuf]) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::new();
    for file in files {
        let machine = machine_label(file);
        for record in read_csv(file)? {
            rows.push(ReportRow {
                machine: machine.clone(),
                matrix_size: record.matrix_size,
                n_threads: record.n_threads,
                thread: record.thread,
                time_us: record.time_us,
                time_secs: 0.0,
                algorithm: record.algorithm,
            });
        }
    }
    Ok(rows)
}

/// Converts the raw microsecond column to seconds. Always recomputed from
/// `time_us`, so applying it twice changes nothing.
pub fn derive_time_seconds(rows: &mut [ReportRow]) {
    for row in rows {
        row.time_secs = row.time_us * 1e-6;
    }
}
