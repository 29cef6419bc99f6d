//! Drives the sweep of external benchmark invocations.
//!
//! The external executables do all the actual work (and all the
//! threading); this module only spawns them, checks that their stdout
//! honors the contract (one comma-separated line per thread, numeric
//! timing in the last field) and stamps each line with the algorithm
//! label of the executable that produced it.

use std::{
    io::{self, Write},
    process,
};

use crate::{
    config::{Config, Executable},
    error::{Error, Result},
};

/// One stdout line from an external executable. The leading fields are
/// passed through unparsed; only the final timing field is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub fields: Vec<String>,
    pub algorithm: String,
}

/// Runs every configured executable once for the given configuration and
/// collects their output rows, in executable order.
///
/// Any spawn failure, abnormal exit, wrong line count or non-numeric
/// timing field aborts the whole sweep; there is no retry and no salvage
/// of partial output.
pub fn run_single(
    executables: &[Executable],
    matrix_size: u32,
    threads: u32,
    seed: u64,
) -> Result<Vec<RawRow>> {
    let mut rows = Vec::with_capacity(executables.len() * threads as usize);

    for exe in executables {
        let output = process::Command::new(&exe.program)
            .arg(matrix_size.to_string())
            .arg(threads.to_string())
            .arg(seed.to_string())
            .output()
            .map_err(|source| Error::Spawn {
                program: exe.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ExitFailure {
                program: exe.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut emitted = 0;
        for line in stdout.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<String> = line.split(',').map(|f| f.trim().to_string()).collect();
            let last_is_numeric = fields
                .last()
                .map(|f| f.parse::<f64>().is_ok())
                .unwrap_or(false);
            if !last_is_numeric {
                return Err(Error::MalformedOutput {
                    program: exe.program.clone(),
                    line: line.to_string(),
                });
            }

            rows.push(RawRow {
                fields,
                algorithm: exe.algorithm.clone(),
            });
            emitted += 1;
        }

        if emitted != threads as usize {
            return Err(Error::LineCountMismatch {
                program: exe.program.clone(),
                expected: threads as usize,
                got: emitted,
            });
        }
    }

    Ok(rows)
}

/// Runs the full sweep: sizes, then thread counts, then repetitions, with
/// each repetition invoking every executable once. Row order is the
/// execution order, so repeated sweeps with deterministic executables
/// produce identical tables.
///
/// Progress is a carriage-return counter on stderr, one line per
/// `(size, threads)` combination.
pub fn run_all(config: &Config) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();

    for &matrix_size in &config.matrix_sizes {
        for &threads in &config.thread_counts {
            for rep in 1..=config.repetitions {
                eprint!(
                    "\rSize: {}, {} threads: {}/{}",
                    matrix_size, threads, rep, config.repetitions
                );
                let _ = io::stderr().flush();

                rows.extend(run_single(
                    &config.executables,
                    matrix_size,
                    threads,
                    config.seed,
                )?);
            }
            eprintln!();
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{fs, os::unix::fs::PermissionsExt, path::Path};

    /// Writes a shell script into `dir` and returns it as an executable
    /// with the given algorithm label.
    fn fake_exe(dir: &Path, name: &str, script: &str) -> Executable {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Executable {
            program: path,
            algorithm: name.to_string(),
        }
    }

    /// Emits `$2` well-formed lines, mimicking the real binaries.
    const WELL_BEHAVED: &str = "i=0\n\
        while [ \"$i\" -lt \"$2\" ]; do\n\
        \techo \"$1,$2,$i,1500.5\"\n\
        \ti=$((i+1))\n\
        done";

    #[test]
    fn single_run_yields_threads_rows_per_executable() {
        let dir = tempfile::tempdir().unwrap();
        let exes = vec![
            fake_exe(dir.path(), "mm-a", WELL_BEHAVED),
            fake_exe(dir.path(), "mm-b", WELL_BEHAVED),
        ];

        let rows = run_single(&exes, 400, 4, 0).unwrap();
        assert_eq!(rows.len(), 2 * 4);

        // first executable's rows come first, each stamped with its label
        assert!(rows[..4].iter().all(|r| r.algorithm == "mm-a"));
        assert!(rows[4..].iter().all(|r| r.algorithm == "mm-b"));
        assert_eq!(rows[0].fields, vec!["400", "4", "0", "1500.5"]);
        assert_eq!(rows[3].fields[2], "3");
    }

    #[test]
    fn sweep_row_count_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            matrix_sizes: vec![100, 200],
            thread_counts: vec![2, 3],
            repetitions: 2,
            seed: 0,
            executables: vec![
                fake_exe(dir.path(), "mm-a", WELL_BEHAVED),
                fake_exe(dir.path(), "mm-b", WELL_BEHAVED),
            ],
        };

        let rows = run_all(&config).unwrap();
        // per (size, threads): reps * 2 executables * threads rows
        let expected = 2 * (2 * 2 * 2 + 2 * 2 * 3);
        assert_eq!(rows.len(), expected);

        // outer loop over sizes: every size-100 row precedes size-200 rows
        let first_200 = rows.iter().position(|r| r.fields[0] == "200").unwrap();
        assert!(rows[..first_200].iter().all(|r| r.fields[0] == "100"));
        assert!(rows[first_200..].iter().all(|r| r.fields[0] == "200"));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let exes = vec![Executable {
            program: "/nonexistent/mm".into(),
            algorithm: "none".into(),
        }];
        match run_single(&exes, 200, 2, 0) {
            Err(Error::Spawn { .. }) => {}
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[test]
    fn abnormal_exit_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let exes = vec![fake_exe(dir.path(), "mm-bad", "echo boom >&2\nexit 3")];
        match run_single(&exes, 200, 2, 0) {
            Err(Error::ExitFailure { stderr, .. }) => assert_eq!(stderr, "boom"),
            other => panic!("expected exit failure, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_timing_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let exes = vec![fake_exe(dir.path(), "mm-text", "echo \"$1,$2,0,fast\"")];
        match run_single(&exes, 200, 1, 0) {
            Err(Error::MalformedOutput { line, .. }) => assert!(line.ends_with("fast")),
            other => panic!("expected malformed output, got {other:?}"),
        }
    }

    #[test]
    fn wrong_line_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let exes = vec![fake_exe(dir.path(), "mm-short", "echo \"$1,$2,0,10.0\"")];
        match run_single(&exes, 200, 2, 0) {
            Err(Error::LineCountMismatch { expected, got, .. }) => {
                assert_eq!((expected, got), (2, 1));
            }
            other => panic!("expected line count mismatch, got {other:?}"),
        }
    }
}
