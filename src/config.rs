use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Error, Result};

/// One external benchmark executable and the algorithm label stamped onto
/// every row it produces.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Executable {
    pub program: PathBuf,
    pub algorithm: String,
}

#[derive(Default, Deserialize)]
struct ConfigOptional {
    matrix_sizes: Option<Vec<u32>>,
    thread_counts: Option<Vec<u32>>,
    repetitions: Option<u32>,
    seed: Option<u64>,
    executables: Option<Vec<Executable>>,
}

/// Sweep parameters for the experiment runner. Every field can be
/// overridden from a TOML file; anything left out keeps the default sweep
/// (10 sizes x 10 thread counts x 30 repetitions over two executables).
#[derive(Debug, Clone)]
pub struct Config {
    pub matrix_sizes: Vec<u32>,
    pub thread_counts: Vec<u32>,
    pub repetitions: u32,
    pub seed: u64,
    pub executables: Vec<Executable>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_optional(Default::default())
    }
}

impl Config {
    fn from_optional(optional: ConfigOptional) -> Self {
        Config {
            matrix_sizes: optional
                .matrix_sizes
                .unwrap_or_else(|| (200..=2000).step_by(200).collect()),
            thread_counts: optional
                .thread_counts
                .unwrap_or_else(|| (2..=20).step_by(2).collect()),
            repetitions: optional.repetitions.unwrap_or(30),
            seed: optional.seed.unwrap_or(0),
            executables: optional.executables.unwrap_or_else(|| {
                vec![
                    Executable {
                        program: PathBuf::from("./MM1c"),
                        algorithm: "row-column".into(),
                    },
                    Executable {
                        program: PathBuf::from("./MM1r"),
                        algorithm: "row-row".into(),
                    },
                ]
            }),
        }
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let contents = fs::read_to_string(file).map_err(|source| Error::Config {
            path: file.to_path_buf(),
            source,
        })?;
        let optional = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: file.to_path_buf(),
            source,
        })?;
        Ok(Self::from_optional(optional))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn default_sweep_dimensions() {
        let config = Config::default();
        assert_eq!(config.matrix_sizes.first(), Some(&200));
        assert_eq!(config.matrix_sizes.last(), Some(&2000));
        assert_eq!(config.matrix_sizes.len(), 10);
        assert_eq!(config.thread_counts.first(), Some(&2));
        assert_eq!(config.thread_counts.last(), Some(&20));
        assert_eq!(config.thread_counts.len(), 10);
        assert_eq!(config.repetitions, 30);
        assert_eq!(config.seed, 0);
        assert_eq!(config.executables.len(), 2);
        assert_eq!(config.executables[0].algorithm, "row-column");
        assert_eq!(config.executables[1].algorithm, "row-row");
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "matrix_sizes = [100, 300]").unwrap();
        writeln!(f, "repetitions = 3").unwrap();
        drop(f);

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.matrix_sizes, vec![100, 300]);
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.thread_counts.len(), 10);
        assert_eq!(config.executables.len(), 2);
    }

    #[test]
    fn executables_overridable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.toml");
        std::fs::write(
            &path,
            "[[executables]]\nprogram = \"./mm\"\nalgorithm = \"blocked\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(
            config.executables,
            vec![Executable {
                program: PathBuf::from("./mm"),
                algorithm: "blocked".into(),
            }]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::from_file(Path::new("/nonexistent/sweep.toml")).is_err());
    }
}
