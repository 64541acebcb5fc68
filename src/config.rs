use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::generate::{Generator, Summary};

/// Write a seeded file of `city;temperature` measurements.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "brc-gen", version)]
pub struct Config {
    /// Number of records to write
    pub count: u64,

    /// Output file, truncated if it already exists
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl Config {
    pub fn run(self) -> Result<Summary> {
        Generator::new().generate(self.count, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("brc-gen").chain(args.iter().copied()))
    }

    #[test]
    fn takes_two_positionals() {
        let config = parse(&["1000", "measurements.txt"]).unwrap();
        assert_eq!(config.count, 1000);
        assert_eq!(config.output, PathBuf::from("measurements.txt"));
    }

    #[test]
    fn path_is_taken_verbatim() {
        let config = parse(&["0", "some dir/out;file.txt"]).unwrap();
        assert_eq!(config.count, 0);
        assert_eq!(config.output, PathBuf::from("some dir/out;file.txt"));
    }

    #[test]
    fn path_may_start_with_a_hyphen() {
        let config = parse(&["3", "-out.txt"]).unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.output, PathBuf::from("-out.txt"));
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert!(parse(&["ten", "out.txt"]).is_err());
        assert!(parse(&["1e3", "out.txt"]).is_err());
    }

    #[test]
    fn rejects_negative_count() {
        assert!(parse(&["-5", "out.txt"]).is_err());
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["10"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(parse(&["10", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn run_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let config = Config {
            count: 4,
            output: output.clone(),
        };
        let summary = config.run().unwrap();
        assert_eq!(summary.written, 4);
        let text = std::fs::read_to_string(output).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
