use std::path::PathBuf;

use clap::Parser;

/// Select a per-event-type random subset of mutants for testing.
///
/// Loads a CSV file, draws up to `--num-samples` rows for every distinct
/// value in the grouping column, and writes the combined subset to
/// `--output-dir-path/--output-file-name`.
#[derive(Debug, Parser)]
#[command(name = "mutant-sampler", version)]
pub struct Cli {
    /// Path to the input CSV file.
    #[arg(long, value_name = "PATH")]
    pub input_file_path: PathBuf,

    /// Directory the output file is written to, created if missing.
    #[arg(long, value_name = "DIR")]
    pub output_dir_path: PathBuf,

    /// Name of the output file.
    #[arg(long, value_name = "NAME")]
    pub output_file_name: String,

    /// Number of rows to sample from each group.
    #[arg(long, value_name = "N")]
    pub num_samples: usize,

    /// Column whose values define the groups.
    #[arg(long, value_name = "COLUMN", default_value = "Type")]
    pub group_column: String,

    /// Sort the sampled rows by this column before saving.
    #[arg(long, value_name = "COLUMN")]
    pub sort_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "mutant-sampler",
            "--input-file-path",
            "mutants.csv",
            "--output-dir-path",
            "out",
            "--output-file-name",
            "subset.csv",
            "--num-samples",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.input_file_path, PathBuf::from("mutants.csv"));
        assert_eq!(cli.output_dir_path, PathBuf::from("out"));
        assert_eq!(cli.output_file_name, "subset.csv");
        assert_eq!(cli.num_samples, 5);
        assert_eq!(cli.group_column, "Type");
        assert_eq!(cli.sort_by, None);
    }

    #[test]
    fn missing_required_flag_is_rejected() {
        let result = Cli::try_parse_from([
            "mutant-sampler",
            "--input-file-path",
            "mutants.csv",
            "--output-dir-path",
            "out",
            "--output-file-name",
            "subset.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_sample_count_is_rejected() {
        let result = Cli::try_parse_from([
            "mutant-sampler",
            "--input-file-path",
            "mutants.csv",
            "--output-dir-path",
            "out",
            "--output-file-name",
            "subset.csv",
            "--num-samples",
            "-3",
        ]);
        assert!(result.is_err());
    }
}
