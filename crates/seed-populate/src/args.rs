//! Common CLI argument definitions shared by all populators.

use clap::Args;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Number of company records to generate
    #[arg(long, env = "SEED_ROW_COUNT", default_value = "100")]
    pub row_count: u64,

    /// Number of rows per multi-row INSERT statement
    #[arg(long, env = "SEED_BATCH_SIZE", default_value = "100000")]
    pub batch_size: usize,

    /// Number of batches committed together in one transaction
    #[arg(long, env = "SEED_COMMIT_INTERVAL", default_value = "8")]
    pub commit_interval: usize,

    /// Number of parallel workers (defaults to the number of CPUs)
    #[arg(long, env = "SEED_WORKERS")]
    pub workers: Option<usize>,

    /// Random seed for reproducible field values (omit for fresh random data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Interval between progress line updates, in milliseconds
    #[arg(long, default_value = "1000")]
    pub progress_interval_ms: u64,

    /// Dry-run mode: plan partitions and generate samples without touching the database
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonPopulateArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();

        assert_eq!(cli.common.row_count, 100);
        assert_eq!(cli.common.batch_size, 100_000);
        assert_eq!(cli.common.commit_interval, 8);
        assert_eq!(cli.common.workers, None);
        assert_eq!(cli.common.seed, None);
        assert!(!cli.common.dry_run);
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::try_parse_from([
            "test",
            "--row-count",
            "250",
            "--batch-size",
            "100",
            "--workers",
            "4",
            "--seed",
            "7",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.common.row_count, 250);
        assert_eq!(cli.common.batch_size, 100);
        assert_eq!(cli.common.workers, Some(4));
        assert_eq!(cli.common.seed, Some(7));
        assert!(cli.common.dry_run);
    }
}
