//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Fetch a product catalog and write a category-grouped, price-sorted
/// JSON projection.
#[derive(Parser, Debug)]
#[command(name = "prodcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog URL to fetch
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Override the config file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    // === Logging flags ===
    /// Log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::parse_from(["prodcat"]);
        assert!(cli.url.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.compact);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_url_and_output() {
        let cli = Cli::parse_from([
            "prodcat",
            "https://example.com/products",
            "-o",
            "out.json",
            "--compact",
        ]);
        assert_eq!(cli.url.as_deref(), Some("https://example.com/products"));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(cli.compact);
    }
}
