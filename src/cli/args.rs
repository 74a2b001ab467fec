//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AdultFilter, Config};

/// Bing image search bulk downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "bingrab",
    version,
    about = "Bulk download images from Bing image search",
    long_about = "Scrapes the Bing image search results endpoint, extracts direct image URLs,\n\
                  and downloads up to a limit of validated images into a per-query directory."
)]
pub struct Args {
    /// The search query.
    #[arg(required_unless_present = "config")]
    pub query: Option<String>,

    /// Maximum number of images to download.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Base directory to save images in (images land in <dir>/<query>/).
    #[arg(short = 'd', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Turn off the adult content filter.
    #[arg(short = 'a', long)]
    pub adult_filter_off: bool,

    /// Delete and recreate the image directory before downloading.
    #[arg(short = 'F', long)]
    pub force_replace: bool,

    /// Per-request timeout in seconds.
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Style filter shorthand (line, linedrawing, photo, clipart, gif,
    /// animatedgif, transparent). Unrecognized values apply no filter.
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// URL substrings to exclude from results.
    #[arg(short = 'b', long = "bad-sites", num_args = 0..)]
    pub bad_sites: Vec<String>,

    /// Base name for downloaded files.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Maximum concurrent image downloads (1 = strictly sequential).
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print detailed progress information.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(query) = self.query {
            config.search.query = query;
        }

        if let Some(limit) = self.limit {
            config.search.limit = limit;
        }

        if self.adult_filter_off {
            config.search.adult_filter = AdultFilter::Off;
        }

        if let Some(filter) = self.filter {
            config.search.style = Some(filter);
        }

        if !self.bad_sites.is_empty() {
            config.search.bad_sites = self.bad_sites;
        }

        if let Some(dir) = self.output_dir {
            config.download.output_dir = dir;
        }

        if let Some(name) = self.name {
            config.download.image_name = name;
        }

        if let Some(timeout) = self.timeout {
            config.download.timeout_seconds = timeout;
        }

        if let Some(concurrency) = self.concurrency {
            config.download.concurrency = concurrency;
        }

        if self.force_replace {
            config.download.force_replace = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_config() {
        let args = Args::parse_from([
            "bingrab", "cats", "-l", "10", "-a", "-f", "photo", "-b", "shutterstock", "-n",
            "cat", "-t", "30",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.search.query, "cats");
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.search.adult_filter, AdultFilter::Off);
        assert_eq!(config.search.style.as_deref(), Some("photo"));
        assert_eq!(config.search.bad_sites, vec!["shutterstock".to_string()]);
        assert_eq!(config.download.image_name, "cat");
        assert_eq!(config.download.timeout_seconds, 30);
    }

    #[test]
    fn test_unset_args_keep_defaults() {
        let args = Args::parse_from(["bingrab", "cats"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.search.limit, 100);
        assert_eq!(config.search.adult_filter, AdultFilter::On);
        assert_eq!(config.download.image_name, "Image");
        assert!(!config.download.force_replace);
    }

    #[test]
    fn test_query_required_without_config() {
        assert!(Args::try_parse_from(["bingrab"]).is_err());
        assert!(Args::try_parse_from(["bingrab", "-c", "config.toml"]).is_ok());
    }
}
