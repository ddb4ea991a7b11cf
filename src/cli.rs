use clap::Parser;
use depscout::config::ConfigOverrides;
use std::path::PathBuf;

/// List the dependencies of an npm package from its repository's package.json
#[derive(Parser, Debug)]
#[command(name = "depscout")]
#[command(version)]
#[command(about = "List the dependencies of an npm package from its repository's package.json", long_about = None)]
pub struct Args {
    /// Name of the package on the npm registry (e.g. chalk)
    pub package: Option<String>,

    /// Path to a config file (defaults to depscout.config.yml in the current directory, if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Branch to read package.json from; repeat to try several in order
    #[arg(short = 'b', long = "branch", value_name = "NAME")]
    pub branches: Vec<String>,

    /// Maximum number of attempts per network step
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Registry web host serving /package/<name> pages
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Raw file host serving /<owner>/<repo>/<branch>/package.json
    #[arg(long, value_name = "URL")]
    pub raw_content_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            registry_url: self.registry_url.clone(),
            raw_content_url: self.raw_content_url.clone(),
            branches: self.branches.clone(),
            timeout_secs: self.timeout,
            max_attempts: self.max_attempts,
        }
    }
}
