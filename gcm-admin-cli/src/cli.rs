use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "gcm-admin-cli")]
#[command(about = "List or delete custom metric descriptors in Google Cloud Monitoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        env = "GOOGLE_CLOUD_PROJECT",
        default_value = "",
        help = "Google Cloud Project ID"
    )]
    pub project: String,

    #[arg(
        long,
        help = "Metric Descriptor name to delete (lists custom metrics when omitted)"
    )]
    pub md: Option<String>,

    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Enable short output (--short=false prints kind, value type, unit and description)"
    )]
    pub short: bool,

    #[arg(long, value_parser = ["json"], help = "Output format: json (default: plain)")]
    pub output: Option<String>,
}

/// Long flags that may also be written with a single dash (`-project demo`, `-short=false`).
const SINGLE_DASH_FLAGS: [&str; 4] = ["project", "md", "short", "output"];

/// Rewrites `-flag` and `-flag=value` into `--flag` / `--flag=value` for the known long flags.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(s) if is_single_dash_flag(s) => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            SINGLE_DASH_FLAGS.contains(&name)
        }
        _ => false,
    }
}

impl Cli {
    /// Parses the process arguments, accepting both `-flag` and `--flag`.
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn into_config(self) -> Config {
        let output = match self.output.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Config {
            project: self.project,
            metric_name: self.md.filter(|name| !name.is_empty()),
            short: self.short,
            output,
        }
    }
}
