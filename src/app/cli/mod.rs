//! CLI Adapter.

mod generate;
mod list;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SITEFORGE_LOG";

#[derive(Parser)]
#[command(name = "siteforge")]
#[command(version)]
#[command(
    about = "Compose a web project from a base template, integrations, features, and a site analysis",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (overridden by SITEFORGE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a project from a JSON or YAML config
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// List catalog entries
    #[clap(visible_alias = "ls")]
    List {
        /// Section to list (templates, integrations, features); all when omitted
        section: Option<list::SectionArg>,
        /// Show details for one entry (e.g. payments/stripe, feature/blog, template/nextjs)
        #[arg(long, conflicts_with = "section")]
        detail: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::List { section, detail } => list::run_list(section, detail),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) -> Result<(), AppError> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::config_error(format!("failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::parse_from([
            "siteforge",
            "-v",
            "generate",
            "site.json",
            "--out",
            "build",
            "--force",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.config.to_str(), Some("site.json"));
                assert_eq!(args.out.as_deref().and_then(|p| p.to_str()), Some("build"));
                assert!(args.force);
                assert!(!args.json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn list_detail_conflicts_with_section() {
        let result =
            Cli::try_parse_from(["siteforge", "list", "features", "--detail", "feature/blog"]);
        assert!(result.is_err());
    }
}
