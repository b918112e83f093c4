use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use plover::storage::DiskStorage;
use plover::Site;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Compiles the routes of a blog.
#[derive(Parser)]
#[command(name = "blog", version)]
struct Cli {
    /// The root directory of the site.
    #[arg(long, global = true, default_value = "demos/blog/site")]
    root: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Writes page data for every route, plus a route manifest.
    Build {
        /// Where to write the page data.
        #[arg(long, default_value = "demos/blog/public")]
        out: PathBuf,
    },

    /// Prints the route table.
    Routes,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "plover=info,blog=info",
        1 => "plover=debug,blog=debug",
        _ => "plover=trace,blog=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let site = Site::load(&cli.root)
        .with_context(|| format!("failed to load site at {}", cli.root.display()))?;

    match cli.command {
        Command::Build { out } => {
            let routes = site.build(&DiskStorage::new(out.clone()))?;
            info!(routes = routes.len(), out = %out.display(), "build finished");
        }
        Command::Routes => {
            let routes = site.compile_routes()?;
            for route in &routes {
                println!("{:<10} {}", route.template, route.path);
            }
        }
    }

    Ok(())
}
