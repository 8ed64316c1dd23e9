#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod commands;
mod logging;

use clap::Parser;
use exportmap_core::Config;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exportmap")]
#[command(author, version, about = "Flatten package.json exports into subpath -> target maps", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Resolve a package.json exports field to a flat subpath -> target map
    Resolve {
        /// Path to package.json (defaults to ./package.json)
        manifest: Option<PathBuf>,

        /// Active conditions, replacing the defaults (node-addons,node,import,require,default)
        #[arg(long, env = "EXPORTMAP_CONDITIONS", value_delimiter = ',')]
        conditions: Vec<String>,

        /// Keep wildcard subpaths as declared instead of scanning the filesystem
        #[arg(long)]
        no_expand: bool,

        /// Directory wildcard targets are expanded against (defaults to the manifest's directory)
        #[arg(long, value_name = "PATH", conflicts_with = "no_expand")]
        root: Option<PathBuf>,

        /// Write the JSON map to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory
    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = Config::new(cwd.clone())
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(),
        Some(Commands::Resolve {
            manifest,
            conditions,
            no_expand,
            root,
            out,
        }) => {
            let span = tracing::info_span!("resolve", cmd = "resolve", cwd = %cwd.display());
            let _guard = span.enter();
            let args = commands::resolve::ResolveArgs {
                manifest,
                conditions,
                no_expand,
                root,
                out,
            };
            commands::resolve::run(&config, &args)
        }
    }
}
