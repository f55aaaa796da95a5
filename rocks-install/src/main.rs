mod commands;

use clap::{Parser, Subcommand};
use commands::TargetArgs;
use commands::install::{InstallArgs, handle_install};
use commands::launcher::handle_launcher;
use commands::verify::handle_verify;

#[derive(Parser)]
#[command(
    name = "rocks-install",
    version,
    about = "Install the rocks CLI with its ticker data and launcher"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy data files and binary into the install root and write the launcher
    Install(InstallArgs),

    /// Check an install root against the layout an install would produce
    Verify {
        #[command(flatten)]
        target: TargetArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the launcher that would be generated, without writing anything
    Launcher {
        #[command(flatten)]
        target: TargetArgs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Install(args) => handle_install(&args),
        Commands::Verify { target, json } => handle_verify(&target, json),
        Commands::Launcher { target } => handle_launcher(&target),
    };

    if let Err(e) = result {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
