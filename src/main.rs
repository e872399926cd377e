// Fri Oct 16 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resolution_patcher::{
    config::{Config, LibraryLimit, OutputPolicy},
    output::{self, RunReport},
    ui::Banner,
    utils::logging,
    workflow::Workflow,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Removes hardcoded resolution limits from the renderer library and game executable", long_about = None)]
struct Args {
    /// Directory holding the input files
    #[arg(short = 'C', long = "dir")]
    dir: Option<PathBuf>,

    /// JSON config replacing the built-in targets
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    library: Option<PathBuf>,

    #[arg(long)]
    executable: Option<PathBuf>,

    #[arg(long)]
    skip_library: bool,

    #[arg(long)]
    skip_executable: bool,

    /// Patch the library limits to 1000000 instead of 3840x2160
    #[arg(long)]
    unlimited: bool,

    /// Overwrite the library, keeping a _original backup
    #[arg(long)]
    in_place: bool,

    #[arg(long)]
    dry_run: bool,

    /// Write a JSON report of every match
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long)]
    sequential: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    no_banner: bool,

    #[arg(long)]
    no_progress: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose, args.quiet);

    if !args.no_banner {
        Banner::new("Resolution Patcher")
            .with_version(env!("CARGO_PKG_VERSION"))
            .print();
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} Error: {:#}", "[!]".red(), e);
            eprintln!("\n{}", "Patching failed!".red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let config = build_config(args)?;
    config.validate().context("Invalid configuration")?;

    let mut workflow = Workflow::new(config);

    if !args.no_progress && !args.quiet {
        let pb = ProgressBar::new(0);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"));
        pb.set_message("Patching...");
        workflow = workflow.with_progress(pb);
    }

    let summary = workflow.run(args.dry_run)?;

    output::print_summary(&summary);

    if let Some(ref path) = args.report {
        RunReport::from(&summary)
            .save(path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        println!("{} Report saved to: {}", "[+]".green(), path.display());
    }

    Ok(summary.success())
}

fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match args.config {
        Some(ref path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(ref dir) = args.dir {
        config.working_dir = dir.clone();
    }

    if args.skip_library {
        config.library = None;
    }
    if args.skip_executable {
        config.executable = None;
    }

    if let Some(library) = config.library.as_mut() {
        if let Some(ref path) = args.library {
            library.path = path.clone();
        }
        if args.unlimited {
            library.limit = LibraryLimit::Unlimited;
        }
        if args.in_place {
            library.output = OutputPolicy::InPlace { backup: true };
        }
    }

    if let Some(exe) = config.executable.as_mut() {
        if let Some(ref path) = args.executable {
            exe.path = path.clone();
        }
    }

    if args.sequential {
        config.parallel = false;
    }

    Ok(config)
}
