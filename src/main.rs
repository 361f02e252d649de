// ABOUTME: Main entry point for the publish-slides program.
// ABOUTME: Writes the slides manifest, then commits and pushes the working tree.

use clap::Parser;
use slide_manifest::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory scanned for slide files
    #[arg(long)]
    slides_dir: Option<PathBuf>,

    /// Git remote to push to
    #[arg(long)]
    remote: Option<String>,

    /// Branch to push to
    #[arg(long)]
    branch: Option<String>,

    /// Write the manifest but do not commit or push
    #[arg(long)]
    skip_publish: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    if let Some(dir) = &cli.slides_dir {
        config.slides_dir = dir.clone();
    }
    if let Some(remote) = &cli.remote {
        config.remote = remote.clone();
    }
    if let Some(branch) = &cli.branch {
        config.branch = branch.clone();
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = load_config(cli)?;

    println!("Scanning for slide files in {}...", config.slides_dir.display());
    let generated = slide_manifest::generate_manifest(&config)?;

    for name in &generated.manifest.files {
        println!("Found: {}", name);
    }
    println!("Found {} slide files", generated.manifest.len());

    println!("Generated {}:", generated.path.display());
    println!("{}", generated.content);

    if cli.skip_publish {
        println!("Skipping publish.");
        return Ok(0);
    }

    println!("Committing and pushing changes...");
    let report = slide_manifest::publish(&config, &chrono::Local::now());
    if report.all_succeeded() {
        println!("Done!");
    }
    Ok(report.exit_code())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
