use cardpatch_core::PatchOutcome;
use clap::Parser;

mod cli;
mod paths;

fn main() {
    if let Err(error) = run() {
        eprintln!("cardpatch error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let stylesheet = paths::resolve_stylesheet(&cli.stylesheet)?;

    match cardpatch_core::patch_file(&stylesheet)? {
        PatchOutcome::Unchanged => {
            println!("[NO-OP] No changes needed: {}", stylesheet.display());
        }
        PatchOutcome::Patched { backup_path } => {
            println!("[OK] Patched: {}", stylesheet.display());
            println!("[OK] Backup : {}", backup_path.display());
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CARDPATCH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
