use clap::Parser;

#[derive(Parser)]
#[command(name = "scindex")]
#[command(about = "Semantic source-code indexer for Go", long_about = None)]
struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    verbose: bool,

    /// Abort on the first degrading error instead of recording and
    /// continuing
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let summary = scindex_cli::run(cli.strict).map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "indexed {} documents, {} occurrences, {} symbols",
        summary.documents, summary.occurrences, summary.symbols
    );
    for error in &summary.errors {
        println!("  warning: {error}");
    }

    Ok(())
}
