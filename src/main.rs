use clap::Parser;

use walaoe::cli::Args;
use walaoe::{logging, ui};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Config problems are reported before the terminal is taken over
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    logging::init(args.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = ui::runtime::run(config, runtime.handle().clone());
    if let Err(err) = &result {
        tracing::error!(error = %err, "Exited with error");
    }
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    result
}
