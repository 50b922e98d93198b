use careers_scaffold::{intake, scaffold, ScaffoldError, SCRAPERS_ROOT};
use std::path::Path;
use tracing::error;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "info".into()),
        )
        .with(ErrorLayer::default())
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScaffoldError> {
    let request = intake::prompt_request()?;
    let summary = scaffold(&request, Path::new(SCRAPERS_ROOT))?;

    println!(
        "Scaffolded the {} scraper at {}",
        summary.identifiers.registry_key,
        summary.module_file.display()
    );
    if summary.newly_registered {
        println!("Registered it in {}", summary.registry_file.display());
    } else {
        println!("Already registered in {}", summary.registry_file.display());
    }

    Ok(())
}
