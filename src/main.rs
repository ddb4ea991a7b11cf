mod cli;

use cli::Args;
use depscout::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use depscout::adapters::outbound::formatters::DependencyListFormatter;
use depscout::adapters::outbound::network::{HttpTransport, NpmRegistryClient, RawManifestClient};
use depscout::application::dto::LookupRequest;
use depscout::application::use_cases::{LookupDependenciesUseCase, LookupSettings};
use depscout::config::resolve_config;
use depscout::shared::error::ExitCode;
use depscout::shared::logger::init_cli_logger;
use depscout::shared::Result;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command-line arguments (clap exits with code 2 on its own errors)
    let args = Args::parse_args();
    init_cli_logger(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let color = !args.no_color;
    let working_dir = std::env::current_dir()?;
    let config = resolve_config(args.config.as_deref(), &working_dir, args.overrides())?;
    tracing::debug!(?config, "effective configuration");

    // Create adapters (Dependency Injection)
    let transport = HttpTransport::new(&config)?;
    let resolver = NpmRegistryClient::new(transport.clone(), config.clone());
    let fetcher = RawManifestClient::new(transport, config.clone());
    let formatter = DependencyListFormatter::new(config.registry_url.clone(), color);
    let presenter = StdoutPresenter::new();
    let progress_reporter = StderrProgressReporter::new(color);

    // Create use case with injected dependencies
    let use_case = LookupDependenciesUseCase::new(
        resolver,
        fetcher,
        formatter,
        presenter,
        progress_reporter,
        LookupSettings::from_config(&config),
    );

    let outcome = use_case.execute(LookupRequest::new(args.package)).await?;
    tracing::debug!(?outcome, "lookup finished");

    Ok(())
}
