// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the API client and hand it to
//   the menu.
// - Transport and cookie failures exit with status 1; everything else,
//   partial decodes included, exits 0.

use std::process::ExitCode;

use storefront_cli::{
    api::ApiClient,
    config::StorefrontConfig,
    ui::{main_menu, print_outcome, Console},
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Storefront and product come from `STOREFRONT_*` variables, see
    // `config::StorefrontConfig::from_env`.
    let config = StorefrontConfig::from_env();
    let api = ApiClient::new(&config.request)?;

    let outcome = main_menu(&api, &config, &mut Console)?;
    print_outcome(&outcome)?;
    Ok(outcome.exit_code())
}
