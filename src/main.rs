use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use product_catalog::api::{CatalogApi, HttpCatalogClient};
use product_catalog::args::Cli;
use product_catalog::config::Config;
use product_catalog::logging::init_tracing;
use product_catalog::ui::app::App;
use product_catalog::ui::{fetch, headless, runtime};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::read(path)?,
        None => Config::load()?,
    }
    .with_base_url(cli.base_url.clone())?;

    let client =
        HttpCatalogClient::new(&config.api).context("Failed to build the HTTP client")?;
    let source = client.base_url().to_string();
    let api: Arc<dyn CatalogApi> = Arc::new(client);
    let route = cli.route();
    tracing::info!(base_url = %source, ?route, plain = cli.plain, "starting");

    if cli.plain {
        for line in headless::render_once(api, route).await {
            println!("{line}");
        }
        return Ok(());
    }

    let (tx, rx) = fetch::channel();
    let app = App::new(api, tx, route).with_source(source);
    runtime::run(app, rx, config.ui.tick_rate()).await?;
    Ok(())
}
