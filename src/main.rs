use tokio::io::BufReader;
use tracing::{error, info};

use store_engine::app_system::{seed_catalog, setup_tracing, StoreConfig, StoreSystem};
use store_engine::cli::Menu;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting store");

    let catalog = seed_catalog().map_err(|e| e.to_string())?;
    let system = StoreSystem::new(&config, catalog);

    let mut menu = Menu::new(
        system.store_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let menu_result = menu.run().await;
    if let Err(e) = &menu_result {
        error!(error = %e, "Menu stopped unexpectedly");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Store closed");
    menu_result.map_err(|e| e.to_string())
}
