//! Server startup utilities.

use std::time::Duration;
use tracing::info;
use wordgames_config::Persistence;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
 _       __               __
| |     / /___  _________/ /___ _____ _____ ___  ___  _____
| | /| / / __ \/ ___/ __  / __ `/ __ `/ __ `__ \/ _ \/ ___/
| |/ |/ / /_/ / /  / /_/ / /_/ / /_/ / / / / / /  __(__  )
|__/|__/\____/_/   \__,_/\__, /\__,_/_/ /_/ /_/\___/____/
                        /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, persistence: Persistence, startup_time: Duration) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:     http://{}", addr);
    info!("Health:       http://{}/health", addr);
    info!("Persistence:  {}", persistence);
    info!("Started in:   {} ms", startup_time.as_millis());
    info!("{}", separator);
}
