//! Mesa reservation server binary

use mesa_api::{start_server, Config};
use mesa_core::logging::{self, Profile};

#[tokio::main]
async fn main() {
    let profile = match std::env::var("MESA_ENV").as_deref() {
        Ok("production") => Profile::Production,
        _ => Profile::Development,
    };
    logging::init(profile);

    let result = match Config::from_env() {
        Ok(config) => start_server(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
