//! Shared application state
//!
//! One SQLite connection behind a mutex plus the email notifier. SQLite in
//! WAL mode handles this site's traffic comfortably through a single
//! writer; the mutex guard never crosses an await point.

use crate::config::Config;
use mesa_core::errors::{MesaError, Result};
use mesa_notify::{
    EmailTransport, NoopTransport, Notifier, RestaurantIdentity, SendGridTransport,
};
use mesa_store::{db, migrations};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::info;

/// State shared by every request handler
pub struct AppState {
    pub config: Config,
    db: Mutex<Connection>,
    pub notifier: Notifier,
}

impl AppState {
    /// Open the database, run migrations, and wire up the notifier
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let mut conn = db::open(&config.database_path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        info!(path = %config.database_path.display(), "database ready");

        let transport: Arc<dyn EmailTransport> = match &config.sendgrid_api_key {
            Some(key) => {
                let mut transport = SendGridTransport::new(key, &config.from_email);
                if let Some(base) = &config.sendgrid_api_base {
                    transport = transport.with_base_url(base);
                }
                Arc::new(transport)
            }
            None => {
                info!("SENDGRID_API_KEY not set; email dispatch disabled");
                Arc::new(NoopTransport)
            }
        };

        let notifier = Notifier::new(
            transport,
            RestaurantIdentity {
                name: config.restaurant_name.clone(),
                operator_email: config.operator_email.clone(),
            },
        );

        Ok(Arc::new(Self {
            config,
            db: Mutex::new(conn),
            notifier,
        }))
    }

    /// Run a closure against the database connection
    ///
    /// Handlers go through this so the guard is dropped before any await.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.db.lock().map_err(|_| MesaError::Internal {
            message: "database mutex poisoned".to_string(),
        })?;
        f(&conn)
    }
}
