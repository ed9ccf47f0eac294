use std::sync::Arc;

use clario_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound mail transport.
    pub mailer: Arc<dyn Mailer>,
}
