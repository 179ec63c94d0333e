//! Shared application state
//!
//! Este módulo define o estado compartilhado da aplicação, construído
//! uma única vez no main e passado por clone para os handlers do Axum.

use crate::config::environment::EnvironmentConfig;
use crate::registry::MotoRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub registry: MotoRegistry,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            registry: MotoRegistry::new(),
        }
    }
}
