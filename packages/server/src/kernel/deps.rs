//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! actions. External services use trait abstractions so tests can inject
//! in-memory fakes.

use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;

use super::traits::{BaseNotificationService, BaseObjectStore};
use super::{HttpObjectStore, PushNotificationClient};
use crate::config::{Config, PaymentPolicy};

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Hosted object store holding submitted media
    pub object_store: Arc<dyn BaseObjectStore>,
    /// Decision notification delivery (fire-and-forget)
    pub notifier: Arc<dyn BaseNotificationService>,
    /// Payment policy knobs (minimums, platform fee rate)
    pub payments: PaymentPolicy,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        object_store: Arc<dyn BaseObjectStore>,
        notifier: Arc<dyn BaseNotificationService>,
        payments: PaymentPolicy,
    ) -> Self {
        Self {
            db_pool,
            object_store,
            notifier,
            payments,
        }
    }

    /// Build production dependencies from configuration
    pub fn from_config(config: &Config, db_pool: PgPool) -> Result<Self> {
        let object_store = HttpObjectStore::new(
            &config.object_store_base_url,
            config.object_store_token.clone(),
        )?;
        let notifier = PushNotificationClient::new(config.push_access_token.clone());

        Ok(Self {
            db_pool,
            object_store: Arc::new(object_store),
            notifier: Arc::new(notifier),
            payments: config.payments,
        })
    }
}
