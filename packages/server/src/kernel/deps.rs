//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to every domain action.

use sqlx::PgPool;
use std::sync::Arc;

use crate::common::Validator;
use crate::domains::auth::JwtService;
use crate::kernel::{BaseNotifier, TxTimeouts};

#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub validator: Validator,
    pub notifier: Arc<dyn BaseNotifier>,
    pub jwt_service: Arc<JwtService>,
    pub tx_timeouts: TxTimeouts,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        validator: Validator,
        notifier: Arc<dyn BaseNotifier>,
        jwt_service: Arc<JwtService>,
        tx_timeouts: TxTimeouts,
    ) -> Self {
        Self {
            db_pool,
            validator,
            notifier,
            jwt_service,
            tx_timeouts,
        }
    }
}
