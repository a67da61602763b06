//! In-memory domain backend for the Avalanche admin dashboard.
//!
//! All state lives in one [`MemoryConnection`]; the [`Backend`] wires the
//! services over it and is the single entry point a frontend holds on to.
//! Nothing persists across restarts.

pub mod auth;
pub mod domain;
pub mod identity;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::auth::AuthService;
use crate::domain::{
    EvolutionService, FinanceService, ReportService, StudentQueryService, StudentService,
};
pub use crate::storage::memory::MemoryConnection;

/// The assembled backend: one shared in-memory connection and a service per
/// dashboard concern.
pub struct Backend {
    pub auth_service: AuthService,
    pub student_service: StudentService<MemoryConnection>,
    pub student_query_service: StudentQueryService<MemoryConnection>,
    pub evolution_service: EvolutionService<MemoryConnection>,
    pub finance_service: FinanceService<MemoryConnection>,
    pub report_service: ReportService<MemoryConnection>,
}

impl Backend {
    /// Backend over an empty store.
    pub fn new() -> Self {
        Self::with_connection(MemoryConnection::new())
    }

    /// Backend seeded with the sample population the dashboard boots with.
    pub fn with_sample_data() -> Result<Self> {
        let connection = MemoryConnection::with_sample_data()?;
        Ok(Self::with_connection(connection))
    }

    fn with_connection(connection: MemoryConnection) -> Self {
        info!("Initializing backend services");
        let connection = Arc::new(connection);

        Self {
            auth_service: AuthService::default(),
            student_service: StudentService::new(connection.clone()),
            student_query_service: StudentQueryService::new(connection.clone()),
            evolution_service: EvolutionService::new(connection.clone()),
            finance_service: FinanceService::new(connection.clone()),
            report_service: ReportService::new(connection),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
