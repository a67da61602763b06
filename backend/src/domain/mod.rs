//! Domain layer: models, commands and the services that enforce the
//! cross-entity rules.

pub mod commands;
pub mod models;

mod evolution_service;
mod finance_service;
mod report_service;
mod student_query;
mod student_service;

pub use evolution_service::EvolutionService;
pub use finance_service::FinanceService;
pub use report_service::ReportService;
pub use student_query::StudentQueryService;
pub use student_service::StudentService;
