pub mod context;
pub mod cycles_service;
pub mod dimensions_service;
pub mod evaluations_service;
pub mod expenses_service;
pub mod goals_service;
pub mod profiles_service;
pub mod records_service;
pub mod reports_service;

pub use context::RequestContext;
pub use cycles_service::CyclesService;
pub use dimensions_service::DimensionsService;
pub use evaluations_service::EvaluationsService;
pub use expenses_service::ExpensesService;
pub use goals_service::GoalsService;
pub use profiles_service::ProfilesService;
pub use records_service::RecordsService;
pub use reports_service::ReportsService;
