pub mod create_calculation_service;
pub mod delete_calculation_service;
pub mod get_calculations_service;
pub mod get_single_calculation_service;

pub use create_calculation_service::CreateCalculationService;
pub use delete_calculation_service::DeleteCalculationService;
pub use get_calculations_service::GetCalculationsService;
pub use get_single_calculation_service::GetSingleCalculationService;
