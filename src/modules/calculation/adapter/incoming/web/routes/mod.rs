pub mod dto;

mod create_calculation;
mod delete_calculation;
mod get_calculations;
mod get_single_calculation;

pub use create_calculation::{__path_create_calculation_handler, create_calculation_handler};
pub use delete_calculation::{__path_delete_calculation_handler, delete_calculation_handler};
pub use dto::{
    CalculationPageResponse, CalculationResponse, CreateCalculationRequest, PaginationQuery,
};
pub use get_calculations::{__path_get_calculations_handler, get_calculations_handler};
pub use get_single_calculation::{
    __path_get_single_calculation_handler, get_single_calculation_handler,
};
