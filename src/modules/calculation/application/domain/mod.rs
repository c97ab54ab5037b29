pub mod calculator;
pub mod entities;

pub use calculator::{perform, CalculationError};
pub use entities::{Calculation, Operation};
