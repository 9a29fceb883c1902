//! Tool modules for Maestro agents.

pub mod base;
pub mod calculator;
pub mod calories;
pub mod clock;
pub mod delegate;
pub mod registry;
pub mod schema;

pub use base::{format_number, require_number, require_string, Tool};
pub use calculator::CalculatorTool;
pub use calories::CalorieCalculatorTool;
pub use clock::CurrentTimeTool;
pub use delegate::DelegateTool;
pub use registry::ToolRegistry;
pub use schema::validate_arguments;
