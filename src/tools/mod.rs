//! Tools the model runtime can invoke.

pub mod arguments;
pub mod image;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use image::{brand_prompt, GenerateImageTool, BRAND_CLAUSE};
pub use tool::{Tool, ToolExecutionContext};
pub use types::{ParameterSchema, PropertyKind};
pub use validation::validate_arguments;
