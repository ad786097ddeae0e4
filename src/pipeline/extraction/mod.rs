pub mod attorney;
pub mod court;
pub mod dates;
pub mod financial;
pub mod orchestrator;
pub mod party;
pub mod patterns;
pub mod types;

pub use orchestrator::*;
pub use types::*;
