pub mod case;
pub mod document;

pub use case::*;
pub use document::*;
