pub mod readiness;
pub mod validator;

pub use readiness::*;
pub use validator::*;
