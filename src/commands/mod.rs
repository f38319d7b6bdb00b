mod context;
mod deployments;

pub use context::*;
pub use deployments::*;
