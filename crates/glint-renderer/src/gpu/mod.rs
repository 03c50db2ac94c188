mod adapter;
mod context;
mod headless;
mod types;

pub use context::*;
pub use headless::*;
pub use types::*;
