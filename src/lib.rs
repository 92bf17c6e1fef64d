// 特定の警告を無効化
#![allow(clippy::needless_return)]

pub mod error;
pub mod series;

// Re-export commonly used types
pub use error::{Error, Result, SeriesError};
pub use series::{Series, TieBreak};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
