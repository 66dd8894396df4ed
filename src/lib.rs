//! ffmagic: run FreeFem++ cell scripts through the real interpreter and hand
//! back displayable plot files.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod handlers;
pub mod process;
pub mod staging;

pub use config::{Config, ImageBackend};
pub use display::DisplayHandle;
pub use error::{Error, Result};
