//! Builds `AppIcon.icns` from `assets/icon.svg` with `rsvg-convert` and
//! `iconutil`, resizing the master render into the ten iconset slots.

pub mod config;
pub mod error;
pub mod iconset;
pub mod logger;
pub mod pipeline;
pub mod resolver;
pub mod runner;

pub use config::BuildConfig;
pub use error::{IconError, Result};
pub use pipeline::build_icns;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
