// rcs660s/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod init;

pub use builder::DeviceBuilder;
pub use config::SessionConfig;
pub use handle::{Device, Ready, SessionState, Uninitialized};
pub use init::{InitFailure, InitReport, InitStep};
