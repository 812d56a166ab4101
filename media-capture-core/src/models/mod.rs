pub mod asset;
pub mod config;
pub mod error;
pub mod state;
