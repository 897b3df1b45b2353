//!
//! Floe core
//!
//! Shared plumbing for the Floe provisioning tool: logging, application
//! configuration, and the connector trait the CLI drives SQL backends
//! through.
#![deny(missing_docs)]

pub use config::{AppConfig, CliOverrides, CredentialsMap, WarehouseConfig};
pub use connectors::Connector;

pub mod config;
pub mod connectors;
pub mod logging;
