//! The trait a SQL backend implements so the CLI can drive it.
//!

use anyhow::Result;
use async_trait::async_trait;

use crate::config::CredentialsMap;

/// A connection to a warehouse account that can run administrative
/// statements.
#[async_trait]
pub trait Connector {
    /// Validate the credentials and bootstrap a client.
    ///
    /// Credential contents are backend-specific; the map comes from
    /// [`crate::config::AppConfig::credentials`]. With `debug` set, the
    /// backend logs statements instead of executing them.
    fn new(credentials: &CredentialsMap, debug: bool) -> Result<Box<Self>>;

    /// Whether the backend can be reached with the stored credentials.
    async fn check(&self) -> bool;
}
