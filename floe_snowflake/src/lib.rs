//! Snowflake backend for Floe
//!
//! Statement builders, name derivation, provisioning plans, and the REST
//! client that submits generated statements to a live account.
//!
//! ```
//! use floe_core::config::WarehouseConfig;
//! use floe_snowflake::plan;
//!
//! let statements =
//!     plan::account_bootstrap("ACME", &["ENGINEER".to_owned()], &WarehouseConfig::default());
//! assert_eq!(statements[0], "USE ROLE SYSADMIN;");
//! ```

pub mod consts;
mod creds;
pub mod names;
pub mod plan;
pub mod query;
mod rest;

use anyhow::{bail, Result};
use async_trait::async_trait;

use floe_core::config::CredentialsMap;
use floe_core::connectors::Connector;
use floe_core::logging::{error, info, warn};

use creds::SnowflakeCredentials;
use rest::{SnowflakeRestClient, SnowflakeRestConfig};

/// A connection to one Snowflake account.
///
/// In debug mode statements are logged instead of executed; no network
/// traffic happens at all.
pub struct SnowflakeConnector {
    rest_client: SnowflakeRestClient,
    debug: bool,
}

#[async_trait]
impl Connector for SnowflakeConnector {
    fn new(credentials: &CredentialsMap, debug: bool) -> Result<Box<Self>> {
        let mut conn = SnowflakeCredentials::default();
        for (k, v) in credentials.iter() {
            match k.as_ref() {
                "account" => conn.account = v.to_string(),
                "user" => conn.user = v.to_string(),
                "password" => conn.password = v.to_string(),
                "url" => conn.url = Some(v.to_string()),
                _ => (),
            }
        }
        if debug {
            warn!("debug==true. All statements will print rather than execute");
        }
        Ok(Box::new(SnowflakeConnector {
            rest_client: SnowflakeRestClient::new(conn, SnowflakeRestConfig { retry: true })?,
            debug,
        }))
    }

    async fn check(&self) -> bool {
        self.rest_client.execute("SELECT 1").await.is_ok()
    }
}

impl SnowflakeConnector {
    /// Submit a statement sequence in order.
    ///
    /// A connection that can't be established aborts the run before the
    /// first statement. After that, each statement is best-effort: a
    /// failure is logged and the remaining statements still run.
    pub async fn run_statements(&self, statements: &[String]) -> Result<()> {
        if self.debug {
            for statement in statements {
                info!("{statement}");
            }
            return Ok(());
        }
        if !self.check().await {
            bail!("Cannot create connection to Snowflake!");
        }
        for statement in statements {
            info!("Executing: {statement}");
            if let Err(e) = self.rest_client.execute(statement).await {
                error!("Error executing statement! {e:#}");
            }
        }
        Ok(())
    }
}
