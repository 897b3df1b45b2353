//! Application configuration: a YAML file merged with command-line
//! overrides.
//!

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use yaml_peg::serde as yaml;

use crate::logging::info;

/// Alias for HashMap to hold credentials information.
pub type CredentialsMap = HashMap<String, String>;

/// Warehouse creation parameters.
///
/// Every field is independently optional; fields that are left unset are
/// not emitted into the `WITH` clause of the generated statement. Keys in
/// the YAML file that don't map to one of these fields are dropped during
/// deserialization.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// XSMALL, SMALL, MEDIUM, LARGE, XLARGE, ...
    pub warehouse_size: Option<String>,
    /// Seconds of inactivity after which the warehouse suspends.
    pub auto_suspend: Option<u32>,
    /// Resume automatically when a query is submitted.
    pub auto_resume: Option<bool>,
    /// Minimum number of server clusters, at most `max_cluster_count`.
    pub min_cluster_count: Option<u32>,
    /// Maximum number of server clusters, at least `min_cluster_count`.
    pub max_cluster_count: Option<u32>,
    /// Create the warehouse in the suspended state.
    pub initially_suspended: Option<bool>,
}

impl WarehouseConfig {
    /// The set options as `(key, rendered value)` pairs, in field order.
    pub fn options(&self) -> Vec<(&'static str, String)> {
        let mut opts = Vec::new();
        if let Some(size) = &self.warehouse_size {
            opts.push(("warehouse_size", size.to_owned()));
        }
        if let Some(seconds) = self.auto_suspend {
            opts.push(("auto_suspend", seconds.to_string()));
        }
        if let Some(resume) = self.auto_resume {
            opts.push(("auto_resume", resume.to_string()));
        }
        if let Some(min) = self.min_cluster_count {
            opts.push(("min_cluster_count", min.to_string()));
        }
        if let Some(max) = self.max_cluster_count {
            opts.push(("max_cluster_count", max.to_string()));
        }
        if let Some(suspended) = self.initially_suspended {
            opts.push(("initially_suspended", suspended.to_string()));
        }
        opts
    }

    /// True when no option is set.
    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }
}

/// Struct representing the floe_config.yaml file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Username to connect to the account.
    #[serde(default)]
    pub user: String,
    /// Password for that user.
    #[serde(default)]
    pub password: String,
    /// Account identifier of the hosted Snowflake account.
    #[serde(default)]
    pub azure_account: String,
    /// Print statements instead of executing them.
    #[serde(default)]
    pub debug: bool,
    /// Subject-area prefix every generated object name derives from.
    #[serde(default)]
    pub subject: String,
    /// Role suffixes to bootstrap; names will be prepended with the
    /// subject.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Parameters for the warehouses created during account bootstrap.
    #[serde(default)]
    pub warehouse: WarehouseConfig,
}

impl AppConfig {
    /// Ingest the config from a YAML file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
        let config_raw = fs::read_to_string(&path).context("Reading config file")?;
        Self::read_from_str(&config_raw)
    }

    /// Parse the config from a YAML string.
    pub fn read_from_str(raw: &str) -> Result<AppConfig> {
        let mut config = yaml::from_str::<AppConfig>(raw).context("Deserializing config")?;
        config.pop().ok_or_else(|| anyhow!["empty config file"])
    }

    /// Merge command-line overrides over the file values, logging each
    /// overwrite.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(user) = &overrides.user {
            info!("Overwriting user with {}", user);
            self.user = user.to_owned();
        }
        if let Some(password) = &overrides.password {
            info!("Overwriting password from the command line");
            self.password = password.to_owned();
        }
        if let Some(subject) = &overrides.subject {
            info!("Overwriting subject with {}", subject);
            self.subject = subject.to_owned();
        }
        if overrides.debug {
            info!("Overwriting debug with true");
            self.debug = true;
        }
    }

    /// The connection credentials a connector needs, keyed by field name.
    pub fn credentials(&self) -> CredentialsMap {
        HashMap::from([
            ("account".to_owned(), self.azure_account.to_owned()),
            ("user".to_owned(), self.user.to_owned()),
            ("password".to_owned(), self.password.to_owned()),
        ])
    }
}

/// Config values that may arrive on the command line and take precedence
/// over the file.
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    /// Username to connect to the account.
    pub user: Option<String>,
    /// Password for that user.
    pub password: Option<String>,
    /// Subject-area prefix.
    pub subject: Option<String>,
    /// Print statements instead of executing them.
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_CONFIG: &str = r#"
user: svc_floe
password: hunter2
azure_account: org-acct
subject: ACME
roles:
  - ENGINEER
  - ANALYST
warehouse:
  warehouse_size: XSMALL
  auto_suspend: 600
"#;

    #[test]
    fn parses_basic_config() {
        let config = AppConfig::read_from_str(BASIC_CONFIG).unwrap();
        assert_eq!(config.subject, "ACME");
        assert_eq!(config.roles, vec!["ENGINEER", "ANALYST"]);
        assert!(!config.debug);
        assert_eq!(
            config.warehouse.warehouse_size,
            Some("XSMALL".to_owned())
        );
        assert_eq!(config.warehouse.auto_suspend, Some(600));
        assert_eq!(config.warehouse.max_cluster_count, None);
    }

    #[test]
    fn unknown_warehouse_keys_are_dropped() {
        let config = AppConfig::read_from_str(
            r#"
user: u
password: p
azure_account: a
subject: ACME
warehouse:
  warehouse_size: LARGE
  favorite_color: blue
"#,
        )
        .unwrap();
        assert_eq!(
            config.warehouse.options(),
            vec![("warehouse_size", "LARGE".to_owned())]
        );
    }

    #[test]
    fn overrides_take_precedence() {
        let mut config = AppConfig::read_from_str(BASIC_CONFIG).unwrap();
        config.apply_overrides(&CliOverrides {
            user: Some("someone_else".to_owned()),
            subject: Some("WIDGETCO".to_owned()),
            debug: true,
            ..Default::default()
        });
        assert_eq!(config.user, "someone_else");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.subject, "WIDGETCO");
        assert!(config.debug);
    }

    #[test]
    fn credentials_map_has_connection_fields() {
        let config = AppConfig::read_from_str(BASIC_CONFIG).unwrap();
        let creds = config.credentials();
        assert_eq!(creds["account"], "org-acct");
        assert_eq!(creds["user"], "svc_floe");
        assert_eq!(creds["password"], "hunter2");
    }

    #[test]
    fn empty_warehouse_config_has_no_options() {
        assert!(WarehouseConfig::default().is_empty());
    }
}
