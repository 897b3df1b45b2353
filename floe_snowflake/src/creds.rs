use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Credentials for authenticating to Snowflake.
///
/// Filled in from the app config's credentials map; password auth is the
/// only supported scheme.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct SnowflakeCredentials {
    pub(crate) account: String,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) url: Option<String>,
}

impl SnowflakeCredentials {
    /// Perform simple field validation to catch bad input.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account.is_empty() || self.user.is_empty() || self.password.is_empty() {
            return Err(anyhow!(
                "Credentials are missing. Please make sure your floe_config.yaml file has user, password, and azure_account set."
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_creds_fail_validation() {
        assert!(SnowflakeCredentials::default().validate().is_err());
    }

    #[test]
    fn filled_creds_pass_validation() {
        let creds = SnowflakeCredentials {
            account: "my_account".to_owned(),
            user: "user".to_owned(),
            password: "password".to_owned(),
            url: None,
        };
        creds.validate().unwrap();
    }
}
