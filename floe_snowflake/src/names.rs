//! Name derivation for subject-scoped objects.
//!
//! Every object a subject owns derives its name from the subject prefix.
//! Role names concatenate directly (`ACMEENGINEER`); database and
//! warehouse names join with an underscore (`ACME_PROD`, `ACME_ENGINEER`).
//! The two conventions are deliberate and must not be unified.

use anyhow::{bail, Result};

use crate::consts;

/// Environment suffixes, primary environment first. `PROD` is the clone
/// source for the others.
pub const ENVIRONMENTS: [&str; 4] = ["PROD", "DEV", "QA", "TEST"];

/// Role name for a subject: no separator.
pub fn role_name(subject: &str, suffix: &str) -> String {
    format!("{subject}{suffix}")
}

/// Warehouse name for a subject: underscore separator.
pub fn warehouse_name(subject: &str, suffix: &str) -> String {
    format!("{subject}_{suffix}")
}

/// Database name for a subject and environment: underscore separator.
pub fn database_name(subject: &str, environment: &str) -> String {
    format!("{subject}_{environment}")
}

/// The full set of names a provisioned subject area carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectNames {
    /// The primary (`_PROD`) database.
    pub primary_database: String,
    /// The non-primary databases.
    pub extra_databases: Vec<String>,
    /// The subject's administrative role.
    pub admin_role: String,
    /// The subject's administrative user.
    pub admin_user: String,
    /// The non-administrative roles.
    pub standard_roles: Vec<String>,
    /// Extra databases plus the primary.
    pub all_databases: Vec<String>,
    /// Standard roles plus the admin role.
    pub all_roles: Vec<String>,
}

impl ProjectNames {
    /// Derive the naming record for a subject.
    pub fn derive(subject: &str) -> Self {
        let primary_database = database_name(subject, "PROD");
        let extra_databases = vec![
            database_name(subject, "DEV"),
            database_name(subject, "TEST"),
        ];
        let admin_role = role_name(subject, consts::ADMIN_ROLE_SUFFIX);
        let admin_user = warehouse_name(subject, consts::ADMIN_ROLE_SUFFIX);
        let standard_roles = vec![
            role_name(subject, consts::ANALYST_ROLE_SUFFIX),
            role_name(subject, consts::ENTERPRISE_ROLE_SUFFIX),
            role_name(subject, "TABLEAU"),
        ];

        let mut all_databases = extra_databases.clone();
        all_databases.push(primary_database.clone());
        let mut all_roles = standard_roles.clone();
        all_roles.push(admin_role.clone());

        ProjectNames {
            primary_database,
            extra_databases,
            admin_role,
            admin_user,
            standard_roles,
            all_databases,
            all_roles,
        }
    }

    /// The full user list for the subject.
    ///
    /// There is no source for standard (non-admin) users anywhere in the
    /// configuration, so this cannot be answered; callers relying on it
    /// get an explicit error instead of a silently incomplete list.
    pub fn all_users(&self) -> Result<Vec<String>> {
        bail!("no standard users are configured for this subject; only the admin user {} is known", self.admin_user)
    }
}
