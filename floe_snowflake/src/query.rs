//! Builders for administrative Snowflake statements.
//!
//! Each function renders one intent into one semicolon-terminated SQL
//! string. No I/O and no validation happen here: privilege keywords,
//! object types, and identifiers are passed through verbatim and any
//! semantic problems surface when the statement is executed.

use std::fmt::Display;

use floe_core::config::WarehouseConfig;
use uuid::Uuid;

/// One or more privilege keywords for a grant statement.
///
/// A bare string and a one-element list render identically, so callers
/// can pass whichever reads better at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Privileges(Vec<String>);

impl Privileges {
    fn join(&self) -> String {
        self.0.join(",")
    }
}

impl From<&str> for Privileges {
    fn from(privilege: &str) -> Self {
        Privileges(vec![privilege.to_owned()])
    }
}

impl From<Vec<&str>> for Privileges {
    fn from(privileges: Vec<&str>) -> Self {
        Privileges(privileges.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for Privileges {
    fn from(privileges: Vec<String>) -> Self {
        Privileges(privileges)
    }
}

/// What kind of principal a role is granted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GranteeType {
    /// Grant to another role.
    Role,
    /// Grant to a user.
    User,
}

impl Display for GranteeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GranteeType::Role => write!(f, "role"),
            GranteeType::User => write!(f, "user"),
        }
    }
}

/// Grant one or more privileges on a securable object to a role.
///
/// With `future_object_type` set, the grant targets objects of that type
/// created later inside the container instead of the container itself.
pub fn grant_to_role(
    object_type: &str,
    object_name: &str,
    role_name: &str,
    privileges: impl Into<Privileges>,
    future_object_type: Option<&str>,
) -> String {
    let target = match future_object_type {
        Some(future_type) => format!("FUTURE {future_type} IN {object_type} {object_name}"),
        None => format!("{object_type} {object_name}"),
    };
    format!(
        "GRANT {} ON {} TO ROLE {};",
        privileges.into().join(),
        target,
        role_name
    )
}

/// Assign a role to a user or to another role.
pub fn grant_role(role_name: &str, grantee_type: GranteeType, grantee: &str) -> String {
    format!("GRANT ROLE {role_name} TO {grantee_type} {grantee};")
}

/// Create a database, optionally as a zero-copy clone of another.
pub fn create_database(name: &str, clone_source: Option<&str>) -> String {
    let clone_clause = clone_source
        .map(|source| format!(" CLONE {source}"))
        .unwrap_or_default();
    format!("CREATE DATABASE IF NOT EXISTS {name}{clone_clause};")
}

/// Create a schema in the session's current database.
pub fn create_schema(name: &str) -> String {
    format!("CREATE SCHEMA IF NOT EXISTS {name};")
}

/// Create a warehouse with the configured parameters.
///
/// An all-default config emits no `WITH` clause at all.
pub fn create_warehouse(name: &str, config: &WarehouseConfig) -> String {
    let options = config.options();
    let with_clause = if options.is_empty() {
        String::new()
    } else {
        let rendered = options
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(" WITH {rendered}")
    };
    format!("CREATE WAREHOUSE IF NOT EXISTS {name}{with_clause};")
}

/// Create a user.
///
/// Without a supplied password a random one is generated; the user has to
/// change it on first login anyway. Either way the password ends up
/// embedded in the returned statement, so treat the string as sensitive
/// if it gets printed or logged.
pub fn create_user(name: &str, password: Option<&str>, must_change_password: bool) -> String {
    let password = password
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    format!(
        "CREATE USER IF NOT EXISTS {name} PASSWORD = '{password}' MUST_CHANGE_PASSWORD = {must_change_password};"
    )
}

/// Create a role.
pub fn create_role(name: &str) -> String {
    format!("CREATE ROLE IF NOT EXISTS {name};")
}
