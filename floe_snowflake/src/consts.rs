//! Fixed names the provisioning policy is written against.

/// Elevated role for object creation (warehouses, databases, schemas).
pub const SYSADMIN: &str = "SYSADMIN";
/// Elevated role for role creation and grants.
pub const SECURITYADMIN: &str = "SECURITYADMIN";

/// Role suffix for the subject's administrative role.
pub const ADMIN_ROLE_SUFFIX: &str = "ENGINEER";
/// Role suffix for the reporting-tool role.
pub const REPORTING_ROLE_SUFFIX: &str = "TABLEAUDEV";
/// Role suffix for the enterprise read role.
pub const ENTERPRISE_ROLE_SUFFIX: &str = "ENTERPRISE";
/// Role suffix for the analyst read role.
pub const ANALYST_ROLE_SUFFIX: &str = "ANALYST";

pub(crate) const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub(crate) const ACCEPT_HEADER: &str = "Accept";
pub(crate) const USER_AGENT_HEADER: &str = "User-Agent";
