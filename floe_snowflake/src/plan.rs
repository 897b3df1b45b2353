//! Provisioning plans: ordered statement sequences for each scenario.
//!
//! Every plan opens with the `USE ROLE ...;` switch its statements need,
//! because the engine resolves unqualified names and grant scope against
//! the session's current role and database. Order within a plan is part
//! of its contract.

use floe_core::config::WarehouseConfig;

use crate::consts::{
    ADMIN_ROLE_SUFFIX, ANALYST_ROLE_SUFFIX, ENTERPRISE_ROLE_SUFFIX, REPORTING_ROLE_SUFFIX,
    SECURITYADMIN, SYSADMIN,
};
use crate::names::{database_name, role_name, warehouse_name, ENVIRONMENTS};
use crate::query::{self, GranteeType};

fn use_role(role: &str) -> String {
    format!("USE ROLE {role};")
}

fn use_database(database: &str) -> String {
    format!("USE DATABASE {database};")
}

/// Statements for bootstrapping a subject's roles and warehouses.
///
/// Warehouses are created as SYSADMIN; roles are created as SECURITYADMIN,
/// granted back to both admin roles, and given operate/usage on their own
/// warehouse.
pub fn account_bootstrap(
    subject: &str,
    base_roles: &[String],
    warehouse_config: &WarehouseConfig,
) -> Vec<String> {
    let mut queries = vec![use_role(SYSADMIN)];
    for role in base_roles {
        queries.push(query::create_warehouse(
            &warehouse_name(subject, role),
            warehouse_config,
        ));
    }
    queries.push(use_role(SECURITYADMIN));
    for role in base_roles {
        let role_name = role_name(subject, role);
        let warehouse_name = warehouse_name(subject, role);
        queries.push(query::create_role(&role_name));
        queries.push(query::grant_role(&role_name, GranteeType::Role, SYSADMIN));
        queries.push(query::grant_role(
            &role_name,
            GranteeType::Role,
            SECURITYADMIN,
        ));
        queries.push(query::grant_to_role(
            "warehouse",
            &warehouse_name,
            &role_name,
            vec!["operate", "usage"],
            None,
        ));
    }
    queries
}

/// Statements for bootstrapping a subject's databases and base schemas.
///
/// The primary database is created first and the other environments are
/// cloned from it.
pub fn database_bootstrap(subject: &str) -> Vec<String> {
    let primary = database_name(subject, "PROD");
    let mut queries = vec![use_role(SYSADMIN)];
    queries.push(query::create_database(&primary, None));
    queries.push(use_database(&primary));
    queries.push(query::create_schema("PROJECT"));
    queries.push(query::create_schema("INTEGRATE"));
    queries.push(query::create_database(
        &database_name(subject, "DEV"),
        Some(&primary),
    ));
    queries.push(query::create_database(
        &database_name(subject, "QA"),
        Some(&primary),
    ));
    queries.push(query::create_database(
        &database_name(subject, "TEST"),
        Some(&primary),
    ));
    queries
}

/// Grant statements for the subject's admin (ENGINEER) role: full control
/// of every environment database and everything created inside it later.
pub fn admin_grants(subject: &str) -> Vec<String> {
    let role = role_name(subject, ADMIN_ROLE_SUFFIX);
    let mut queries = vec![use_role(SECURITYADMIN)];
    for environment in ENVIRONMENTS {
        let database = database_name(subject, environment);
        queries.push(use_database(&database));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            "all privileges",
            None,
        ));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            vec!["references", "select", "ownership"],
            Some("views"),
        ));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            "all privileges",
            Some("tables"),
        ));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            "all privileges",
            Some("schemas"),
        ));
    }
    queries
}

/// Grant statements for the reporting-tool (TABLEAUDEV) role: read-only
/// reach into every environment database.
pub fn reporting_grants(subject: &str) -> Vec<String> {
    let role = role_name(subject, REPORTING_ROLE_SUFFIX);
    let mut queries = vec![use_role(SECURITYADMIN)];
    for environment in ENVIRONMENTS {
        let database = database_name(subject, environment);
        queries.push(use_database(&database));
        queries.push(query::grant_to_role(
            "database", &database, &role, "USAGE", None,
        ));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            "SELECT",
            Some("views"),
        ));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            "SELECT",
            Some("tables"),
        ));
        queries.push(query::grant_to_role(
            "database",
            &database,
            &role,
            "USAGE",
            Some("schemas"),
        ));
    }
    queries
}

/// Grant statements for the enterprise and analyst roles on the primary
/// database. The analyst role also gets SELECT on future views and
/// tables; the enterprise role is limited to structures that already
/// exist, so it never receives a future-object grant.
pub fn standard_user_grants(subject: &str) -> Vec<String> {
    let roles = [
        role_name(subject, ENTERPRISE_ROLE_SUFFIX),
        role_name(subject, ANALYST_ROLE_SUFFIX),
    ];
    let database = database_name(subject, "PROD");
    let mut queries = vec![use_role(SECURITYADMIN)];
    queries.push(use_database(&database));
    for role in &roles {
        queries.push(query::grant_to_role(
            "database", &database, role, "USAGE", None,
        ));
    }
    let analyst = role_name(subject, ANALYST_ROLE_SUFFIX);
    queries.push(query::grant_to_role(
        "database",
        &database,
        &analyst,
        "SELECT",
        Some("views"),
    ));
    queries.push(query::grant_to_role(
        "database",
        &database,
        &analyst,
        "SELECT",
        Some("tables"),
    ));
    queries
}

/// Statements creating a project schema in the PROD, TEST, and DEV
/// databases.
pub fn project_schemas(subject: &str, project: &str) -> Vec<String> {
    let mut queries = vec![use_role(SYSADMIN)];
    for environment in ["PROD", "TEST", "DEV"] {
        queries.push(use_database(&database_name(subject, environment)));
        queries.push(query::create_schema(project));
    }
    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(statements: &[String], needle: &str) -> usize {
        statements
            .iter()
            .position(|s| s.as_str() == needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in {statements:#?}"))
    }

    #[test]
    fn account_bootstrap_orders_context_switches_before_dependents() {
        let statements = account_bootstrap(
            "ACME",
            &["ENGINEER".to_owned()],
            &WarehouseConfig::default(),
        );
        assert_eq!(statements[0], "USE ROLE SYSADMIN;");

        let warehouse = position(&statements, "CREATE WAREHOUSE IF NOT EXISTS ACME_ENGINEER;");
        let securityadmin = position(&statements, "USE ROLE SECURITYADMIN;");
        let role = position(&statements, "CREATE ROLE IF NOT EXISTS ACMEENGINEER;");
        assert!(warehouse < securityadmin);
        assert!(securityadmin < role);
        assert_eq!(
            &statements[role + 1..],
            &[
                "GRANT ROLE ACMEENGINEER TO role SYSADMIN;",
                "GRANT ROLE ACMEENGINEER TO role SECURITYADMIN;",
                "GRANT operate,usage ON warehouse ACME_ENGINEER TO ROLE ACMEENGINEER;",
            ]
        );
    }

    #[test]
    fn account_bootstrap_passes_warehouse_config_through() {
        let config = WarehouseConfig {
            warehouse_size: Some("XSMALL".to_owned()),
            ..Default::default()
        };
        let statements = account_bootstrap("ACME", &["ANALYST".to_owned()], &config);
        assert_eq!(
            statements[1],
            "CREATE WAREHOUSE IF NOT EXISTS ACME_ANALYST WITH warehouse_size = XSMALL;"
        );
    }

    #[test]
    fn database_bootstrap_clones_environments_from_prod() {
        let statements = database_bootstrap("ACME");
        assert_eq!(
            statements,
            vec![
                "USE ROLE SYSADMIN;",
                "CREATE DATABASE IF NOT EXISTS ACME_PROD;",
                "USE DATABASE ACME_PROD;",
                "CREATE SCHEMA IF NOT EXISTS PROJECT;",
                "CREATE SCHEMA IF NOT EXISTS INTEGRATE;",
                "CREATE DATABASE IF NOT EXISTS ACME_DEV CLONE ACME_PROD;",
                "CREATE DATABASE IF NOT EXISTS ACME_QA CLONE ACME_PROD;",
                "CREATE DATABASE IF NOT EXISTS ACME_TEST CLONE ACME_PROD;",
            ]
        );
        assert_eq!(statements.len(), 8);
        assert_eq!(
            statements[5],
            "CREATE DATABASE IF NOT EXISTS ACME_DEV CLONE ACME_PROD;"
        );
    }

    #[test]
    fn admin_grants_cover_every_environment_database() {
        let statements = admin_grants("ACME");
        assert_eq!(statements[0], "USE ROLE SECURITYADMIN;");
        // One context switch plus four grants per database.
        assert_eq!(statements.len(), 1 + 4 * 5);
        assert_eq!(
            &statements[1..6],
            &[
                "USE DATABASE ACME_PROD;",
                "GRANT all privileges ON database ACME_PROD TO ROLE ACMEENGINEER;",
                "GRANT references,select,ownership ON FUTURE views IN database ACME_PROD TO ROLE ACMEENGINEER;",
                "GRANT all privileges ON FUTURE tables IN database ACME_PROD TO ROLE ACMEENGINEER;",
                "GRANT all privileges ON FUTURE schemas IN database ACME_PROD TO ROLE ACMEENGINEER;",
            ]
        );
        assert!(statements.contains(&"USE DATABASE ACME_TEST;".to_owned()));
    }

    #[test]
    fn reporting_grants_are_read_only() {
        let statements = reporting_grants("ACME");
        assert_eq!(statements[0], "USE ROLE SECURITYADMIN;");
        assert_eq!(
            &statements[1..6],
            &[
                "USE DATABASE ACME_PROD;",
                "GRANT USAGE ON database ACME_PROD TO ROLE ACMETABLEAUDEV;",
                "GRANT SELECT ON FUTURE views IN database ACME_PROD TO ROLE ACMETABLEAUDEV;",
                "GRANT SELECT ON FUTURE tables IN database ACME_PROD TO ROLE ACMETABLEAUDEV;",
                "GRANT USAGE ON FUTURE schemas IN database ACME_PROD TO ROLE ACMETABLEAUDEV;",
            ]
        );
        for statement in &statements {
            assert!(
                !statement.contains("all privileges"),
                "reporting role must not get ownership-level grants: {statement}"
            );
        }
    }

    #[test]
    fn standard_user_grants_scope_future_objects_to_analyst() {
        let statements = standard_user_grants("ACME");
        assert_eq!(
            statements,
            vec![
                "USE ROLE SECURITYADMIN;",
                "USE DATABASE ACME_PROD;",
                "GRANT USAGE ON database ACME_PROD TO ROLE ACMEENTERPRISE;",
                "GRANT USAGE ON database ACME_PROD TO ROLE ACMEANALYST;",
                "GRANT SELECT ON FUTURE views IN database ACME_PROD TO ROLE ACMEANALYST;",
                "GRANT SELECT ON FUTURE tables IN database ACME_PROD TO ROLE ACMEANALYST;",
            ]
        );
        for statement in &statements {
            if statement.contains("FUTURE") {
                assert!(!statement.contains("ACMEENTERPRISE"));
            }
        }
    }

    #[test]
    fn project_schemas_create_one_schema_per_environment() {
        let statements = project_schemas("ACME", "INGEST");
        assert_eq!(
            statements,
            vec![
                "USE ROLE SYSADMIN;",
                "USE DATABASE ACME_PROD;",
                "CREATE SCHEMA IF NOT EXISTS INGEST;",
                "USE DATABASE ACME_TEST;",
                "CREATE SCHEMA IF NOT EXISTS INGEST;",
                "USE DATABASE ACME_DEV;",
                "CREATE SCHEMA IF NOT EXISTS INGEST;",
            ]
        );
    }
}
