//! Floe CLI
//!
//! Generates the administrative statements for provisioning a subject
//! area in a Snowflake account, then prints or executes them.

#![deny(missing_docs)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use floe_core::{
    config::{AppConfig, CliOverrides},
    connectors::Connector,
    logging::{self, LevelFilter},
};
use floe_snowflake::{plan, SnowflakeConnector};

const DEFAULT_CONFIG_FILE: &str = "floe_config.yaml";

/// Floe: convention-driven Snowflake account provisioning
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: FloeCommand,
    /// Path to the YAML config file.
    #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
    #[clap(short, long)]
    log_level: Option<LevelFilter>,
    /// Username to connect to the account.
    #[clap(short, long)]
    user: Option<String>,
    /// User password.
    #[clap(short, long)]
    password: Option<String>,
    /// Subject area for the generated objects.
    #[clap(short, long)]
    subject: Option<String>,
    /// Print SQL statements instead of executing them.
    #[clap(short, long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum FloeCommand {
    /// Create the subject's roles and warehouses.
    Account,
    /// Create the subject's databases and base schemas.
    Database,
    /// Grant the admin role full control of the environment databases.
    AdminGrants,
    /// Grant the reporting-tool role read access to the environment
    /// databases.
    ReportingGrants,
    /// Grant the enterprise and analyst roles read access to the primary
    /// database.
    StandardGrants,
    /// Create a project schema in the PROD, TEST, and DEV databases.
    ProjectSchema {
        /// Name of the project schema to create.
        #[clap(long)]
        project: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup(args.log_level);

    let mut config = AppConfig::read_from_file(&args.config)
        .with_context(|| format!("reading config from {}", args.config))?;
    config.apply_overrides(&CliOverrides {
        user: args.user,
        password: args.password,
        subject: args.subject,
        debug: args.debug,
    });

    let statements = match &args.command {
        FloeCommand::Account => plan::account_bootstrap(
            &config.subject,
            &config.roles,
            &config.warehouse,
        ),
        FloeCommand::Database => plan::database_bootstrap(&config.subject),
        FloeCommand::AdminGrants => plan::admin_grants(&config.subject),
        FloeCommand::ReportingGrants => plan::reporting_grants(&config.subject),
        FloeCommand::StandardGrants => plan::standard_user_grants(&config.subject),
        FloeCommand::ProjectSchema { project } => {
            plan::project_schemas(&config.subject, project)
        }
    };

    let connector = SnowflakeConnector::new(&config.credentials(), config.debug)?;
    connector.run_statements(&statements).await?;

    Ok(())
}
