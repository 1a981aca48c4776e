use clap::Parser;
use colored::Colorize;
use polman::api::{CatalogFields, PolmanApi};
use polman::error::Result;
use polman::exec::ProcessRunner;
use polman::session::SessionConfig;

mod args;
mod print;

use args::{CatalogCommands, Cli, Commands, PrincipalCommands, RoleCommands};
use print::{
    print_catalogs, print_principal_roles, print_principals, print_role_grants, print_success,
};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("POLMAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let session = cli.session();
    let api = PolmanApi::new(ProcessRunner);

    match cli.command {
        Commands::Catalogs(cmd) => handle_catalogs(&api, &session, cmd),
        Commands::Principals(cmd) => handle_principals(&api, &session, cmd),
        Commands::PrincipalRoles(cmd) => handle_roles(&api, &session, cmd),
    }
}

fn handle_catalogs(
    api: &PolmanApi<ProcessRunner>,
    session: &SessionConfig,
    cmd: CatalogCommands,
) -> Result<()> {
    match cmd {
        CatalogCommands::List => {
            let catalogs = api.list_catalogs(session)?;
            print_catalogs(&catalogs);
        }
        CatalogCommands::Create {
            name,
            catalog_type,
            storage_type,
            default_base_location,
            role_arn,
            external_id,
            tenant_id,
            multi_tenant_app_name,
            consent_url,
            service_account,
            remote_url,
            allowed_location,
        } => {
            let fields = CatalogFields {
                catalog_type: catalog_type.unwrap_or_default(),
                storage_type: storage_type.unwrap_or_default(),
                default_base_location: default_base_location.unwrap_or_default(),
                role_arn: role_arn.unwrap_or_default(),
                external_id: external_id.unwrap_or_default(),
                tenant_id: tenant_id.unwrap_or_default(),
                multi_tenant_app_name: multi_tenant_app_name.unwrap_or_default(),
                consent_url: consent_url.unwrap_or_default(),
                service_account: service_account.unwrap_or_default(),
                remote_url: remote_url.unwrap_or_default(),
                allowed_location: allowed_location.unwrap_or_default(),
            };
            api.create_catalog(session, &name, &fields)?;
            print_success(&format!("Catalog '{}' created.", name.trim()));
        }
        CatalogCommands::Delete { name } => {
            api.delete_catalog(session, &name)?;
            print_success(&format!("Catalog '{}' deleted.", name.trim()));
        }
    }
    Ok(())
}

fn handle_principals(
    api: &PolmanApi<ProcessRunner>,
    session: &SessionConfig,
    cmd: PrincipalCommands,
) -> Result<()> {
    match cmd {
        PrincipalCommands::List => {
            let principals = api.list_principals(session)?;
            print_principals(&principals);
        }
        PrincipalCommands::Create { name } => {
            api.create_principal(session, &name)?;
            print_success(&format!("Principal '{}' created.", name.trim()));
        }
        PrincipalCommands::Delete { name } => {
            api.delete_principal(session, &name)?;
            print_success(&format!("Principal '{}' deleted.", name.trim()));
        }
    }
    Ok(())
}

fn handle_roles(
    api: &PolmanApi<ProcessRunner>,
    session: &SessionConfig,
    cmd: RoleCommands,
) -> Result<()> {
    match cmd {
        RoleCommands::List => {
            let roles = api.list_principal_roles(session)?;
            print_principal_roles(&roles);
        }
        RoleCommands::Assigned { principal } => {
            let grants = api.list_assigned_roles(session, &principal)?;
            print_role_grants(principal.trim(), &grants);
        }
        RoleCommands::Create { name, property } => {
            let parsed = property.as_deref().map(split_property).transpose()?;
            api.create_principal_role(
                session,
                &name,
                parsed.as_ref().map(|(k, v)| (k.as_str(), v.as_str())),
            )?;
            print_success(&format!("Principal role '{}' created.", name.trim()));
        }
        RoleCommands::Delete { name } => {
            api.delete_principal_role(session, &name)?;
            print_success(&format!("Principal role '{}' deleted.", name.trim()));
        }
        RoleCommands::Grant { role, principal } => {
            api.grant_principal_role(session, &role, &principal)?;
            print_success(&format!(
                "Granted '{}' to principal '{}'.",
                role.trim(),
                principal.trim()
            ));
        }
        RoleCommands::Revoke { role, principal } => {
            api.revoke_principal_role(session, &role, &principal)?;
            print_success(&format!(
                "Revoked '{}' from principal '{}'.",
                role.trim(),
                principal.trim()
            ));
        }
    }
    Ok(())
}

fn split_property(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(polman::error::PolmanError::Validation(format!(
            "property must be KEY=VALUE, got '{}'",
            raw
        ))),
    }
}
