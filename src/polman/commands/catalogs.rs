use crate::command::{Action, CommandSpec, ResourceGroup};
use crate::decode::decode_catalogs;
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::record::CatalogRecord;
use crate::session::SessionConfig;

use super::require;

/// Optional fields for `catalogs create`. Each field maps to one CLI flag
/// and is emitted only when non-empty, so a plain FILE catalog carries none
/// of the cloud-specific flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFields {
    /// INTERNAL or EXTERNAL.
    pub catalog_type: String,
    pub storage_type: String,
    pub default_base_location: String,
    /// S3.
    pub role_arn: String,
    pub external_id: String,
    /// Azure.
    pub tenant_id: String,
    pub multi_tenant_app_name: String,
    pub consent_url: String,
    /// GCS.
    pub service_account: String,
    /// External catalogs.
    pub remote_url: String,
    pub allowed_location: String,
}

pub fn list<R: CommandRunner>(runner: &R, session: &SessionConfig) -> Result<Vec<CatalogRecord>> {
    let argv = CommandSpec::new(ResourceGroup::Catalogs, Action::List).build(session)?;
    let stdout = runner.run(&argv)?;
    decode_catalogs(&stdout)
}

/// Creates a catalog. Flags precede the name; the name is the final
/// positional token.
pub fn create<R: CommandRunner>(
    runner: &R,
    session: &SessionConfig,
    name: &str,
    fields: &CatalogFields,
) -> Result<()> {
    let name = require("catalog name", name)?;
    let argv = CommandSpec::new(ResourceGroup::Catalogs, Action::Create)
        .option("--type", &fields.catalog_type)
        .option("--storage-type", &fields.storage_type)
        .option("--default-base-location", &fields.default_base_location)
        .option("--role-arn", &fields.role_arn)
        .option("--external-id", &fields.external_id)
        .option("--tenant-id", &fields.tenant_id)
        .option("--multi-tenant-app-name", &fields.multi_tenant_app_name)
        .option("--consent-url", &fields.consent_url)
        .option("--service-account", &fields.service_account)
        .option("--remote-url", &fields.remote_url)
        .option("--allowed-location", &fields.allowed_location)
        .positional(name)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}

pub fn delete<R: CommandRunner>(runner: &R, session: &SessionConfig, name: &str) -> Result<()> {
    let name = require("catalog name", name)?;
    let argv = CommandSpec::new(ResourceGroup::Catalogs, Action::Delete)
        .positional(name)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}
