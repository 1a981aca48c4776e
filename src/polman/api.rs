//! # API Facade
//!
//! The single entry point for all admin operations, regardless of the
//! front-end driving them. The facade:
//!
//! - **Dispatches** to the per-resource command modules
//! - **Returns typed records** (`Result<Vec<CatalogRecord>>` and friends)
//! - **Performs no I/O of its own** beyond what the runner does
//!
//! Presentation is strictly the caller's concern: nothing here prints,
//! prompts, or exits. Errors come back as [`crate::error::PolmanError`]
//! values, never as pop-ups or panics.
//!
//! ## Generic Over CommandRunner
//!
//! `PolmanApi<R: CommandRunner>` is generic over how invocations reach the
//! external CLI:
//! - Production: `PolmanApi<ProcessRunner>`
//! - Testing: `PolmanApi<ScriptedRunner>`
//!
//! This enables testing every operation without spawning a real backend.

use crate::commands::{catalogs, principal_roles, principals};
use crate::error::Result;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::record::{CatalogRecord, PrincipalRecord, PrincipalRoleRecord, RoleGrantRecord};
use crate::session::SessionConfig;

pub use crate::commands::catalogs::CatalogFields;

/// The main API facade for admin operations.
///
/// Every method takes the session explicitly; the facade holds no
/// connection state and no cached records.
pub struct PolmanApi<R: CommandRunner> {
    runner: R,
}

impl Default for PolmanApi<ProcessRunner> {
    fn default() -> Self {
        Self::new(ProcessRunner)
    }
}

impl<R: CommandRunner> PolmanApi<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn list_catalogs(&self, session: &SessionConfig) -> Result<Vec<CatalogRecord>> {
        catalogs::list(&self.runner, session)
    }

    pub fn create_catalog(
        &self,
        session: &SessionConfig,
        name: &str,
        fields: &CatalogFields,
    ) -> Result<()> {
        catalogs::create(&self.runner, session, name, fields)
    }

    pub fn delete_catalog(&self, session: &SessionConfig, name: &str) -> Result<()> {
        catalogs::delete(&self.runner, session, name)
    }

    pub fn list_principals(&self, session: &SessionConfig) -> Result<Vec<PrincipalRecord>> {
        principals::list(&self.runner, session)
    }

    pub fn create_principal(&self, session: &SessionConfig, name: &str) -> Result<()> {
        principals::create(&self.runner, session, name)
    }

    pub fn delete_principal(&self, session: &SessionConfig, name: &str) -> Result<()> {
        principals::delete(&self.runner, session, name)
    }

    pub fn list_principal_roles(
        &self,
        session: &SessionConfig,
    ) -> Result<Vec<PrincipalRoleRecord>> {
        principal_roles::list(&self.runner, session)
    }

    /// Roles currently granted to one principal.
    pub fn list_assigned_roles(
        &self,
        session: &SessionConfig,
        principal: &str,
    ) -> Result<Vec<RoleGrantRecord>> {
        principal_roles::list_assigned(&self.runner, session, principal)
    }

    pub fn create_principal_role(
        &self,
        session: &SessionConfig,
        name: &str,
        property: Option<(&str, &str)>,
    ) -> Result<()> {
        principal_roles::create(&self.runner, session, name, property)
    }

    pub fn delete_principal_role(&self, session: &SessionConfig, name: &str) -> Result<()> {
        principal_roles::delete(&self.runner, session, name)
    }

    pub fn grant_principal_role(
        &self,
        session: &SessionConfig,
        role: &str,
        principal: &str,
    ) -> Result<()> {
        principal_roles::grant(&self.runner, session, role, principal)
    }

    pub fn revoke_principal_role(
        &self,
        session: &SessionConfig,
        role: &str,
        principal: &str,
    ) -> Result<()> {
        principal_roles::revoke(&self.runner, session, role, principal)
    }
}
