//! Typed records produced by a decode pass.
//!
//! These are the flattened shapes a front-end renders directly: optional
//! wire fields have already collapsed to display defaults, so downstream
//! code never sees an absent marker. Records are transient, rebuilt from
//! scratch on every list call.

use std::collections::BTreeMap;

/// A catalog registration managed by the backing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub name: String,
    pub catalog_type: String,
    /// From the nested `storageConfigInfo.storageType` wire field; empty
    /// when the catalog reports no storage configuration.
    pub storage_type: String,
    /// From `properties["default-base-location"]`; empty when unset.
    pub default_base_location: String,
}

/// An identity (service account or user) recognized by the backing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalRecord {
    pub name: String,
    pub client_id: String,
    /// "N/A" when the backend omits the type.
    pub principal_type: String,
    /// Kept as text; the wire value may be an epoch-millis number or a
    /// preformatted string depending on backend version.
    pub create_timestamp: String,
}

/// A named role grantable to principals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalRoleRecord {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

/// A role as granted to a specific principal. Same shape as
/// [`PrincipalRoleRecord`], but names the assignment relation so the two
/// tables cannot be mixed up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrantRecord {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}
