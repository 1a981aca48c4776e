//! Response decoding: parses the CLI's newline-delimited JSON output into
//! typed records.
//!
//! Each non-blank line is one JSON object. Blank and whitespace-only lines
//! are skipped; the first malformed line fails the whole batch, so a partial
//! table is never produced from corrupt output. Decoding is a pure function
//! of its input string.

use crate::error::{PolmanError, Result};
use crate::record::{CatalogRecord, PrincipalRecord, PrincipalRoleRecord, RoleGrantRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub fn decode_catalogs(stdout: &str) -> Result<Vec<CatalogRecord>> {
    Ok(decode_lines::<CatalogWire>(stdout)?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub fn decode_principals(stdout: &str) -> Result<Vec<PrincipalRecord>> {
    Ok(decode_lines::<PrincipalWire>(stdout)?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub fn decode_principal_roles(stdout: &str) -> Result<Vec<PrincipalRoleRecord>> {
    Ok(decode_lines::<RoleWire>(stdout)?
        .into_iter()
        .map(|wire| PrincipalRoleRecord {
            name: wire.name,
            properties: string_map(wire.properties),
        })
        .collect())
}

pub fn decode_role_grants(stdout: &str) -> Result<Vec<RoleGrantRecord>> {
    Ok(decode_lines::<RoleWire>(stdout)?
        .into_iter()
        .map(|wire| RoleGrantRecord {
            name: wire.name,
            properties: string_map(wire.properties),
        })
        .collect())
}

fn decode_lines<T: DeserializeOwned>(stdout: &str) -> Result<Vec<T>> {
    let mut rows = Vec::new();
    for (idx, line) in stdout.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str(line).map_err(|source| PolmanError::Decode {
            line: idx + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogWire {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    catalog_type: String,
    #[serde(default)]
    storage_config_info: Option<StorageWire>,
    #[serde(default)]
    properties: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageWire {
    #[serde(default)]
    storage_type: String,
}

impl From<CatalogWire> for CatalogRecord {
    fn from(wire: CatalogWire) -> Self {
        Self {
            name: wire.name,
            catalog_type: wire.catalog_type,
            storage_type: wire
                .storage_config_info
                .map(|s| s.storage_type)
                .unwrap_or_default(),
            default_base_location: wire
                .properties
                .get("default-base-location")
                .map(stringify)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrincipalWire {
    #[serde(default)]
    name: String,
    #[serde(default)]
    client_id: String,
    #[serde(rename = "type", default)]
    principal_type: Option<String>,
    #[serde(default)]
    create_timestamp: Option<Value>,
}

impl From<PrincipalWire> for PrincipalRecord {
    fn from(wire: PrincipalWire) -> Self {
        Self {
            name: wire.name,
            client_id: wire.client_id,
            principal_type: wire.principal_type.unwrap_or_else(|| "N/A".to_string()),
            create_timestamp: wire
                .create_timestamp
                .map(|v| stringify(&v))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RoleWire {
    #[serde(default)]
    name: String,
    #[serde(default)]
    properties: BTreeMap<String, Value>,
}

/// JSON strings render bare; anything else keeps its JSON form.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_map(map: BTreeMap<String, Value>) -> BTreeMap<String, String> {
    map.into_iter().map(|(k, v)| (k, stringify(&v))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalogs_with_nested_storage_and_defaults() {
        let stdout = concat!(
            "{\"name\":\"c1\",\"type\":\"INTERNAL\"}\n",
            "{\"name\":\"c2\",\"type\":\"EXTERNAL\",\"storageConfigInfo\":{\"storageType\":\"S3\"}}",
        );
        let records = decode_catalogs(stdout).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "c1");
        assert_eq!(records[0].catalog_type, "INTERNAL");
        assert_eq!(records[0].storage_type, "");
        assert_eq!(records[0].default_base_location, "");
        assert_eq!(records[1].storage_type, "S3");
        assert_eq!(records[1].default_base_location, "");
    }

    #[test]
    fn reads_base_location_from_properties() {
        let stdout = "{\"name\":\"c1\",\"type\":\"INTERNAL\",\"properties\":{\"default-base-location\":\"file:///data\"}}";
        let records = decode_catalogs(stdout).unwrap();
        assert_eq!(records[0].default_base_location, "file:///data");
    }

    #[test]
    fn one_bad_line_fails_the_whole_batch() {
        let stdout = "{\"name\":\"ok\"}\nnot-json";
        let err = decode_catalogs(stdout).unwrap_err();
        match err {
            PolmanError::Decode { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn blank_lines_only_decode_to_empty() {
        assert_eq!(decode_catalogs("").unwrap(), vec![]);
        assert_eq!(decode_catalogs("\n\n   \n\t\n").unwrap(), vec![]);
    }

    #[test]
    fn blank_lines_between_records_are_skipped() {
        let stdout = "{\"name\":\"c1\"}\n\n  \n{\"name\":\"c2\"}\n";
        let records = decode_catalogs(stdout).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "c2");
    }

    #[test]
    fn principal_type_defaults_to_na() {
        let stdout = "{\"name\":\"root\",\"clientId\":\"abc123\"}";
        let records = decode_principals(stdout).unwrap();
        assert_eq!(records[0].principal_type, "N/A");
        assert_eq!(records[0].create_timestamp, "");
    }

    #[test]
    fn principal_timestamp_accepts_numbers_and_strings() {
        let stdout = concat!(
            "{\"name\":\"a\",\"clientId\":\"1\",\"createTimestamp\":1712345678901}\n",
            "{\"name\":\"b\",\"clientId\":\"2\",\"createTimestamp\":\"2024-04-05\"}",
        );
        let records = decode_principals(stdout).unwrap();
        assert_eq!(records[0].create_timestamp, "1712345678901");
        assert_eq!(records[1].create_timestamp, "2024-04-05");
    }

    #[test]
    fn role_properties_are_stringified() {
        let stdout = "{\"name\":\"ops\",\"properties\":{\"team\":\"data\",\"level\":3}}";
        let records = decode_principal_roles(stdout).unwrap();
        assert_eq!(records[0].name, "ops");
        assert_eq!(records[0].properties.get("team").unwrap(), "data");
        assert_eq!(records[0].properties.get("level").unwrap(), "3");
    }

    #[test]
    fn role_without_properties_gets_empty_map() {
        let records = decode_role_grants("{\"name\":\"ops\"}").unwrap();
        assert!(records[0].properties.is_empty());
    }

    #[test]
    fn catalog_roundtrip_applies_defaults() {
        let encoded = [
            serde_json::json!({"name": "c1", "type": "INTERNAL"}),
            serde_json::json!({
                "name": "c2",
                "type": "EXTERNAL",
                "storageConfigInfo": {"storageType": "GCS"},
                "properties": {"default-base-location": "gs://bucket"},
            }),
        ]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

        let first = decode_catalogs(&encoded).unwrap();
        let second = decode_catalogs(&encoded).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].storage_type, "");
        assert_eq!(first[1].storage_type, "GCS");
        assert_eq!(first[1].default_base_location, "gs://bucket");
    }
}
