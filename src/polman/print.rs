use chrono::DateTime;
use colored::Colorize;
use polman::record::{CatalogRecord, PrincipalRecord, PrincipalRoleRecord, RoleGrantRecord};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub(crate) fn print_catalogs(catalogs: &[CatalogRecord]) {
    if catalogs.is_empty() {
        println!("No catalogs found.");
        return;
    }
    let rows: Vec<Vec<String>> = catalogs
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.catalog_type.clone(),
                c.storage_type.clone(),
                c.default_base_location.clone(),
            ]
        })
        .collect();
    print_table(&["Name", "Type", "Storage", "Base Location"], &rows);
}

pub(crate) fn print_principals(principals: &[PrincipalRecord]) {
    if principals.is_empty() {
        println!("No principals found.");
        return;
    }
    let rows: Vec<Vec<String>> = principals
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.client_id.clone(),
                p.principal_type.clone(),
                format_timestamp(&p.create_timestamp),
            ]
        })
        .collect();
    print_table(&["Name", "Client ID", "Type", "Created"], &rows);
}

pub(crate) fn print_principal_roles(roles: &[PrincipalRoleRecord]) {
    if roles.is_empty() {
        println!("No principal roles found.");
        return;
    }
    let rows: Vec<Vec<String>> = roles
        .iter()
        .map(|r| vec![r.name.clone(), format_properties(&r.properties)])
        .collect();
    print_table(&["Role", "Properties"], &rows);
}

pub(crate) fn print_role_grants(principal: &str, grants: &[RoleGrantRecord]) {
    if grants.is_empty() {
        println!("No roles granted to '{}'.", principal);
        return;
    }
    let rows: Vec<Vec<String>> = grants
        .iter()
        .map(|g| vec![g.name.clone(), format_properties(&g.properties)])
        .collect();
    print_table(&["Role", "Properties"], &rows);
}

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join(&" ".repeat(COLUMN_GAP));
    println!("{}", header_line.bold());

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect::<Vec<_>>()
            .join(&" ".repeat(COLUMN_GAP));
        println!("{}", line.trim_end());
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn format_properties(properties: &std::collections::BTreeMap<String, String>) -> String {
    properties
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Epoch-millis timestamps render as UTC datetimes; anything else is shown
/// as the backend sent it.
fn format_timestamp(raw: &str) -> String {
    match raw.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}
