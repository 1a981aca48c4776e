//! Command construction: turns a (resource group, action, options, session)
//! tuple into the exact argument vector handed to the external CLI.
//!
//! Arguments are always passed as a vector, never concatenated into a shell
//! string, so user-entered names, URLs, and credentials cannot be
//! reinterpreted by a shell.

use crate::error::{PolmanError, Result};
use crate::session::SessionConfig;
use std::fmt;

/// Top-level resource group of the admin CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceGroup {
    Catalogs,
    Principals,
    PrincipalRoles,
}

impl ResourceGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceGroup::Catalogs => "catalogs",
            ResourceGroup::Principals => "principals",
            ResourceGroup::PrincipalRoles => "principal-roles",
        }
    }
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Delete,
    Grant,
    Revoke,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Grant => "grant",
            Action::Revoke => "revoke",
        }
    }

    /// Every mutating action names its target as the trailing positional.
    fn requires_positional(&self) -> bool {
        !matches!(self, Action::List)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One CLI invocation: resource group, action, optional flags, and an
/// optional trailing positional.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    group: ResourceGroup,
    action: Action,
    positional: Option<String>,
    options: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(group: ResourceGroup, action: Action) -> Self {
        Self {
            group,
            action,
            positional: None,
            options: Vec::new(),
        }
    }

    /// Sets the trailing positional (a catalog, principal, or role name).
    pub fn positional(mut self, name: impl Into<String>) -> Self {
        self.positional = Some(name.into());
        self
    }

    /// Adds `flag value` to the invocation. Empty values emit nothing.
    pub fn option(mut self, flag: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.options.push((flag.to_string(), value.to_string()));
        }
        self
    }

    /// Assembles the full argument vector, session arguments first, then the
    /// resource group and action, then flags, then the positional.
    ///
    /// Credentials ride along even when empty. A mutating action with a
    /// missing or blank positional fails here, before anything is spawned.
    pub fn build(&self, session: &SessionConfig) -> Result<Vec<String>> {
        if self.action.requires_positional() {
            match &self.positional {
                Some(name) if !name.trim().is_empty() => {}
                _ => {
                    return Err(PolmanError::Validation(format!(
                        "{} {} requires a name",
                        self.group, self.action
                    )))
                }
            }
        }

        let mut argv = vec![
            session.cli_path.clone(),
            "--host".to_string(),
            session.host.clone(),
            "--port".to_string(),
            session.port.clone(),
            "--client-id".to_string(),
            session.client_id.clone(),
            "--client-secret".to_string(),
            session.client_secret.clone(),
            self.group.as_str().to_string(),
            self.action.as_str().to_string(),
        ];

        for (flag, value) in &self.options {
            argv.push(flag.clone());
            argv.push(value.clone());
        }

        if let Some(name) = &self.positional {
            argv.push(name.clone());
        }

        Ok(argv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionConfig {
        SessionConfig {
            cli_path: "./polaris".to_string(),
            host: "localhost".to_string(),
            port: "8181".to_string(),
            client_id: "a".to_string(),
            client_secret: "b".to_string(),
        }
    }

    #[test]
    fn list_builds_session_prefix_then_group_and_action() {
        let argv = CommandSpec::new(ResourceGroup::Catalogs, Action::List)
            .build(&session())
            .unwrap();
        assert_eq!(
            argv,
            vec![
                "./polaris",
                "--host",
                "localhost",
                "--port",
                "8181",
                "--client-id",
                "a",
                "--client-secret",
                "b",
                "catalogs",
                "list"
            ]
        );
    }

    #[test]
    fn empty_credentials_are_forwarded_not_omitted() {
        let mut s = session();
        s.client_id = String::new();
        s.client_secret = String::new();
        let argv = CommandSpec::new(ResourceGroup::Principals, Action::List)
            .build(&s)
            .unwrap();
        assert_eq!(argv[5], "--client-id");
        assert_eq!(argv[6], "");
        assert_eq!(argv[7], "--client-secret");
        assert_eq!(argv[8], "");
    }

    #[test]
    fn create_places_name_after_flags() {
        let argv = CommandSpec::new(ResourceGroup::Catalogs, Action::Create)
            .option("--type", "INTERNAL")
            .option("--storage-type", "FILE")
            .positional("mycat")
            .build(&session())
            .unwrap();
        let tail = &argv[argv.len() - 6..];
        assert_eq!(
            tail,
            ["create", "--type", "INTERNAL", "--storage-type", "FILE", "mycat"]
        );
        assert_eq!(argv.last().unwrap(), "mycat");
    }

    #[test]
    fn empty_option_values_emit_no_flag() {
        let argv = CommandSpec::new(ResourceGroup::Catalogs, Action::Create)
            .option("--type", "INTERNAL")
            .option("--role-arn", "")
            .positional("mycat")
            .build(&session())
            .unwrap();
        assert!(!argv.contains(&"--role-arn".to_string()));
        assert!(argv.contains(&"--type".to_string()));
    }

    #[test]
    fn mutating_action_without_positional_fails_validation() {
        let err = CommandSpec::new(ResourceGroup::Catalogs, Action::Delete)
            .build(&session())
            .unwrap_err();
        assert!(matches!(err, crate::error::PolmanError::Validation(_)));
    }

    #[test]
    fn blank_positional_fails_validation() {
        let err = CommandSpec::new(ResourceGroup::Principals, Action::Create)
            .positional("   ")
            .build(&session())
            .unwrap_err();
        assert!(matches!(err, crate::error::PolmanError::Validation(_)));
    }

    #[test]
    fn grant_places_principal_flag_before_role_name() {
        let argv = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::Grant)
            .option("--principal", "alice")
            .positional("ops")
            .build(&session())
            .unwrap();
        let tail = &argv[argv.len() - 5..];
        assert_eq!(tail, ["principal-roles", "grant", "--principal", "alice", "ops"]);
    }
}
