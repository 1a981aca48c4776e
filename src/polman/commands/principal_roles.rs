use crate::command::{Action, CommandSpec, ResourceGroup};
use crate::decode::{decode_principal_roles, decode_role_grants};
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::record::{PrincipalRoleRecord, RoleGrantRecord};
use crate::session::SessionConfig;

use super::require;

pub fn list<R: CommandRunner>(
    runner: &R,
    session: &SessionConfig,
) -> Result<Vec<PrincipalRoleRecord>> {
    let argv = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::List).build(session)?;
    let stdout = runner.run(&argv)?;
    decode_principal_roles(&stdout)
}

/// Lists the roles granted to one principal (`list --principal <name>`).
pub fn list_assigned<R: CommandRunner>(
    runner: &R,
    session: &SessionConfig,
    principal: &str,
) -> Result<Vec<RoleGrantRecord>> {
    let principal = require("principal name", principal)?;
    let argv = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::List)
        .option("--principal", principal)
        .build(session)?;
    let stdout = runner.run(&argv)?;
    decode_role_grants(&stdout)
}

/// Creates a role, optionally carrying one `key=value` property. The
/// property flag is emitted only when both key and value are non-empty.
pub fn create<R: CommandRunner>(
    runner: &R,
    session: &SessionConfig,
    name: &str,
    property: Option<(&str, &str)>,
) -> Result<()> {
    let name = require("principal role name", name)?;
    let mut spec = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::Create);
    if let Some((key, value)) = property {
        if !key.trim().is_empty() && !value.trim().is_empty() {
            spec = spec.option("--property", format!("{}={}", key.trim(), value.trim()));
        }
    }
    let argv = spec.positional(name).build(session)?;
    runner.run(&argv)?;
    Ok(())
}

pub fn delete<R: CommandRunner>(runner: &R, session: &SessionConfig, name: &str) -> Result<()> {
    let name = require("principal role name", name)?;
    let argv = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::Delete)
        .positional(name)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}

pub fn grant<R: CommandRunner>(
    runner: &R,
    session: &SessionConfig,
    role: &str,
    principal: &str,
) -> Result<()> {
    let role = require("principal role name", role)?;
    let principal = require("principal name", principal)?;
    let argv = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::Grant)
        .option("--principal", principal)
        .positional(role)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}

pub fn revoke<R: CommandRunner>(
    runner: &R,
    session: &SessionConfig,
    role: &str,
    principal: &str,
) -> Result<()> {
    let role = require("principal role name", role)?;
    let principal = require("principal name", principal)?;
    let argv = CommandSpec::new(ResourceGroup::PrincipalRoles, Action::Revoke)
        .option("--principal", principal)
        .positional(role)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::ScriptedRunner;

    fn session() -> SessionConfig {
        SessionConfig::default()
    }

    #[test]
    fn list_assigned_filters_by_principal() {
        let runner = ScriptedRunner::ok("{\"name\":\"ops\",\"properties\":{}}\n");
        let grants = list_assigned(&runner, &session(), "alice").unwrap();
        assert_eq!(grants[0].name, "ops");

        let argv = &runner.calls()[0];
        assert_eq!(
            argv[argv.len() - 4..],
            ["principal-roles", "list", "--principal", "alice"]
        );
    }

    #[test]
    fn create_emits_property_only_when_complete() {
        let runner = ScriptedRunner::ok("");
        create(&runner, &session(), "ops", Some(("team", "data"))).unwrap();
        create(&runner, &session(), "ops", Some(("team", ""))).unwrap();
        create(&runner, &session(), "ops", None).unwrap();

        let calls = runner.calls();
        assert!(calls[0].contains(&"team=data".to_string()));
        assert!(!calls[1].contains(&"--property".to_string()));
        assert!(!calls[2].contains(&"--property".to_string()));
        assert_eq!(calls[0].last().unwrap(), "ops");
    }

    #[test]
    fn grant_and_revoke_take_role_and_principal() {
        let runner = ScriptedRunner::ok("");
        grant(&runner, &session(), "ops", "alice").unwrap();
        revoke(&runner, &session(), "ops", "alice").unwrap();

        let calls = runner.calls();
        assert_eq!(
            calls[0][calls[0].len() - 5..],
            ["principal-roles", "grant", "--principal", "alice", "ops"]
        );
        assert_eq!(
            calls[1][calls[1].len() - 5..],
            ["principal-roles", "revoke", "--principal", "alice", "ops"]
        );
    }

    #[test]
    fn grant_requires_both_names() {
        let runner = ScriptedRunner::ok("");
        assert!(grant(&runner, &session(), "", "alice").is_err());
        assert!(grant(&runner, &session(), "ops", "").is_err());
        assert!(revoke(&runner, &session(), "", "").is_err());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn list_assigned_requires_a_principal() {
        let runner = ScriptedRunner::ok("");
        assert!(list_assigned(&runner, &session(), "  ").is_err());
        assert!(runner.calls().is_empty());
    }
}
