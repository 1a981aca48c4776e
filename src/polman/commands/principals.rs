use crate::command::{Action, CommandSpec, ResourceGroup};
use crate::decode::decode_principals;
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::record::PrincipalRecord;
use crate::session::SessionConfig;

use super::require;

pub fn list<R: CommandRunner>(runner: &R, session: &SessionConfig) -> Result<Vec<PrincipalRecord>> {
    let argv = CommandSpec::new(ResourceGroup::Principals, Action::List).build(session)?;
    let stdout = runner.run(&argv)?;
    decode_principals(&stdout)
}

pub fn create<R: CommandRunner>(runner: &R, session: &SessionConfig, name: &str) -> Result<()> {
    let name = require("principal name", name)?;
    let argv = CommandSpec::new(ResourceGroup::Principals, Action::Create)
        .positional(name)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}

pub fn delete<R: CommandRunner>(runner: &R, session: &SessionConfig, name: &str) -> Result<()> {
    let name = require("principal name", name)?;
    let argv = CommandSpec::new(ResourceGroup::Principals, Action::Delete)
        .positional(name)
        .build(session)?;
    runner.run(&argv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolmanError;
    use crate::exec::testing::ScriptedRunner;

    fn session() -> SessionConfig {
        SessionConfig::default()
    }

    #[test]
    fn list_decodes_principals() {
        let runner = ScriptedRunner::ok(
            "{\"name\":\"root\",\"clientId\":\"abc\",\"createTimestamp\":1712345678901}\n",
        );
        let records = list(&runner, &session()).unwrap();
        assert_eq!(records[0].name, "root");
        assert_eq!(records[0].client_id, "abc");
        assert_eq!(records[0].principal_type, "N/A");
    }

    #[test]
    fn backend_failure_propagates_without_decoding() {
        let runner = ScriptedRunner::failing("principal not found", 1);
        let err = list(&runner, &session()).unwrap_err();
        match err {
            PolmanError::Execution { stderr, code } => {
                assert_eq!(stderr, "principal not found");
                assert_eq!(code, 1);
            }
            other => panic!("expected Execution error, got {:?}", other),
        }
    }

    #[test]
    fn create_and_delete_name_the_principal() {
        let runner = ScriptedRunner::ok("");
        create(&runner, &session(), "alice").unwrap();
        delete(&runner, &session(), "alice").unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0][calls[0].len() - 3..], ["principals", "create", "alice"]);
        assert_eq!(calls[1][calls[1].len() - 3..], ["principals", "delete", "alice"]);
    }

    #[test]
    fn blank_name_is_rejected_before_spawning() {
        let runner = ScriptedRunner::ok("");
        assert!(create(&runner, &session(), "").is_err());
        assert!(delete(&runner, &session(), " ").is_err());
        assert!(runner.calls().is_empty());
    }
}
