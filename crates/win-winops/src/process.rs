use std::process::Command;

use tracing::debug;
use winplace_engine::{Error, LaunchCommand, Result};

/// Start an external program, fire-and-forget.
///
/// The child handle is dropped immediately: the process outlives us and its
/// exit code is never observed.
pub fn spawn_program(command: &LaunchCommand) -> Result<()> {
    debug!("spawn_program: `{}`", command);
    Command::new(command.program())
        .args(command.args())
        .spawn()
        .map(drop)
        .map_err(|source| Error::Spawn {
            command: command.to_string(),
            source,
        })
}
