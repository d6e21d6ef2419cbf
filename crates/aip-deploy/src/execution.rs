//! Execution of a built invocation.
//!
//! Exactly one external command runs per deployment. The caller blocks until it
//! exits; there is no timeout, no retry and no capture of its output.

use std::process::Command;

use crate::{
    action::Deployment,
    command::{self, CommandInvocation},
    config::Config,
    error::DeployError,
    print_debug, print_info,
};

/// Runs a command invocation to completion.
pub trait CommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> crate::Result<()>;
}

/// Spawns the invocation as a child process sharing this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &CommandInvocation) -> crate::Result<()> {
        let (program, args) = invocation
            .split_program()
            .ok_or(DeployError::EmptyCommand)?;

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| DeployError::Spawn {
                program: program.to_string(),
                source,
            })?;

        print_debug!("`{}` exited with {}", program, status);

        if !status.success() {
            return Err(DeployError::CommandFailed {
                command: invocation.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Build the command for `deployment` and run it with `runner`.
pub fn deploy<R: CommandRunner + ?Sized>(
    config: &Config,
    deployment: &Deployment,
    runner: &R,
) -> crate::Result<()> {
    let invocation = command::build(config, deployment);

    print_info!("Dispatching action: {}", deployment.action());
    print_info!("Command line: {}", invocation);

    runner.run(&invocation)
}
