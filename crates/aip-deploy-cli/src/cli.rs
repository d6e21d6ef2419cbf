use std::path::PathBuf;
use std::process::ExitCode;

use aip_deploy::{CommandRunner, Config, DeployError, Deployment, ProcessRunner, command};
use anyhow::Context as _;
use clap::Parser;

use crate::time::format_duration;
use crate::{print_err, print_info, print_success, print_warn};

#[derive(Parser, Debug)]
#[command(
    name = "deploy",
    version,
    about = "Command to run AI Platform jobs for training and prediction via gcloud",
    long_about = None,
    args_override_self = true,
    infer_long_args = true
)]
pub struct CliArgs {
    /// TOML file overriding the fixed values of the generated command
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Program to launch gcloud through, e.g. powershell.exe
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub launcher: Option<String>,
    /// Print the gcloud command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub action: Deployment,
}

pub fn cli_main() -> ExitCode {
    let args = CliArgs::parse();
    crate::logging::init_logger().init();

    let time_begin = std::time::Instant::now();
    match run(&args, &ProcessRunner) {
        Ok(()) => {
            if !args.dry_run {
                print_success!("{} finished.", args.action.action());
                print_info!(
                    "Time elapsed for the current execution: {}",
                    format_duration(&time_begin.elapsed())
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_err!("{:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Resolve the configuration, then build and run the requested deployment.
pub fn run<R: CommandRunner + ?Sized>(args: &CliArgs, runner: &R) -> anyhow::Result<()> {
    let config = load_config(args)?;

    if args.dry_run {
        println!("{}", command::build(&config, &args.action));
        return Ok(());
    }

    print_info!("Running {}", args.action.action());
    aip_deploy::deploy(&config, &args.action, runner)
        .with_context(|| format!("Failed to run {}", args.action.action()))
}

fn load_config(args: &CliArgs) -> aip_deploy::Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match &args.launcher {
        Some(launcher) => {
            if !config.launcher.is_empty() {
                print_warn!(
                    "--launcher {} replaces launcher `{}` from the configuration file.",
                    launcher,
                    config.launcher.join(" ")
                );
            }
            Ok(config.with_launcher(launcher.clone()))
        }
        None => Ok(config),
    }
}

/// Exit code for a failed run; a failed gcloud call hands its own status through.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(1)
}
