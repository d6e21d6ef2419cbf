use std::process::ExitCode;

fn main() -> ExitCode {
    aip_deploy_cli::cli::cli_main()
}
