//! The exported print macros expand to `$crate::logging::...` and must work
//! from outside the crate.

use aip_deploy_cli::{print_err, print_info, print_success, print_warn};

#[test]
fn exported_macros_expand_outside_the_crate() {
    let action = "local_train";
    print_info!("Dispatching {}", action);
    print_warn!("launcher {} replaced", "powershell.exe");
    print_err!("{} failed", action);
    print_success!("{action} finished");
}

#[test]
fn logger_builder_is_available_to_binaries() {
    // `try_init` so a second logger in the same test binary is not an error.
    let _ = aip_deploy_cli::logging::init_logger().try_init();
    assert_eq!(aip_deploy_cli::logging::CLOUD_BLUE.b, 244);
}
