use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

/// Installs the `env_logger` backend. Defaults to `warn`; set
/// `RUST_LOG=debug` to see every tool invocation.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log::error!("{}: {}", prefix, e);
}

pub fn log_command(program: &Path, args: &[OsString]) {
    let joined = args
        .iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    log::debug!("RUN: {} {}", program.display(), joined);
}
