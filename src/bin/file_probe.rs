use resource_probe::cli::IgnoredArgs;
use resource_probe::util::logging;
use resource_probe::{run_file_probe, ProbeConfig, RealFileSystem, VERSION};
use std::io;
use tracing::debug;

fn main() {
    let args = IgnoredArgs::parse_lenient();
    logging::init_from_env();

    debug!("file-probe v{} starting", VERSION);
    debug!("Ignored arguments: {:?}", args.rest);

    let config = ProbeConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run_file_probe(&RealFileSystem::new(), config.probe_path(), &mut out) {
        eprintln!("{:?}", anyhow::Error::new(e).context("failed to write probe result"));
    }
}
