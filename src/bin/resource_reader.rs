use resource_probe::cli::IgnoredArgs;
use resource_probe::util::logging;
use resource_probe::{read_resource, EmbeddedBundle, ProbeConfig, ResourceBundle, VERSION};
use std::io;
use tracing::debug;

fn main() {
    let args = IgnoredArgs::parse_lenient();
    logging::init_from_env();

    debug!("resource-reader v{} starting", VERSION);
    debug!("Ignored arguments: {:?}", args.rest);

    let config = ProbeConfig::default();
    let bundle = EmbeddedBundle::new();
    debug!(resources = ?bundle.names(), "Bundled resources");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Faults are reported, never turned into a failing exit status
    if let Err(e) = read_resource(&bundle, config.resource_name(), &mut out) {
        eprintln!("{:?}", anyhow::Error::new(e));
    }
}
