use mkicns::{BuildConfig, SystemRunner, build_icns, logger};

fn main() {
    logger::init();

    let config = BuildConfig::default();
    if let Err(e) = build_icns(&config, &SystemRunner) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
