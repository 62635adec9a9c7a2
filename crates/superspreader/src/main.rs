fn main() {
    env_logger::init();

    log::info!("Starting Super Spreader");
    if let Err(e) = superspreader::run() {
        eprintln!("Fatal error: {e}");
        std::process::exit(1);
    }
}
