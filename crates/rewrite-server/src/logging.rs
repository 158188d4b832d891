use std::io::Write;

/// Default filter when `RUST_LOG` is not set.
fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug,actix_server=info,hyper=info,reqwest=info"
    } else {
        "info"
    }
}

/// Initialize the global logger with timestamped, target-tagged lines.
pub fn init_logging(debug: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter(debug)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
