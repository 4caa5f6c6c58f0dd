/// Logging setup: writes to logs/nexutha.log, or stderr if the file cannot be opened
use log::LevelFilter;
use std::io::Write;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/nexutha.log";

pub fn init() {
    let mut builder = env_logger::Builder::new();

    // RUST_LOG wins when set
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // UI stack is too chatty at info
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("winit", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if !std::path::Path::new(LOG_DIR).exists() {
        let _ = std::fs::create_dir(LOG_DIR);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE);

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr);
            eprintln!("Cannot open {}: {}, logging to stderr", LOG_FILE, e);
        }
    }

    if builder.try_init().is_err() {
        return;
    }

    log::info!("Logging initialized ✓");
}
