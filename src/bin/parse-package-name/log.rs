use std::{fs, io, path::PathBuf, sync::Mutex};

use tracing_subscriber::{filter::EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "PPN_LOG";
const LOG_FILE_ENV: &str = "PPN_LOG_FILE";

/// Configuration of logging
///
/// Quiet unless `PPN_LOG` carries a filter; stdout stays reserved for the
/// result record either way, so events go to stderr or to the file named
/// by `PPN_LOG_FILE`.
pub fn init_logging(log_file: Option<PathBuf>) -> Result<(), std::io::Error> {
    let Ok(env_filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(());
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_thread_ids(true)
        .with_line_number(true);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let subscriber = subscriber
                .with_writer(Mutex::new(fs::File::create(path)?))
                .with_ansi(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .expect("setting default subscriber failed");
        }
        None => {
            let subscriber = subscriber.with_writer(io::stderr).with_ansi(true).finish();
            tracing::subscriber::set_global_default(subscriber)
                .expect("setting default subscriber failed");
        }
    }

    Ok(())
}

pub fn init() -> Result<(), std::io::Error> {
    init_logging(std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
}
