use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    init_tracing();

    match images2coco::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log level comes from RUST_LOG (default `info`); logs go to stderr so
/// stdout only carries the saved path.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
