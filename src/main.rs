// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS] [PAGE]

Arguments:
  [PAGE]                 Gallery page (HTML) to open; the demo page otherwise

Options:
  --lang <ID>            Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory for logs and default downloads
  -h, --help             Print this help";

/// Initializes logging to a daily rolling file and stderr.
///
/// Returns the writer guard, which must be held for the app lifetime.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,iced_gallery=debug"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let file = paths::get_logs_dir().and_then(|logs_dir| {
        std::fs::create_dir_all(&logs_dir).ok()?;
        let file_appender = tracing_appender::rolling::daily(&logs_dir, "iced_gallery.log");
        Some(tracing_appender::non_blocking(file_appender))
    });

    match file {
        Some((non_blocking, guard)) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("invalid --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("invalid --config-dir: {err}");
        None
    });
    let data_dir = args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
        eprintln!("invalid --data-dir: {err}");
        None
    });
    let page_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let flags = Flags {
        lang,
        page_path,
        data_dir,
        config_dir,
    };

    // Must run before anything resolves a directory, logging included.
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let _log_guard = init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "iced_gallery starting");

    app::run(flags)
}
