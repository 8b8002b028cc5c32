#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
use dayplan_app::{
    setup::{generate_native_options, setup_cc, DataPath, DataPathType},
    Args, DayPlanApp,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn setup_logging(path: &DataPath) -> Option<WorkerGuard> {
    use tracing_appender::{
        non_blocking,
        rolling::{RollingFileAppender, Rotation},
    };
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dayplan=info"));

    let log_path = path.path(DataPathType::Log);
    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(format!("dayplan-{}.log", env!("CARGO_PKG_VERSION")))
        .build(&log_path)
    {
        Ok(appender) => appender,
        Err(err) => {
            // stdout only
            tracing_subscriber::fmt().with_env_filter(env_filter()).init();
            warn!("file logging disabled, {}: {err}", log_path.display());
            return None;
        }
    };

    let (non_blocking_writer, guard) = non_blocking(file_appender);

    // Log to stdout (if you run with `RUST_LOG=debug`).
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    // Create the file layer (writes to the file)
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(env_filter())
        .init();

    Some(guard)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (parsed_args, unrecognized) = Args::parse(&args);

    let path = parsed_args
        .datapath
        .as_ref()
        .map(DataPath::new)
        .unwrap_or_default();

    // keep the guard alive so buffered log lines get flushed on exit
    let _log_guard = setup_logging(&path);

    for arg in &unrecognized {
        warn!("unrecognized argument: {arg}");
    }

    info!("starting dayplan {}", env!("CARGO_PKG_VERSION"));

    let is_mobile = parsed_args.is_mobile();
    let light = parsed_args.is_light();

    let res = eframe::run_native(
        "Day Planner",
        generate_native_options(is_mobile),
        Box::new(move |cc| {
            setup_cc(&cc.egui_ctx, is_mobile, light);
            Ok(Box::new(DayPlanApp::new(&parsed_args)))
        }),
    );

    if let Err(err) = res {
        tracing::error!("eframe exited with an error: {err}");
    }
}
