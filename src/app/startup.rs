//! Application startup: arguments, configuration, logging, then the desk loop

use crate::app::cli::Args;
use crate::app::render::TerminalView;
use crate::app::runtime;
use crate::app::session::Session;
use crate::core::logging::init_logging;
use crate::core::shutdown::ShutdownCoordinator;
use crate::core::time::SystemClock;
use crate::core::version::long_version;
use crate::notifications::api::EventFilter;
use crate::queue::api::HelpDesk;
use std::sync::Arc;

/// Run the application and return the process exit code
pub fn startup() -> i32 {
    let args = Args::parse_from_env();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: could not start the async runtime: {}", e);
            return 1;
        }
    };

    let code = runtime.block_on(run_desk(args));
    // the stdin reader may still be parked on a blocking read
    runtime.shutdown_background();
    code
}

async fn run_desk(mut args: Args) -> i32 {
    // Configuration comes first so the file can choose log settings
    let loaded = match args.load_config_file().await {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let color = args.use_color();
    colored::control::set_override(color);

    let log_file = args.log_file_spec();
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        color,
    ) {
        eprintln!("Error: could not initialise logging: {}", e);
        return 1;
    }

    log::info!("helpqueue {} starting", long_version());
    if let Some(path) = loaded {
        log::info!("Loaded configuration from {}", path.display());
    }

    let settings = args.engine_settings();
    let mut desk = HelpDesk::new(Arc::new(SystemClock), settings);
    let mut events = desk.subscribe("terminal", EventFilter::RenderAndAlert);
    let mut session = Session::new(desk, args.announcement.clone(), color);
    let mut view = TerminalView::new(std::io::stdout(), color);

    let result = ShutdownCoordinator::guard_with_coordinator(|coordinator, mut shutdown_rx| async move {
        runtime::run(
            &mut session,
            &mut view,
            &mut events,
            tokio::io::stdin(),
            &coordinator,
            &mut shutdown_rx,
        )
        .await
    })
    .await;

    match result {
        Ok(()) => {
            log::info!("helpqueue stopped");
            0
        }
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            1
        }
    }
}
