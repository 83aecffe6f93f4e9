//! Front-end event loop
//!
//! Single-threaded: one `select!` multiplexes input lines, a driver interval
//! that fires due engine timers, engine events for the presentation, and the
//! shutdown signal. The engine is only ever touched from this loop.

use crate::app::render::TerminalView;
use crate::app::session::{Response, Session};
use crate::core::shutdown::ShutdownCoordinator;
use crate::notifications::api::{EventReceiver, Presentation};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

/// How often due timers are checked
pub const DRIVER_INTERVAL: Duration = Duration::from_millis(250);

pub const READY_PROMPT: &str = "> ";

pub async fn run<R, W>(
    session: &mut Session,
    view: &mut TerminalView<W>,
    events: &mut EventReceiver,
    input: R,
    shutdown: &ShutdownCoordinator,
    shutdown_rx: &mut broadcast::Receiver<()>,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut lines = BufReader::new(input).lines();
    let mut driver = tokio::time::interval(DRIVER_INTERVAL);
    driver.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let welcome = session.welcome();
    print_response(view, &welcome);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    log::info!("Input closed");
                    break;
                };
                let response = session.handle_line(&line);
                // alerts raised by this line come before the reply and any re-prompt
                drain_events(view, events);
                print_response(view, &response);
                if response.quit {
                    shutdown.trigger_shutdown();
                    break;
                }
            }
            _ = driver.tick() => {
                if session.desk_mut().run_due() > 0 {
                    drain_events(view, events);
                }
            }
            Some(event) = events.recv() => view.dispatch(&event),
            _ = shutdown_rx.recv() => {
                log::info!("Shutdown requested");
                break;
            }
        }
    }

    drain_events(view, events);
    Ok(())
}

fn drain_events<W: Write>(view: &mut TerminalView<W>, events: &mut EventReceiver) {
    while let Ok(event) = events.try_recv() {
        view.dispatch(&event);
    }
}

fn print_response<W: Write>(view: &mut TerminalView<W>, response: &Response) {
    for line in &response.lines {
        view.print_line(line);
    }
    if !response.quit {
        view.print_prompt(response.prompt.as_deref().unwrap_or(READY_PROMPT));
    }
}
