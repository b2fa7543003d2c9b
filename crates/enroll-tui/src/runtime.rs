use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;

use enroll_core::runtime::CoreRuntime;

use crate::input::{handle_key, handle_paste};
use crate::render::render;
use crate::ui::{App, Tui};

/// Spinner frames and toast expiry advance on this interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_app(terminal: &mut Tui, app: &mut App, core_runtime: &mut CoreRuntime) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            if app.pending_quit {
                                app.quit();
                            } else {
                                app.pending_quit = true;
                            }
                        } else {
                            app.pending_quit = false;
                            handle_key(app, key)?;
                        }
                    }
                    Some(Ok(Event::Paste(text))) => handle_paste(app, &text),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            Some(event) = core_runtime.next_event() => {
                tracing::debug!(?event, "core event");
                app.handle_core_event(event);
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}
