use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::thread::{self, ThreadId};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableBracketedPaste)?;
    Ok(())
}

/// Whether a panic on the current thread takes down the UI. Panics on tokio
/// workers are caught by their task's `JoinHandle` and leave the UI running.
fn panics_on_ui_thread(ui_thread: ThreadId) -> bool {
    thread::current().id() == ui_thread
}

/// Restore the terminal before printing a panic from the calling (UI) thread.
/// Panics elsewhere go to the log so the screen stays intact.
pub fn install_panic_hook() {
    let ui_thread = thread::current().id();
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if !panics_on_ui_thread(ui_thread) {
            tracing::error!("background task panicked: {}", panic_info);
            return;
        }
        let _ = restore();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));
}
