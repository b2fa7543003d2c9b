use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use enroll_core::config::CoreConfig;
use enroll_core::runtime::CoreRuntime;
use enroll_core::tracing_setup::init_tracing;

use enroll_tui::runtime::run_app;
use enroll_tui::ui::{self, App};

#[derive(Parser)]
#[command(name = "enroll-tui")]
#[command(about = "Terminal client for student course registration")]
struct Cli {
    /// Data directory (looked up for courses.json)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Course catalog JSON file; overrides the data directory lookup
    #[arg(long, short = 'c')]
    courses: Option<PathBuf>,

    /// Simulated latency for account creation, in milliseconds
    #[arg(long, default_value_t = 600)]
    register_delay_ms: u64,

    /// Write logs to this file (also settable via ENROLL_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn core_config(&self) -> CoreConfig {
        let config = match &self.data_dir {
            Some(dir) => CoreConfig::new(dir),
            None => CoreConfig::default(),
        };
        config
            .with_courses_file(self.courses.clone())
            .with_register_delay(Duration::from_millis(self.register_delay_ms))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    ui::terminal::install_panic_hook();

    let config = cli.core_config();
    tracing::info!(data_dir = %config.data_dir.display(), "starting");

    let mut core_runtime = CoreRuntime::new(config)?;
    let mut app = App::new(core_runtime.catalog(), core_runtime.handle());
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app, &mut core_runtime).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        tracing::error!("exited with error: {:#}", err);
        eprintln!("Error: {err}");
    }

    Ok(())
}
