// portty: a portfolio landing page for the terminal

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use portty::anim::SystemClock;
use portty::config::Config;
use portty::logging;
use portty::page::Landing;
use portty::ui::App;

#[derive(Parser)]
#[command(name = "portty")]
#[command(version)]
#[command(about = "A portfolio landing page for the terminal")]
struct Cli {
    /// TOML config file (falls back to $PORTTY_CONFIG, then built-in content)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", Config::default_template());
        return Ok(());
    }

    logging::init_tracing(cli.log_file.as_deref(), cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;
    let landing = Landing::from_config(&config).context("Invalid page configuration")?;

    logging::install_panic_hook(restore_terminal);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(landing, SystemClock::new());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed")?;
    Ok(())
}
