//! Night in Palermo
//!
//! A pass-and-play terminal moderator for the party game of killers,
//! a cop and the town.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use night_in_palermo::config::AppConfig;
use night_in_palermo::logging::setup_logging;
use night_in_palermo::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    let _guard = setup_logging(&config)?;
    tracing::info!(version = night_in_palermo::VERSION, seed = ?config.seed, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Main loop
    let outcome = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    outcome?;

    tracing::info!(games = app.session.history().len(), "exiting");

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Night in Palermo!                  ║");
    println!("║                                                        ║");
    println!("║  Sleep well. Lock your door.                           ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if !app.handle_input()? {
            break;
        }
        app.tick();
    }
    Ok(())
}
