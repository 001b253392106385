mod app;
mod input;
mod view;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, IsTerminal};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchOptions {
    pub seed: Option<u64>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let mut app = App::bootstrap(options.seed)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| anyhow::anyhow!("enable raw mode: {err}"))?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    run(parse_options(args))
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut seed = None;
    let mut idx = 0usize;
    while idx < args.len() {
        if args[idx].as_str() == "--seed" {
            if let Some(value) = args.get(idx + 1) {
                seed = value.parse::<u64>().ok();
                idx += 1;
            }
        }
        idx += 1;
    }
    LaunchOptions { seed }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(120);
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("the autonoma cui needs an interactive terminal");
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
