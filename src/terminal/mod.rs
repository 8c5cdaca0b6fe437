pub mod events;
pub mod state;
pub mod ui;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

use crate::app::App;
use crate::snow::Snowfall;
use crate::terminal::events::handle_key;
use crate::terminal::state::ViewState;

/// Takes over the terminal until the user quits. Every frame draws the UI
/// and then the snow; input is polled every `tick` so the snow keeps moving
/// between key presses.
pub fn run_tui(app: &mut App, snow: &Snowfall, tick: Duration) -> Result<()> {
    color_eyre::install().map_err(|e| anyhow!("installing error hooks: {e}"))?;

    let terminal = ratatui::init();
    let result = run(terminal, app, snow, tick);
    ratatui::restore();

    result
}

fn run(
    mut terminal: DefaultTerminal,
    app: &mut App,
    snow: &Snowfall,
    tick: Duration,
) -> Result<()> {
    let started = Instant::now();
    let mut state = ViewState::new();

    loop {
        terminal.draw(|f| {
            ui::render(f, app, &state);
            f.render_widget(snow.at(started.elapsed()), f.area());
        })?;

        if !event::poll(tick)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(key, &mut state, app) {
                debug!("quit requested");
                break;
            }
        }
    }
    Ok(())
}
