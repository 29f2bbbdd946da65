use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use valentine_core::{AppConfig, Command, Phase};
use valentine_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input,
    keymap::Keymap,
    load_theme,
    widgets::{CurveWidget, HudWidget, StartScreenWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, initial_speed: Option<f64>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Valentine")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.theme);

    let events = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.splash_fps,
        config.animation.fps,
    );
    let mut app = App::new(config, theme);
    if let Some(speed) = initial_speed {
        app.controller.set_speed(speed);
    }

    let result = run_loop(&mut terminal, &mut app, &events, &keymap);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            if app.phase() == Phase::Idle {
                StartScreenWidget::render(frame, main_layout[0], app);
            } else {
                let content = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(1), Constraint::Length(3)])
                    .split(main_layout[0]);
                CurveWidget::render(frame, content[0], app);
                HudWidget::render(frame, content[1], app);
            }

            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // Handle events at a cadence matched to the current phase
        if let Some(event) = events.next(app.phase())? {
            match event {
                AppEvent::Key(key) => {
                    if let Some(cmd) = input::route(key, app.phase(), keymap) {
                        app.on_command(cmd);
                    }
                }
                AppEvent::Click(_) => {
                    // A click anywhere on the splash screen starts the animation
                    if app.phase() == Phase::Idle {
                        app.on_command(Command::Start);
                    }
                }
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        // Advance by wall-clock time regardless of which event woke us
        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        app.on_tick(dt);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
