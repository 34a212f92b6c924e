use std::time::{Duration, Instant};

use byeol_config::Config;
use byeol_core::ColorTheme;
use byeol_field::{FieldState, render_hud};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::Stylize,
    text::Line,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// All animation state.
    field: FieldState,
    /// Reduce-motion flag, polled by the field every frame.
    reduce_motion: bool,
    /// Current accent theme.
    theme: ColorTheme,
    /// Event poll timeout, which paces the frame loop.
    frame_interval: Duration,
    /// Start of the session, for the HUD cycle clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            field: FieldState::new(0, 0),
            reduce_motion: config.reduce_motion,
            theme: config.theme(),
            frame_interval: config.frame_interval(),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        let size = terminal.size()?;
        self.field.resize(size.width, size.height);
        self.started = Instant::now();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.field.advance(self.reduce_motion);
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the sky, the scan HUD overlay, and the help line.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;

        self.field.render(frame, self.theme);
        render_hud(frame, elapsed_ms, self.reduce_motion, self.theme);

        let area = frame.area();
        if area.height < 2 {
            return;
        }
        let accent = self.theme.color();
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "m".bold().fg(accent),
            if self.reduce_motion {
                " motion off  ".dark_gray()
            } else {
                " motion on  ".dark_gray()
            },
            "c".bold().fg(accent),
            " cycle theme  ".dark_gray(),
            "r".bold().fg(accent),
            " reseed".dark_gray(),
        ])
        .centered();
        let help_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(help, help_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Drains input for the remainder of the frame window, so key repeat
    /// paces the terminal rather than the simulation.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let frame_started = Instant::now();
        loop {
            let budget = remaining_budget(frame_started, self.frame_interval);
            if !event::poll(budget)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.field.resize(cols, rows),
                _ => {}
            }
            if !self.running || budget.is_zero() {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.reduce_motion = !self.reduce_motion,
            (_, KeyCode::Char('c')) => self.theme = self.theme.next(),
            (_, KeyCode::Char('r')) => self.field.reseed(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Time left in the current frame's input window.
fn remaining_budget(frame_started: Instant, interval: Duration) -> Duration {
    interval.saturating_sub(frame_started.elapsed())
}
