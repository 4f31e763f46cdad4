use std::io::{self, stdout};
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use color_eyre::eyre::Report;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use starfolio_background::BackgroundLayer;
use starfolio_config::Config;
use starfolio_core::{AnimationSpeed, ColorTheme};
use tracing::{debug, info};

mod content;
mod logging;
mod page;
mod pointer;

use content::Portfolio;
use page::{Page, PageContext};
use pointer::{HitMap, Target};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    if let Some(dir) = starfolio_config::data_dir() {
        let log_path = logging::init(&dir, &config.log_level)?;
        info!(path = %log_path.display(), "logging to file");
    }
    let portfolio = Portfolio::load(config.content.as_deref())?;
    let year = config.year.unwrap_or_else(|| Local::now().year());
    info!(?config.seed, year, "starting starfolio");

    let terminal = ratatui::init();
    let app = App::new(config, portfolio, year);
    in_session(
        execute!(stdout(), EnableMouseCapture),
        || app.run(terminal),
        || {
            let released = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
            released
        },
    )
}

/// Run `body` once mouse capture is on. `teardown` always runs, also when
/// capture could not be enabled or `body` failed; the first error wins.
fn in_session(
    capture: io::Result<()>,
    body: impl FnOnce() -> color_eyre::Result<()>,
    teardown: impl FnOnce() -> io::Result<()>,
) -> color_eyre::Result<()> {
    let result = capture.map_err(Report::from).and_then(|()| body());
    let released = teardown();
    result?;
    released?;
    Ok(())
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    portfolio: Portfolio,
    /// Footer year, fixed at startup.
    year: i32,
    /// Source for every starfield mount.
    rng: StdRng,
    background: BackgroundLayer,
    show_asteroids: bool,
    show_orbits: bool,
    /// Animation clock in seconds, scaled by `speed`.
    clock: f64,
    /// Animation clock reading when the background was last mounted.
    mounted_at: f64,
    last_tick: Instant,
    tick: Duration,
    speed: AnimationSpeed,
    color_theme: ColorTheme,
    /// First page line shown at the top of the viewport.
    scroll: usize,
    /// Largest useful scroll for the last rendered frame.
    max_scroll: usize,
    /// Pointer regions from the last rendered frame.
    hits: HitMap,
    /// Link selected by the last click.
    selected: Option<usize>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, portfolio: Portfolio, year: i32) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let background = BackgroundLayer::mount(&mut rng).with_asteroids(config.show_asteroids);

        Self {
            running: false,
            portfolio,
            year,
            rng,
            background,
            show_asteroids: config.show_asteroids,
            show_orbits: config.show_orbits,
            clock: 0.0,
            mounted_at: 0.0,
            last_tick: Instant::now(),
            tick: Duration::from_millis(config.tick_ms),
            speed: config.speed,
            color_theme: config.theme,
            scroll: 0,
            max_scroll: 0,
            hits: HitMap::default(),
            selected: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.last_tick = Instant::now();
        while self.running {
            self.advance_clock();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!("quitting");
        Ok(())
    }

    /// Move the animation clock forward by the real time since the last frame.
    fn advance_clock(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.clock += delta.as_secs_f64() * self.speed.time_scale();
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [content, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        // Background first; everything after paints over it
        self.background.render(frame, self.clock - self.mounted_at);

        let ctx = PageContext {
            portfolio: &self.portfolio,
            theme: self.color_theme,
            year: self.year,
            elapsed: self.clock,
            selected: self.selected,
            show_orbits: self.show_orbits,
        };
        let page = Page::build(&ctx, content.width);
        self.max_scroll = page.height().saturating_sub(content.height as usize);
        self.scroll = self.scroll.min(self.max_scroll);

        self.hits.clear();
        page.render(
            frame.buffer_mut(),
            content,
            self.scroll,
            self.clock,
            &mut self.hits,
        );

        frame.render_widget(self.status_line(), status);
    }

    /// Key help plus the selected link, if any.
    fn status_line(&self) -> Line<'static> {
        let color = self.color_theme.color();
        let mut spans = vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "j/k".bold().fg(color),
            " scroll  ".dark_gray(),
            "c".bold().fg(color),
            " color  ".dark_gray(),
            "s".bold().fg(color),
            format!(" speed: {}  ", self.speed.label()).dark_gray(),
            "r".bold().fg(color),
            " new stars".dark_gray(),
        ];
        if let Some(link) = self.selected.and_then(|i| self.portfolio.links.get(i)) {
            spans.push("  → ".dark_gray());
            spans.push(link.url.clone().fg(color));
        }
        Line::from(spans)
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => debug!(width, height, "resized"),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroll_by(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(10),
            (_, KeyCode::PageUp) => self.scroll_by(-10),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.scroll = 0,
            (_, KeyCode::End | KeyCode::Char('G')) => self.scroll = self.max_scroll,
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('r')) => self.remount_background(),
            _ => {}
        }
    }

    /// Handles mouse events: clicks resolve through the hit map only.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => {}
        }
    }

    /// Route a click to the foreground element under it, if any.
    fn click(&mut self, column: u16, row: u16) -> Option<Target> {
        let target = self.hits.target_at(column, row);
        match target {
            Some(Target::Link(index)) => {
                if let Some(link) = self.portfolio.links.get(index) {
                    info!(label = %link.label, url = %link.url, "link selected");
                }
                self.selected = Some(index);
            }
            None => self.selected = None,
        }
        target
    }

    fn scroll_by(&mut self, lines: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(lines)
            .min(self.max_scroll);
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        debug!(speed = self.speed.label(), "animation speed changed");
    }

    /// Drop the current background and mount a fresh one.
    fn remount_background(&mut self) {
        self.background = BackgroundLayer::mount(&mut self.rng).with_asteroids(self.show_asteroids);
        self.mounted_at = self.clock;
        info!(at = self.clock, "background remounted");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
