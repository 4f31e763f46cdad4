//! Foreground page layout and painting.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use starfolio_background::{
    BACKDROP_CENTER, CELL_HEIGHT_PX, CELL_WIDTH_PX, OrbitRings, blend,
    motion::{Transition, Tween},
};
use starfolio_core::{ColorTheme, Easing};

use crate::content::Portfolio;
use crate::pointer::{HitMap, Target};

/// Resting indent of the hero block, in cells.
const HERO_INDENT: i32 = 8;
/// Indent of section bodies.
const BODY_INDENT: usize = 4;
/// Largest outer orbit radius, in cells.
const MAX_ORBIT_RX: f64 = 28.0;

const WHITE: (u8, u8, u8) = (241, 245, 249);
const SLATE_300: (u8, u8, u8) = (203, 213, 225);
const SLATE_400: (u8, u8, u8) = (148, 163, 184);
const SLATE_500: (u8, u8, u8) = (100, 116, 139);
const INDIGO_100: (u8, u8, u8) = (224, 231, 255);
const INDIGO_300: (u8, u8, u8) = (165, 180, 252);
const INDIGO_400: (u8, u8, u8) = (129, 140, 248);
const INDIGO_500: (u8, u8, u8) = (99, 102, 241);
const INDIGO_600: (u8, u8, u8) = (79, 70, 229);
const PURPLE_600: (u8, u8, u8) = (147, 51, 234);
const BLUE_600: (u8, u8, u8) = (37, 99, 235);
const PINK_600: (u8, u8, u8) = (219, 39, 119);

/// Inputs for laying out one frame of the page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: ColorTheme,
    pub year: i32,
    /// Seconds since the page appeared, on the animation clock.
    pub elapsed: f64,
    pub selected: Option<usize>,
    pub show_orbits: bool,
}

/// A clickable link button on a page line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub line: usize,
    pub col: u16,
    pub width: u16,
    pub link: usize,
}

/// Where the orbit rings sit, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitSpot {
    line: usize,
    col: u16,
    rx: f64,
    ry: f64,
}

/// The laid-out page: styled lines plus the interactive and decorative
/// elements anchored to them.
#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<Line<'static>>,
    buttons: Vec<Button>,
    orbit: Option<OrbitSpot>,
}

fn hero_fade() -> Tween {
    Tween::between(0.0, 1.0, Transition::new(0.9).easing(Easing::EaseInOut))
}

fn hero_slide() -> Tween {
    Tween::between(-50.0, 0.0, Transition::new(0.9).easing(Easing::EaseInOut))
}

fn badge_fade() -> Tween {
    Tween::between(0.0, 1.0, Transition::new(0.9).delay(0.2))
}

fn badge_scale() -> Tween {
    Tween::between(0.8, 1.0, Transition::new(0.9).delay(0.2))
}

fn skill_fade(index: usize) -> Tween {
    Tween::between(0.0, 1.0, Transition::new(0.4).delay(index as f64 * 0.1))
}

/// Pixels a skill card sits below its resting row.
fn skill_rise(index: usize) -> Tween {
    Tween::between(20.0, 0.0, Transition::new(0.4).delay(index as f64 * 0.1))
}

fn experience_fade() -> Tween {
    Tween::between(0.0, 1.0, Transition::new(0.4).easing(Easing::EaseInOut))
}

fn experience_slide() -> Tween {
    Tween::between(-20.0, 0.0, Transition::new(0.4).easing(Easing::EaseInOut))
}

/// Fade a colour towards the backdrop.
fn faded(rgb: (u8, u8, u8), opacity: f64) -> Color {
    blend(rgb, BACKDROP_CENTER, opacity)
}

fn theme_rgb(theme: ColorTheme) -> (u8, u8, u8) {
    match theme.color() {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => WHITE,
    }
}

fn pad(width: usize) -> Span<'static> {
    Span::raw(" ".repeat(width))
}

/// Greedy word wrap.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl Page {
    pub fn build(ctx: &PageContext, width: u16) -> Self {
        let mut page = Page {
            lines: Vec::new(),
            buttons: Vec::new(),
            orbit: None,
        };
        let width = width as usize;
        page.hero(ctx, width);
        page.badge(ctx, width);
        page.about(ctx, width);
        page.skills(ctx, width);
        page.experience(ctx, width);
        page.projects(ctx);
        page.footer(ctx, width);
        page
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn hero(&mut self, ctx: &PageContext, width: usize) {
        let opacity = hero_fade().sample(ctx.elapsed);
        let shift = (hero_slide().sample(ctx.elapsed) / CELL_WIDTH_PX).round() as i32;
        let indent = (HERO_INDENT + shift).max(0) as usize;
        let portfolio = ctx.portfolio;

        self.blank();
        self.lines.push(Line::from(vec![
            pad(indent),
            Span::styled(
                portfolio.name.clone(),
                Style::new()
                    .fg(faded(theme_rgb(ctx.theme), opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.lines.push(Line::from(vec![
            pad(indent),
            Span::styled("▌ ", Style::new().fg(faded(INDIGO_500, opacity))),
            Span::styled(
                portfolio.title.clone(),
                Style::new().fg(faded(INDIGO_300, opacity)),
            ),
        ]));
        self.blank();

        let text_width = width.saturating_sub(indent + 2);
        for text in &portfolio.tagline {
            for row in wrap(text, text_width) {
                self.lines.push(Line::from(vec![
                    pad(indent),
                    Span::styled(row, Style::new().fg(faded(SLATE_300, opacity))),
                ]));
            }
        }
        self.blank();

        let line = self.lines.len();
        let mut spans = vec![pad(indent)];
        let mut col = indent;
        for (link, item) in portfolio.links.iter().enumerate() {
            let label = format!("[ {} ]", item.label);
            let style = if ctx.selected == Some(link) {
                Style::new()
                    .fg(Color::Rgb(WHITE.0, WHITE.1, WHITE.2))
                    .bg(Color::Rgb(INDIGO_600.0, INDIGO_600.1, INDIGO_600.2))
            } else {
                Style::new().fg(faded(INDIGO_100, opacity))
            };
            let span = Span::styled(label, style);
            let span_width = span.width();
            self.buttons.push(Button {
                line,
                col: col as u16,
                width: span_width as u16,
                link,
            });
            spans.push(span);
            spans.push(pad(2));
            col += span_width + 2;
        }
        self.lines.push(Line::from(spans));
        self.blank();
    }

    /// Initials badge, with room for the orbit rings around it.
    fn badge(&mut self, ctx: &PageContext, width: usize) {
        let opacity = badge_fade().sample(ctx.elapsed);
        let scale = badge_scale().sample(ctx.elapsed);
        let initials = ctx.portfolio.initials();

        let rx = (width as f64 / 2.0 - 2.0).clamp(6.0, MAX_ORBIT_RX);
        let ry = rx / 2.0;
        let rows = (2.0 * ry).ceil() as usize + 3;
        let first = self.lines.len();
        let center = first + rows / 2;

        let inner = initials.chars().count() + 2;
        let boxed = [
            format!("╭{}╮", "─".repeat(inner)),
            format!("│ {initials} │"),
            format!("╰{}╯", "─".repeat(inner)),
        ];
        let left = (width / 2).saturating_sub((inner + 2) / 2);
        let style = Style::new()
            .fg(faded(INDIGO_500, opacity))
            .add_modifier(Modifier::BOLD);

        for line in first..first + rows {
            let offset = line as isize - center as isize;
            if (-1..=1).contains(&offset) {
                let text = boxed[(offset + 1) as usize].clone();
                self.lines
                    .push(Line::from(vec![pad(left), Span::styled(text, style)]));
            } else {
                self.blank();
            }
        }

        if ctx.show_orbits {
            self.orbit = Some(OrbitSpot {
                line: center,
                col: (width / 2) as u16,
                rx: rx * scale,
                ry: ry * scale,
            });
        }
    }

    fn heading(&mut self, text: &str, bar: (u8, u8, u8)) {
        self.blank();
        self.lines.push(Line::from(vec![
            pad(2),
            Span::styled("▍ ", Style::new().fg(Color::Rgb(bar.0, bar.1, bar.2))),
            Span::styled(
                text.to_string(),
                Style::new()
                    .fg(Color::Rgb(WHITE.0, WHITE.1, WHITE.2))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.blank();
    }

    fn about(&mut self, ctx: &PageContext, width: usize) {
        let about = &ctx.portfolio.about;
        self.heading(&about.heading, INDIGO_600);
        let text_width = width.saturating_sub(BODY_INDENT * 2);
        for (i, paragraph) in about.paragraphs.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            for row in wrap(paragraph, text_width) {
                self.lines.push(Line::from(vec![
                    pad(BODY_INDENT),
                    Span::styled(row, Style::new().fg(faded(SLATE_300, 1.0))),
                ]));
            }
        }
    }

    /// Skill cards flow left to right, each fading in and rising after the
    /// previous. Every row keeps a spare line below it for cards still rising.
    fn skills(&mut self, ctx: &PageContext, width: usize) {
        let skills = &ctx.portfolio.skills;
        self.heading(&skills.heading, PURPLE_600);

        let limit = width.saturating_sub(2).max(BODY_INDENT + 1);
        let mut settled = vec![pad(BODY_INDENT)];
        let mut rising = vec![pad(BODY_INDENT)];
        let mut col = BODY_INDENT;
        for (i, skill) in skills.items.iter().enumerate() {
            let card = format!("[ {skill} ]");
            let card_width = Span::raw(card.as_str()).width();
            if col > BODY_INDENT && col + card_width > limit {
                self.lines.push(Line::from(std::mem::take(&mut settled)));
                self.lines.push(Line::from(std::mem::take(&mut rising)));
                settled.push(pad(BODY_INDENT));
                rising.push(pad(BODY_INDENT));
                col = BODY_INDENT;
            }
            let opacity = skill_fade(i).sample(ctx.elapsed);
            let lowered = (skill_rise(i).sample(ctx.elapsed) / CELL_HEIGHT_PX).round();
            let span = Span::styled(card, Style::new().fg(faded(SLATE_300, opacity)));
            if lowered >= 1.0 {
                settled.push(pad(card_width));
                rising.push(span);
            } else {
                settled.push(span);
                rising.push(pad(card_width));
            }
            settled.push(pad(2));
            rising.push(pad(2));
            col += card_width + 2;
        }
        self.lines.push(Line::from(settled));
        self.lines.push(Line::from(rising));
    }

    fn experience(&mut self, ctx: &PageContext, width: usize) {
        let experience = &ctx.portfolio.experience;
        self.heading(&experience.heading, BLUE_600);
        let text_width = width.saturating_sub(BODY_INDENT + 6);
        let opacity = experience_fade().sample(ctx.elapsed);
        let shift = (experience_slide().sample(ctx.elapsed) / CELL_WIDTH_PX).round() as isize;
        let indent = BODY_INDENT.saturating_add_signed(shift);

        for (i, entry) in experience.entries.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.lines.push(Line::from(vec![
                pad(indent),
                Span::styled("● ", Style::new().fg(faded(INDIGO_500, opacity))),
                Span::styled(
                    entry.role.clone(),
                    Style::new()
                        .fg(faded(WHITE, opacity))
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            self.lines.push(Line::from(vec![
                pad(indent + 2),
                Span::styled(
                    format!("{} • {}", entry.company, entry.period),
                    Style::new().fg(faded(INDIGO_400, opacity)),
                ),
            ]));
            for highlight in &entry.highlights {
                for (j, row) in wrap(highlight, text_width).into_iter().enumerate() {
                    let bullet = if j == 0 { "- " } else { "  " };
                    self.lines.push(Line::from(vec![
                        pad(indent + 2),
                        Span::styled(
                            format!("{bullet}{row}"),
                            Style::new().fg(faded(SLATE_300, opacity)),
                        ),
                    ]));
                }
            }
        }
    }

    fn projects(&mut self, ctx: &PageContext) {
        let projects = &ctx.portfolio.projects;
        self.heading(&projects.heading, PINK_600);
        for (i, project) in projects.entries.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.lines.push(Line::from(vec![
                pad(BODY_INDENT),
                Span::styled(
                    "◆ ",
                    Style::new().fg(Color::Rgb(PINK_600.0, PINK_600.1, PINK_600.2)),
                ),
                Span::styled(
                    project.title.clone(),
                    Style::new()
                        .fg(faded(WHITE, 1.0))
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            self.lines.push(Line::from(vec![
                pad(BODY_INDENT + 2),
                Span::styled(project.tech.clone(), Style::new().fg(faded(SLATE_400, 1.0))),
            ]));
        }
    }

    fn footer(&mut self, ctx: &PageContext, width: usize) {
        let text = format!(
            "{} © {} {}",
            ctx.portfolio.footer, ctx.year, ctx.portfolio.name
        );
        let text_width = Span::raw(text.as_str()).width();
        self.blank();
        self.blank();
        self.lines.push(Line::from(vec![
            pad(width.saturating_sub(text_width) / 2),
            Span::styled(text, Style::new().fg(faded(SLATE_500, 1.0))),
        ]));
        self.blank();
    }

    /// Paint the page into `area`, scrolled down by `scroll` lines, and
    /// register the visible buttons in `hits`.
    pub fn render(
        &self,
        buf: &mut Buffer,
        area: Rect,
        scroll: usize,
        elapsed: f64,
        hits: &mut HitMap,
    ) {
        if let Some(spot) = self.orbit {
            let center = (
                area.x as i32 + spot.col as i32,
                area.y as i32 + spot.line as i32 - scroll as i32,
            );
            OrbitRings::new(center, spot.rx, spot.ry).render(buf, area, elapsed);
        }

        let visible = scroll..scroll + area.height as usize;
        for (i, line) in self.lines.iter().enumerate() {
            if visible.contains(&i) {
                paint_line(buf, area, area.y + (i - scroll) as u16, line);
            }
        }

        for button in &self.buttons {
            if !visible.contains(&button.line) {
                continue;
            }
            let rect = Rect::new(
                area.x.saturating_add(button.col),
                area.y + (button.line - scroll) as u16,
                button.width,
                1,
            )
            .intersection(area);
            hits.register(rect, Target::Link(button.link));
        }
    }
}

/// Paint one line without erasing what is behind unstyled spaces.
fn paint_line(buf: &mut Buffer, area: Rect, y: u16, line: &Line) {
    let mut x = area.x;
    for span in &line.spans {
        for grapheme in span.styled_graphemes(line.style) {
            if x >= area.right() {
                return;
            }
            let transparent = grapheme.symbol == " " && grapheme.style.bg.is_none();
            if !transparent {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(grapheme.symbol).set_style(grapheme.style);
                }
            }
            let width = Span::raw(grapheme.symbol).width().max(1) as u16;
            x = x.saturating_add(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(portfolio: &Portfolio, elapsed: f64) -> PageContext<'_> {
        PageContext {
            portfolio,
            theme: ColorTheme::default(),
            year: 2026,
            elapsed,
            selected: None,
            show_orbits: true,
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("one two three four five", 10),
            vec!["one two", "three four", "five"]
        );
        assert!(wrap("", 20).is_empty());
        assert_eq!(wrap("unbreakableword", 10), vec!["unbreakableword"]);
    }

    #[test]
    fn test_buttons_on_one_line() {
        let portfolio = Portfolio::builtin().unwrap();
        let page = Page::build(&context(&portfolio, 5.0), 100);
        let buttons = page.buttons();
        assert_eq!(buttons.len(), 3);
        assert!(buttons.iter().all(|b| b.line == buttons[0].line));
        assert_eq!(buttons[0].col, HERO_INDENT as u16);
        assert!(buttons[1].col > buttons[0].col + buttons[0].width);
    }

    #[test]
    fn test_hero_slides_in() {
        let portfolio = Portfolio::builtin().unwrap();
        let start = Page::build(&context(&portfolio, 0.0), 100);
        let settled = Page::build(&context(&portfolio, 5.0), 100);
        // -50 px is six cells left of the resting indent
        assert_eq!(start.buttons()[0].col, 2);
        assert_eq!(settled.buttons()[0].col, 8);
    }

    #[test]
    fn test_footer_uses_supplied_year() {
        let portfolio = Portfolio::builtin().unwrap();
        let mut ctx = context(&portfolio, 5.0);
        ctx.year = 1999;
        let page = Page::build(&ctx, 100);
        let footer = page
            .lines()
            .iter()
            .map(text_of)
            .find(|t| t.contains('©'))
            .unwrap();
        assert!(footer.contains("© 1999 Vega Lin"));
    }

    #[test]
    fn test_skills_wrap_on_narrow_width() {
        let portfolio = Portfolio::builtin().unwrap();
        let wide = Page::build(&context(&portfolio, 5.0), 160);
        let narrow = Page::build(&context(&portfolio, 5.0), 40);
        let rows = |page: &Page| {
            page.lines()
                .iter()
                .filter(|l| text_of(l).contains("[ "))
                .count()
        };
        // the link button row plus skill rows
        assert_eq!(rows(&wide), 2);
        assert!(rows(&narrow) > 2);
    }

    fn line_of(page: &Page, needle: &str) -> usize {
        page.lines()
            .iter()
            .position(|l| text_of(l).contains(needle))
            .unwrap()
    }

    #[test]
    fn test_skill_cards_rise_in_turn() {
        let portfolio = Portfolio::builtin().unwrap();
        // Line of a card relative to the section heading
        let row = |page: &Page, card: &str| line_of(page, card) - line_of(page, "Tech Arsenal");

        let start = Page::build(&context(&portfolio, 0.0), 160);
        let settled = Page::build(&context(&portfolio, 5.0), 160);
        assert_eq!(row(&settled, "[ React ]"), 2);
        assert_eq!(row(&start, "[ React ]"), 3);

        // The first card has risen while the second is still on its way
        let midway = Page::build(&context(&portfolio, 0.3), 160);
        assert_eq!(row(&midway, "[ React ]"), 2);
        assert_eq!(row(&midway, "[ Spring Boot ]"), 3);

        // Cards keep their column while rising
        let col = |page: &Page| {
            let line = &page.lines()[line_of(page, "[ MySQL ]")];
            text_of(line).find("[ MySQL ]")
        };
        assert_eq!(col(&start), col(&settled));
    }

    #[test]
    fn test_experience_slides_in() {
        let portfolio = Portfolio::builtin().unwrap();
        let role = "● Associate Software Developer";
        let start = Page::build(&context(&portfolio, 0.0), 100);
        let settled = Page::build(&context(&portfolio, 5.0), 100);
        let indent = |page: &Page| text_of(&page.lines()[line_of(page, role)]).find('●');
        // -20 px rounds to three cells left of the body indent
        assert_eq!(indent(&start), Some(BODY_INDENT - 3));
        assert_eq!(indent(&settled), Some(BODY_INDENT));

        let faded_out = start.lines()[line_of(&start, role)].spans[2].style.fg;
        assert_eq!(faded_out, Some(faded(WHITE, 0.0)));
    }

    #[test]
    fn test_render_registers_visible_buttons() {
        let portfolio = Portfolio::builtin().unwrap();
        let page = Page::build(&context(&portfolio, 5.0), 100);
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();

        page.render(&mut buf, area, 0, 5.0, &mut hits);
        assert_eq!(hits.regions().count(), 3);
        let b = page.buttons()[1];
        assert_eq!(hits.target_at(b.col, b.line as u16), Some(Target::Link(1)));

        hits.clear();
        page.render(&mut buf, area, b.line + 1, 5.0, &mut hits);
        assert_eq!(hits.regions().count(), 0);
    }

    #[test]
    fn test_paint_line_keeps_background_under_spaces() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        buf[(1, 0)].set_char('✦');
        let line = Line::from(vec![pad(2), Span::raw("ab")]);
        paint_line(&mut buf, area, 0, &line);
        assert_eq!(buf[(1, 0)].symbol(), "✦");
        assert_eq!(buf[(2, 0)].symbol(), "a");
        assert_eq!(buf[(3, 0)].symbol(), "b");
    }
}
