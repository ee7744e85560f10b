use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Span, Spans, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use std::collections::VecDeque;
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::xtm_color::Palette;
use crate::xtm_game::{
    Board, COLS, Config, Effect, Input, MAX_CLICKS, MIN_CLICKS, Mode, Outcome, ROWS, RoundResult,
    Session, TILE_COUNT, TileView, save_config,
};
use crate::xtm_lang::Lang;

// Tile geometry in terminal cells
const TILE_W: u16 = 5;
const TILE_H: u16 = 2;
const GAP_X: u16 = 1;
const GAP_Y: u16 = 1;
const BOARD_W: u16 = COLS as u16 * (TILE_W + GAP_X) - GAP_X;
const BOARD_H: u16 = ROWS as u16 * (TILE_H + GAP_Y) - GAP_Y;

const MIN_WIDTH: u16 = 48;
const MIN_HEIGHT: u16 = BOARD_H + 2 + 9;

const TICK_RATE: Duration = Duration::from_millis(200);

/// Visible state of one tile as last reported by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileFace {
    pub view: TileView,
    pub interactive: bool,
}

/// Render model fed only by session effects
/// End-of-round reveals are queued and released one per step by `tick`
#[derive(Debug)]
pub struct Screen {
    tiles: [TileFace; TILE_COUNT],
    start_enabled: bool,
    pending: VecDeque<Effect>,
    next_reveal: Option<Instant>,
    step: Duration,
}

impl Screen {
    pub fn new(start_enabled: bool, step: Duration) -> Self {
        Screen {
            tiles: [TileFace {
                view: TileView::Hidden,
                interactive: false,
            }; TILE_COUNT],
            start_enabled,
            pending: VecDeque::new(),
            next_reveal: None,
            step,
        }
    }

    /// Apply immediate effects now and queue the reveal sequence starting at `now`
    pub fn apply(&mut self, outcome: Outcome, now: Instant) {
        // A round start makes any reveal still in flight stale
        if outcome
            .effects
            .contains(&Effect::Controls { start_enabled: false })
        {
            self.pending.clear();
            self.next_reveal = None;
        }
        for effect in outcome.effects {
            self.apply_effect(effect);
        }
        if !outcome.reveal.is_empty() {
            self.pending.extend(outcome.reveal);
            self.next_reveal = Some(now);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Tile {
                row,
                col,
                view,
                interactive,
            } => {
                if let Some(i) = Board::index(row, col) {
                    self.tiles[i] = TileFace { view, interactive };
                }
            }
            Effect::Controls { start_enabled } => self.start_enabled = start_enabled,
        }
    }

    /// Release every queued reveal that is due; returns true when something changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.next_reveal {
            if due > now {
                break;
            }
            match self.pending.pop_front() {
                Some(effect) => {
                    self.apply_effect(effect);
                    changed = true;
                }
                None => {
                    self.next_reveal = None;
                    break;
                }
            }
            self.next_reveal = if self.pending.is_empty() {
                None
            } else {
                Some(due + self.step)
            };
        }
        changed
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_reveal
    }

    pub fn is_revealing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn start_enabled(&self) -> bool {
        self.start_enabled
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<TileFace> {
        Board::index(row, col).map(|i| self.tiles[i])
    }

    pub fn set_step(&mut self, step: Duration) {
        self.step = step;
    }
}

/// Everything the mouse can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Mode(Mode),
    Play,
    Limit(u8),
    LimitDown,
    LimitUp,
    Tile(usize, usize),
    Help,
    Options,
    Exit,
    ModalClose,
    OptionRow(u8),
}

// Runtime UI variables grouped in one place
#[derive(Debug)]
struct UiState {
    hits: Vec<(Rect, Target)>, // clickable areas of the last frame, modal ones only while a modal is open
    hover: Option<Target>,
    press: Option<Target>,
    cursor: (usize, usize), // (row, col)
    showing_help: bool,
    showing_options: bool,
    opt_indicator: bool,
    opt_ascii: bool,
    opt_zh: bool,
    opt_focus: u8,
    exit_requested: bool,
}

impl UiState {
    fn new() -> Self {
        UiState {
            hits: Vec::new(),
            hover: None,
            press: None,
            cursor: (ROWS / 2, COLS / 2),
            showing_help: false,
            showing_options: false,
            opt_indicator: false,
            opt_ascii: false,
            opt_zh: false,
            opt_focus: 0,
            exit_requested: false,
        }
    }

    fn hit(&self, column: u16, row: u16) -> Option<Target> {
        self.hits
            .iter()
            .find(|(r, _)| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|(_, t)| *t)
    }
}

struct App<'a> {
    cfg: &'a mut Config,
    lang: &'a mut Lang,
    session: &'a mut Session,
    screen: Screen,
    ui: UiState,
    palette: Palette,
}

pub fn run(cfg: &mut Config, lang: &mut Lang, session: &mut Session) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnableMouseCapture, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let step = Duration::from_millis(cfg.reveal_delay_ms);
    let start_enabled = session.can_start();
    let mut app = App {
        cfg,
        lang,
        session,
        screen: Screen::new(start_enabled, step),
        ui: UiState::new(),
        palette: Palette::detect(),
    };
    let result = app.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("exiting");
    result
}

impl App<'_> {
    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), Box<dyn Error>> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            if self.ui.exit_requested {
                break;
            }

            // wake up in time for the next queued reveal
            let now = Instant::now();
            let timeout = self
                .screen
                .next_due()
                .map_or(TICK_RATE, |due| due.saturating_duration_since(now).min(TICK_RATE));
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.on_key(key),
                    Event::Mouse(me) => self.on_mouse(me),
                    _ => {}
                }
            }
            self.screen.tick(Instant::now());
        }
        Ok(())
    }

    fn dispatch(&mut self, input: Input) {
        let outcome = self.session.handle(input);
        if !outcome.is_empty() {
            debug!(?input, effects = outcome.effects.len(), reveal = outcome.reveal.len(), "input applied");
        }
        self.screen.apply(outcome, Instant::now());
    }

    fn on_key(&mut self, key: KeyEvent) {
        let KeyEvent { code, kind, .. } = key;
        if kind != KeyEventKind::Press {
            return;
        }
        if self.ui.showing_help {
            // any key closes help
            self.ui.showing_help = false;
            return;
        }
        if self.ui.showing_options {
            match code {
                KeyCode::Esc => self.ui.showing_options = false,
                KeyCode::Enter => self.apply_options(),
                KeyCode::Up => self.ui.opt_focus = (self.ui.opt_focus + 2) % 3,
                KeyCode::Down | KeyCode::Tab => self.ui.opt_focus = (self.ui.opt_focus + 1) % 3,
                KeyCode::Char(' ') => self.toggle_option(self.ui.opt_focus),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.ui.exit_requested = true,
            KeyCode::F(1) => self.ui.showing_help = true,
            KeyCode::F(7) => self.open_options(),
            KeyCode::Char('w') | KeyCode::Char('W') => self.dispatch(Input::ModeSelected(Mode::Win)),
            KeyCode::Char('l') | KeyCode::Char('L') => self.dispatch(Input::ModeSelected(Mode::Lose)),
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::F(2) if self.screen.start_enabled() => {
                self.dispatch(Input::RoundStartRequested)
            }
            KeyCode::Char(c @ '1'..='5') => self.dispatch(Input::ClickLimitChanged(c as u8 - b'0')),
            KeyCode::Char('+') | KeyCode::Char('=') => self.activate(Target::LimitUp),
            KeyCode::Char('-') => self.activate(Target::LimitDown),
            KeyCode::Left => self.step_cursor(0, -1),
            KeyCode::Right => self.step_cursor(0, 1),
            KeyCode::Up => self.step_cursor(-1, 0),
            KeyCode::Down => self.step_cursor(1, 0),
            KeyCode::Char(' ') | KeyCode::Enter => {
                let (row, col) = self.ui.cursor;
                self.dispatch(Input::TileClicked { row, col });
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, me: MouseEvent) {
        let target = self.ui.hit(me.column, me.row);
        match me.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.ui.hover = target;
                if let Some(Target::Tile(row, col)) = target {
                    self.ui.cursor = (row, col);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => self.ui.press = target,
            MouseEventKind::Up(MouseButton::Left) => {
                // act on release over the same target that was pressed
                let pressed = self.ui.press.take();
                if let Some(t) = target.filter(|t| pressed == Some(*t)) {
                    self.activate(t);
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self, target: Target) {
        match target {
            Target::Mode(mode) => self.dispatch(Input::ModeSelected(mode)),
            Target::Play => self.dispatch(Input::RoundStartRequested),
            Target::Limit(n) => self.dispatch(Input::ClickLimitChanged(n)),
            Target::LimitDown => {
                let n = self.session.click_limit().saturating_sub(1);
                self.dispatch(Input::ClickLimitChanged(n));
            }
            Target::LimitUp => {
                let n = self.session.click_limit().saturating_add(1);
                self.dispatch(Input::ClickLimitChanged(n));
            }
            Target::Tile(row, col) => {
                self.ui.cursor = (row, col);
                self.dispatch(Input::TileClicked { row, col });
            }
            Target::Help => self.ui.showing_help = true,
            Target::Options => self.open_options(),
            Target::Exit => self.ui.exit_requested = true,
            Target::ModalClose => {
                if self.ui.showing_options {
                    self.apply_options();
                }
                self.ui.showing_help = false;
            }
            Target::OptionRow(i) => {
                self.ui.opt_focus = i;
                self.toggle_option(i);
            }
        }
    }

    fn step_cursor(&mut self, dr: isize, dc: isize) {
        let (r, c) = self.ui.cursor;
        let nr = (r as isize + dr).clamp(0, ROWS as isize - 1) as usize;
        let nc = (c as isize + dc).clamp(0, COLS as isize - 1) as usize;
        self.ui.cursor = (nr, nc);
    }

    fn open_options(&mut self) {
        self.ui.opt_indicator = self.cfg.show_indicator;
        self.ui.opt_ascii = self.cfg.ascii_icons;
        self.ui.opt_zh = self.lang.current_lang == "zh";
        self.ui.opt_focus = 0;
        self.ui.showing_options = true;
    }

    fn toggle_option(&mut self, i: u8) {
        match i {
            0 => self.ui.opt_indicator = !self.ui.opt_indicator,
            1 => self.ui.opt_ascii = !self.ui.opt_ascii,
            2 => self.ui.opt_zh = !self.ui.opt_zh,
            _ => {}
        }
    }

    fn apply_options(&mut self) {
        self.cfg.show_indicator = self.ui.opt_indicator;
        self.cfg.ascii_icons = self.ui.opt_ascii;
        self.cfg.language = if self.ui.opt_zh { "zh" } else { "en" }.to_string();
        self.lang.switch_to(&self.cfg.language);
        self.screen
            .set_step(Duration::from_millis(self.cfg.reveal_delay_ms));
        save_config(self.cfg);
        self.ui.showing_options = false;
    }

    // Style pair for a "key: label" legend item, following hover and press state
    fn key_styles(&self, target: Target) -> (Style, Style) {
        let pal = self.palette;
        if self.ui.press == Some(target) {
            let s = Style::default().bg(pal.tile_safe).fg(Color::Black);
            (s.add_modifier(Modifier::BOLD), s)
        } else if self.ui.hover == Some(target) {
            let s = Style::default().bg(pal.cursor).fg(Color::Black);
            (s.add_modifier(Modifier::BOLD), s)
        } else {
            (Style::default().fg(pal.key).add_modifier(Modifier::BOLD), Style::default())
        }
    }

    fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        let size = f.size();
        self.ui.hits.clear();

        // If terminal too small, render a centered warning and skip normal UI
        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            let a = &self.lang.assets;
            let warn_lines = vec![
                Spans::from(Span::raw(a.tsmsg_line1)),
                Spans::from(Span::raw(Lang::fill(a.tsmsg_line2, &[&MIN_WIDTH, &MIN_HEIGHT]))),
            ];
            let warn = Paragraph::new(Text::from(warn_lines))
                .block(Block::default().borders(Borders::ALL).title(a.tsmsg_title))
                .alignment(Alignment::Center);
            f.render_widget(Clear, size);
            let w = 40u16.min(size.width.saturating_sub(2));
            let h = 5u16.min(size.height.saturating_sub(2));
            f.render_widget(warn, center_rect(w, h, size));
            return;
        }

        // layout: button row, click slider, board, status
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(0)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(BOARD_H + 2),
                    Constraint::Length(3),
                ]
                .as_ref(),
            )
            .split(size);

        self.draw_top_bar(f, chunks[0]);
        self.draw_slider(f, chunks[1]);
        self.draw_board(f, chunks[2]);
        self.draw_status(f, chunks[3]);

        if self.ui.showing_help {
            self.ui.hits.clear();
            self.draw_help(f, size);
        } else if self.ui.showing_options {
            self.ui.hits.clear();
            self.draw_options(f, size);
        }
    }

    fn draw_top_bar<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let pal = self.palette;
        let a = &self.lang.assets;
        let mode = self.session.mode();
        let y = area.y + 1;
        let mut x = area.x + 2;
        let mut spans: Vec<Span> = vec![Span::raw(" ")];

        let buttons = [
            (a.btn_win, Target::Mode(Mode::Win), pal.button_win, mode == Some(Mode::Win), true),
            (a.btn_lose, Target::Mode(Mode::Lose), pal.button_lose, mode == Some(Mode::Lose), true),
            (a.btn_play, Target::Play, pal.button_play, false, self.screen.start_enabled()),
        ];
        for (i, (name, target, color, selected, enabled)) in buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
                x += 2;
            }
            let label = format!(" {} ", name);
            let w = label.width() as u16;
            let mut style = if enabled {
                Style::default().bg(color).fg(pal.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(pal.muted).fg(pal.background)
            };
            // the selected mode button looks sunken
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            } else if enabled && self.ui.hover == Some(target) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if enabled && self.ui.press == Some(target) {
                style = style.bg(pal.cursor);
            }
            spans.push(Span::styled(label, style));
            if enabled {
                self.ui.hits.push((Rect::new(x, y, w, 1), target));
            }
            x += w;
        }

        // right-aligned key legend
        let legend = [("F1", a.menu_help, Target::Help), ("F7", a.menu_options, Target::Options)];
        let legend_w: u16 = legend
            .iter()
            .map(|(k, r, _)| (k.width() + 2 + r.width()) as u16)
            .sum::<u16>()
            + 3 * (legend.len() as u16 - 1);
        let inner_right = area.x + area.width.saturating_sub(2);
        let legend_x = inner_right.saturating_sub(legend_w).max(x + 1);
        spans.push(Span::raw(" ".repeat((legend_x - x) as usize)));
        x = legend_x;
        for (i, (key, rest, target)) in legend.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
                x += 3;
            }
            let w = (key.width() + 2 + rest.width()) as u16;
            let (key_style, rest_style) = self.key_styles(target);
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(": {}", rest), rest_style));
            self.ui.hits.push((Rect::new(x, y, w, 1), target));
            x += w;
        }

        let bar = Paragraph::new(Spans::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        f.render_widget(bar, area);
    }

    fn draw_slider<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let pal = self.palette;
        let a = &self.lang.assets;
        let limit = self.session.click_limit();
        let y = area.y + 1;
        let label = format!(" {} ", a.slider_label);
        let mut x = area.x + 1 + label.width() as u16;
        let mut spans: Vec<Span> = vec![Span::raw(label)];

        let plain = |target: Target, ui: &UiState| {
            if ui.press == Some(target) {
                Style::default().bg(pal.cursor).fg(Color::Black)
            } else if ui.hover == Some(target) {
                Style::default().fg(pal.cursor).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(pal.key)
            }
        };

        spans.push(Span::styled(" ◀ ", plain(Target::LimitDown, &self.ui)));
        self.ui.hits.push((Rect::new(x, y, 3, 1), Target::LimitDown));
        x += 3;
        for n in MIN_CLICKS..=MAX_CLICKS {
            let target = Target::Limit(n);
            let style = if n == limit {
                Style::default().bg(pal.key).fg(Color::Black).add_modifier(Modifier::BOLD)
            } else {
                plain(target, &self.ui)
            };
            spans.push(Span::styled(format!(" {} ", n), style));
            self.ui.hits.push((Rect::new(x, y, 3, 1), target));
            x += 3;
        }
        spans.push(Span::styled(" ▶ ", plain(Target::LimitUp, &self.ui)));
        self.ui.hits.push((Rect::new(x, y, 3, 1), Target::LimitUp));

        let slider = Paragraph::new(Spans::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        f.render_widget(slider, area);
    }

    fn draw_board<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let pal = self.palette;
        let (glyph_hidden, glyph_safe, glyph_mine) = if self.cfg.ascii_icons {
            (".", "o", "*")
        } else {
            ("·", "◆", "☼")
        };
        let board_bg = Style::default().bg(pal.background);
        let outer = center_rect(BOARD_W + 4, BOARD_H + 2, area);
        let x0 = outer.x + 2;
        let y0 = outer.y + 1;

        let mut lines: Vec<Spans> = Vec::new();
        for row in 0..ROWS {
            for line in 0..TILE_H {
                let mut spans: Vec<Span> = vec![Span::styled(" ", board_bg)];
                for col in 0..COLS {
                    if col > 0 {
                        spans.push(Span::styled(" ", board_bg));
                    }
                    let face = self.screen.tiles[row * COLS + col];
                    let (glyph, mut style) = match face.view {
                        TileView::Hidden if face.interactive => {
                            (glyph_hidden, Style::default().bg(pal.tile_hidden).fg(pal.text))
                        }
                        TileView::Hidden => (" ", Style::default().bg(pal.tile_hidden).fg(pal.muted)),
                        TileView::Safe => (glyph_safe, Style::default().bg(pal.tile_safe).fg(pal.text)),
                        TileView::Mine => (glyph_mine, Style::default().bg(pal.tile_mine).fg(pal.text)),
                    };
                    if face.interactive {
                        if self.ui.press == Some(Target::Tile(row, col)) {
                            style = style.bg(pal.muted);
                        } else if self.cfg.show_indicator && self.ui.cursor == (row, col) {
                            style = style.bg(pal.cursor);
                        }
                    }
                    let text = if line == 0 { format!("{:^5}", glyph) } else { " ".repeat(TILE_W as usize) };
                    spans.push(Span::styled(text, style.add_modifier(Modifier::BOLD)));
                }
                spans.push(Span::styled(" ", board_bg));
                lines.push(Spans::from(spans));
            }
            if row + 1 < ROWS {
                lines.push(Spans::from(Span::styled(" ".repeat(BOARD_W as usize + 2), board_bg)));
            }

            for col in 0..COLS {
                let tx = x0 + col as u16 * (TILE_W + GAP_X);
                let ty = y0 + row as u16 * (TILE_H + GAP_Y);
                self.ui.hits.push((Rect::new(tx, ty, TILE_W, TILE_H), Target::Tile(row, col)));
            }
        }

        let paragraph = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(" xtmines ").title_alignment(Alignment::Center))
            .style(board_bg)
            .alignment(Alignment::Left);
        f.render_widget(paragraph, outer);
    }

    fn draw_status<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let a = &self.lang.assets;
        let (clicks, limit) = self.session.click_progress();
        let message = if self.session.is_active() {
            a.status_in_round
        } else if self.session.mode().is_none() {
            a.status_pick_mode
        } else if self.screen.is_revealing() {
            ""
        } else {
            match self.session.last_result() {
                Some(RoundResult::Cleared) => a.status_cleared,
                Some(RoundResult::Exploded) => a.status_exploded,
                None => a.status_press_play,
            }
        };
        let left_text = format!(
            " {} {}   {}   {} ",
            a.status_mode,
            self.lang.mode_name(self.session.mode()),
            Lang::fill(a.status_clicks_fmt, &[&clicks, &limit]),
            message
        );

        // right-aligned "Esc: Exit", like the key legend
        let (right_key, right_rest) = ("Esc", a.menu_exit);
        let inner_w = area.width.saturating_sub(2) as usize;
        let left_w = left_text.as_str().width();
        let right_w = right_key.width() + 2 + right_rest.width();
        let mid_spaces = if inner_w > left_w + right_w + 1 { inner_w - left_w - right_w - 1 } else { 1 };
        let (key_style, rest_style) = self.key_styles(Target::Exit);
        let exit_x = area.x + 1 + (left_w + mid_spaces) as u16;
        let status_spans = vec![
            Span::raw(left_text),
            Span::raw(" ".repeat(mid_spaces)),
            Span::styled(right_key, key_style),
            Span::styled(format!(": {}", right_rest), rest_style),
            Span::raw(" "),
        ];
        self.ui.hits.push((Rect::new(exit_x, area.y + 1, right_w as u16, 1), Target::Exit));
        let status = Paragraph::new(Text::from(Spans::from(status_spans)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    fn draw_help<B: Backend>(&mut self, f: &mut Frame<B>, size: Rect) {
        let a = &self.lang.assets;
        let hb = center_rect(46, 11, size);
        f.render_widget(Clear, hb);
        let lines = vec![
            Spans::from(Span::raw("")),
            Spans::from(Span::raw(a.help_mode)),
            Spans::from(Span::raw(a.help_play)),
            Spans::from(Span::raw(a.help_limit)),
            Spans::from(Span::raw(a.help_move)),
            Spans::from(Span::raw(a.help_click)),
        ];
        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(a.help_title))
            .alignment(Alignment::Left);
        f.render_widget(p, hb);
        let close = a.btn_close;
        self.draw_close_button(f, hb, close);
    }

    fn draw_options<B: Backend>(&mut self, f: &mut Frame<B>, size: Rect) {
        let pal = self.palette;
        let a = &self.lang.assets;
        let ob = center_rect(40, 10, size);
        f.render_widget(Clear, ob);
        let check = |on: bool| if on { "[x]" } else { "[ ]" };
        let lang_name = if self.ui.opt_zh { a.lang_chinese } else { a.lang_english };
        let rows = [
            format!(" {} {}", check(self.ui.opt_indicator), a.opt_show_indicator),
            format!(" {} {}", check(self.ui.opt_ascii), a.opt_ascii_icons),
            format!(" {}: < {} >", a.opt_language, lang_name),
        ];
        let inner = Rect::new(ob.x + 1, ob.y + 1, ob.width.saturating_sub(2), ob.height.saturating_sub(2));
        let mut lines = vec![Spans::from(Span::raw(""))];
        for (i, text) in rows.into_iter().enumerate() {
            let i = i as u8;
            let style = if self.ui.opt_focus == i {
                Style::default().bg(pal.cursor).fg(Color::Black)
            } else {
                Style::default()
            };
            lines.push(Spans::from(Span::styled(text, style)));
            self.ui.hits.push((Rect::new(inner.x, inner.y + 1 + i as u16, inner.width, 1), Target::OptionRow(i)));
        }
        lines.push(Spans::from(Span::raw("")));
        lines.push(Spans::from(Span::styled(format!(" {}", a.opt_hint), Style::default().fg(pal.muted))));
        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(a.opt_title))
            .alignment(Alignment::Left);
        f.render_widget(p, ob);
        let close = a.btn_close;
        self.draw_close_button(f, ob, close);
    }

    // close button centered on the bottom border row of a modal
    fn draw_close_button<B: Backend>(&mut self, f: &mut Frame<B>, modal: Rect, label: &str) {
        let btn_w = label.width() as u16;
        let bx = modal.x + (modal.width.saturating_sub(btn_w)) / 2;
        let by = modal.y + modal.height.saturating_sub(2);
        let btn_rect = Rect::new(bx, by, btn_w, 1);
        self.ui.hits.push((btn_rect, Target::ModalClose));
        let mut btn_style = Style::default().bg(Color::Gray).fg(Color::Black).add_modifier(Modifier::BOLD);
        if self.ui.press == Some(Target::ModalClose) {
            btn_style = btn_style.bg(Color::Green);
        } else if self.ui.hover == Some(Target::ModalClose) {
            btn_style = btn_style.bg(Color::White);
        }
        let btn = Paragraph::new(Spans::from(Span::styled(label.to_string(), btn_style))).alignment(Alignment::Center);
        f.render_widget(btn, btn_rect);
    }
}

fn center_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
