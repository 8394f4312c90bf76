//! Tour shell: the UI around the puzzle.
//!
//! Owns the Game Center menu, the terminal-log panel and the
//! `game-container`, and decides where each key goes. Arrow keys reach the
//! engine only while it reports running; Escape always belongs to the shell.

use std::collections::VecDeque;

use crossterm::event::KeyEvent;
use log::info;

use crate::config::TourConfig;
use crate::core::PuzzleEngine;
use crate::input::{intent_for_key, is_exit_key, menu_choice, should_quit};
use crate::term::{CellStyle, FrameBuffer, GameContainer, Rgb};

/// Rows reserved at the bottom of the screen for the log panel
pub const LOG_PANEL_ROWS: u16 = 7;

const LOG_CAPACITY: usize = 64;

const TITLE: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
const BODY: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LOG_TEXT: CellStyle = CellStyle::new(Rgb::new(0, 255, 0), Rgb::BLACK);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    /// Game Center menu is showing
    Menu,
    /// The game panel is showing (running or game over)
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Bounded list of messages shown in the log panel, newest last.
#[derive(Debug, Clone)]
pub struct TerminalLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl TerminalLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(format!("> {}", message));
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct TourShell {
    mode: ShellMode,
    engine: PuzzleEngine,
    container: GameContainer,
    log: TerminalLog,
    width: u16,
    height: u16,
}

impl TourShell {
    /// A shell for a `width x height` screen, showing the menu.
    pub fn new(config: &TourConfig, width: u16, height: u16) -> Self {
        let mut log = TerminalLog::new(LOG_CAPACITY);
        log.push("Entered Game Center");
        Self {
            mode: ShellMode::Menu,
            engine: PuzzleEngine::new(config.engine),
            container: GameContainer::new(width, game_area_height(height)),
            log,
            width,
            height,
        }
    }

    pub fn mode(&self) -> ShellMode {
        self.mode
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn container(&self) -> &GameContainer {
        &self.container
    }

    pub fn log(&self) -> &TerminalLog {
        &self.log
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.container.resize(width, game_area_height(height));
    }

    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if should_quit(key) {
            self.stop_game();
            return KeyOutcome::Quit;
        }

        match self.mode {
            ShellMode::Playing => self.handle_game_key(key),
            ShellMode::Menu => self.handle_menu_key(key),
        }
        KeyOutcome::Continue
    }

    /// Forward elapsed time to the engine.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let was_running = self.engine.is_running();
        self.engine.tick(elapsed_ms);
        self.note_game_over(was_running);
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        if is_exit_key(key) {
            self.log.push("Exiting Tetris game");
            self.stop_game();
            return;
        }

        if !self.engine.is_running() {
            return;
        }
        if let Some(intent) = intent_for_key(key) {
            self.engine.handle_input(intent);
            self.note_game_over(true);
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        if is_exit_key(key) {
            return;
        }
        match menu_choice(key) {
            Some(1) => self.start_game(),
            Some(2) | Some(3) => self.log.push("This game is not yet implemented."),
            _ => self
                .log
                .push("Invalid selection. Please choose a number from the list."),
        }
    }

    fn start_game(&mut self) {
        self.log.push("Starting Tetris");
        self.container.open();
        match self.engine.start(&mut self.container) {
            Ok(()) => {
                self.mode = ShellMode::Playing;
                self.log.push("Tetris game started");
            }
            Err(err) => {
                self.container.close();
                self.log.push(format!("Failed to start Tetris game: {}", err));
            }
        }
    }

    fn stop_game(&mut self) {
        if self.mode != ShellMode::Playing {
            return;
        }
        self.engine.stop();
        self.container.close();
        self.mode = ShellMode::Menu;
        self.log.push("Tetris game stopped");
    }

    fn note_game_over(&mut self, was_running: bool) {
        if was_running && !self.engine.is_running() {
            let score = self.engine.score().unwrap_or(0);
            self.log
                .push(format!("Game over with score {}. Press Esc to return.", score));
        }
    }

    /// Draw the whole screen.
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        fb.resize(self.width, self.height);
        fb.clear(BODY);

        match self.mode {
            ShellMode::Menu => self.draw_menu(fb),
            ShellMode::Playing => {
                let w = self.container.with_frame(|f| f.width()).unwrap_or(0);
                let x = self.width.saturating_sub(w) / 2;
                self.container.blit_into(fb, x, 0);
            }
        }

        self.draw_log(fb);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer) {
        let lines = [
            ("Game Center", TITLE),
            ("", BODY),
            ("Select a game to play:", BODY),
            ("  1. Tetris", BODY),
            ("  2. [Future Game]", BODY),
            ("  3. [Future Game]", BODY),
            ("", BODY),
            ("Arrows move/rotate, Esc leaves a game, q quits", BODY),
        ];
        for (y, (text, style)) in lines.iter().enumerate() {
            fb.put_str(2, 1 + y as u16, text, *style);
        }
    }

    fn draw_log(&self, fb: &mut FrameBuffer) {
        let top = game_area_height(self.height);
        if top >= self.height {
            return;
        }
        let rule: String = "─".repeat(self.width as usize);
        fb.put_str(0, top, &rule, BODY);

        let visible = (self.height - top - 1) as usize;
        let skip = self.log.len().saturating_sub(visible);
        for (i, line) in self.log.lines().skip(skip).enumerate() {
            fb.put_str(1, top + 1 + i as u16, line, LOG_TEXT);
        }
    }
}

fn game_area_height(height: u16) -> u16 {
    height.saturating_sub(LOG_PANEL_ROWS)
}
