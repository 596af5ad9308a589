//! Main TUI application state and logic

use crate::memory::Memory;
use crate::script::Script;
use crate::ui::panes::WriteLogEntry;
use crate::view::{MemoryView, Scene};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
    backend::Backend,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Screen-space origin of the grid inside its pane
const GRID_X: i32 = 1;
const GRID_Y: i32 = 0;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Grid,
    Writes,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Writes,
            FocusedPane::Writes => FocusedPane::Grid,
        }
    }
}

/// The main application state
pub struct App {
    /// The script being stepped through
    script: Script,

    /// The observed region; all writes go through it
    memory: Memory,

    /// The retained scene shared with the view's change watcher
    scene: Rc<RefCell<Scene>>,

    /// The rendered grid view (kept for its layout and lifecycle)
    #[allow(dead_code)] // consulted only on reset today
    view: MemoryView,

    /// Next write to apply
    position: usize,

    /// Applied writes, newest last
    log: Vec<WriteLogEntry>,

    /// Currently focused pane
    focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    grid_scroll: usize,
    writes_scroll: usize,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,

    /// Whether auto-play mode is active
    is_playing: bool,

    /// Last time a step was taken in play mode
    last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Build the memory/scene/view triple for a script and render the grid.
    fn build_session(
        script: &Script,
    ) -> Result<(Memory, Rc<RefCell<Scene>>, MemoryView), Box<dyn std::error::Error>> {
        let mut memory = Memory::new(script.size)?;
        let scene = Rc::new(RefCell::new(Scene::new()));
        let mut view = MemoryView::new(GRID_X, GRID_Y, &memory, script.base);
        view.render(&mut memory, &scene)?;
        Ok((memory, scene, view))
    }

    /// Create a new app for a parsed script
    pub fn new(script: Script) -> Result<Self, Box<dyn std::error::Error>> {
        let (memory, scene, view) = Self::build_session(&script)?;
        Ok(App {
            script,
            memory,
            scene,
            view,
            position: 0,
            log: Vec::new(),
            focused_pane: FocusedPane::Grid,
            grid_scroll: 0,
            writes_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_millis(700) {
                    if self.position < self.script.writes.len() {
                        self.step_forward();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Grid on the left, write log on the right, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(pane_area);

        super::panes::render_grid_pane(
            frame,
            columns[0],
            &self.scene.borrow(),
            self.focused_pane == FocusedPane::Grid,
            &mut self.grid_scroll,
        );

        super::panes::render_writes_pane(
            frame,
            columns[1],
            &self.log,
            self.focused_pane == FocusedPane::Writes,
            &mut self.writes_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.position,
            self.script.writes.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.position >= self.script.writes.len() {
                        break;
                    }
                    self.step_forward();
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} write(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.position < self.script.writes.len() {
                    self.step_forward();
                } else {
                    self.status_message = "End of script".to_string();
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Grid => {
                    self.grid_scroll = self.grid_scroll.saturating_sub(1);
                }
                FocusedPane::Writes => {
                    self.writes_scroll = self.writes_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Grid => {
                    self.grid_scroll = self.grid_scroll.saturating_add(1);
                }
                FocusedPane::Writes => {
                    self.writes_scroll = self.writes_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Apply the rest of the script
                self.is_playing = false;
                while self.position < self.script.writes.len() {
                    self.step_forward();
                }
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Rebuild the session from scratch: fresh region, fresh scene,
                // fresh one-shot render
                self.is_playing = false;
                self.reset();
            }
            _ => {}
        }
    }

    /// Apply the next scripted write through the memory region. The grid
    /// repaints itself through the change notification; nothing here touches
    /// the scene.
    fn step_forward(&mut self) {
        let Some(op) = self.script.writes.get(self.position).cloned() else {
            return;
        };
        self.position += 1;

        match self.memory.write_u32(op.address, op.value) {
            Ok(()) => {
                self.status_message = match &op.note {
                    Some(note) => format!(
                        "0x{:08x} ← 0x{:08x} ({})",
                        op.address, op.value, note
                    ),
                    None => format!("0x{:08x} ← 0x{:08x}", op.address, op.value),
                };
                self.log.push(WriteLogEntry {
                    address: op.address,
                    value: op.value,
                    note: op.note,
                    ok: true,
                });
            }
            Err(e) => {
                self.status_message = format!("{}", e);
                self.log.push(WriteLogEntry {
                    address: op.address,
                    value: op.value,
                    note: op.note,
                    ok: false,
                });
            }
        }

        // Keep the newest write visible
        self.writes_scroll = usize::MAX;
    }

    /// Restart the session at write 0
    fn reset(&mut self) {
        match Self::build_session(&self.script) {
            Ok((memory, scene, view)) => {
                self.memory = memory;
                self.scene = scene;
                self.view = view;
                self.position = 0;
                self.log.clear();
                self.grid_scroll = 0;
                self.writes_scroll = 0;
                self.status_message = "Reset".to_string();
            }
            Err(e) => {
                self.status_message = format!("Reset failed: {}", e);
            }
        }
    }
}
