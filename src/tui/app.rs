use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::info;

use crate::io::config_io;
use crate::model::cell::{CellKey, SLOTS_PER_DAY};
use crate::model::config::{GridConfig, StoreInfo};
use crate::model::staff::StaffProfile;
use crate::ops::selection::SelectOutcome;
use crate::state::SchedulingState;

use super::input;
use super::layout::GridLayout;
use super::render;
use super::theme::Theme;

/// How often the loop wakes without input, so long-presses can fire.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A clickable button in the assignment panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    Clear,
    Apply(String),
    Close,
}

/// Main application state
pub struct App {
    pub state: SchedulingState,
    pub theme: Theme,
    pub store: StoreInfo,
    pub candidates: Vec<StaffProfile>,
    pub revenue_per_slot: u64,
    pub show_key_hints: bool,
    /// Keyboard cursor (roster index, slot)
    pub cursor_row: usize,
    pub cursor_slot: usize,
    /// First visible slot / roster row
    pub scroll_slot: usize,
    pub scroll_row: usize,
    pub picker_cursor: usize,
    pub show_help: bool,
    /// Drag started with `v`; cursor moves extend it
    pub key_drag: bool,
    pub should_quit: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status: Option<String>,
    // Hit regions recorded by the last render
    pub layout: GridLayout,
    pub panel_buttons: Vec<(Rect, PanelAction)>,
    pub confirm_button: Option<Rect>,
    pub picker_hits: Vec<(Rect, usize)>,
}

impl App {
    pub fn new(config: &GridConfig) -> Self {
        let first_slot = config.scheduling.first_visible_slot.min(SLOTS_PER_DAY - 1);
        App {
            state: SchedulingState::from_config(config),
            theme: Theme::from_config(&config.ui),
            store: config.store.clone(),
            candidates: config.candidates.clone(),
            revenue_per_slot: config.scheduling.revenue_per_slot,
            show_key_hints: config.ui.show_key_hints,
            cursor_row: 0,
            cursor_slot: first_slot,
            scroll_slot: first_slot,
            scroll_row: 0,
            picker_cursor: 0,
            show_help: false,
            key_drag: false,
            should_quit: false,
            status: None,
            layout: GridLayout::default(),
            panel_buttons: Vec::new(),
            confirm_button: None,
            picker_hits: Vec::new(),
        }
    }

    /// Roster id of the cursor row
    pub fn cursor_row_id(&self) -> Option<String> {
        self.state
            .roster()
            .rows()
            .get(self.cursor_row)
            .map(|row| row.id.clone())
    }

    pub fn cursor_key(&self) -> Option<CellKey> {
        self.cursor_row_id()
            .map(|id| CellKey::new(id, self.cursor_slot))
    }

    pub fn is_picker_open(&self) -> bool {
        self.state.staff_prompt().is_some()
    }

    /// Move the cursor by a delta, clamped to the grid
    pub fn move_cursor(&mut self, d_row: isize, d_slot: isize) {
        let rows = self.state.roster().len();
        if rows == 0 {
            return;
        }
        self.cursor_row = self.cursor_row.saturating_add_signed(d_row).min(rows - 1);
        self.cursor_slot = self
            .cursor_slot
            .saturating_add_signed(d_slot)
            .min(SLOTS_PER_DAY - 1);
        self.ensure_cursor_visible();
    }

    /// Scroll so the cursor cell is on screen (uses the last rendered geometry)
    pub fn ensure_cursor_visible(&mut self) {
        let slots = self.layout.visible_slots;
        if slots > 0 {
            if self.cursor_slot < self.scroll_slot {
                self.scroll_slot = self.cursor_slot;
            } else if self.cursor_slot >= self.scroll_slot + slots {
                self.scroll_slot = self.cursor_slot + 1 - slots;
            }
        }
        let rows = self.layout.visible_rows;
        if rows > 0 {
            if self.cursor_row < self.scroll_row {
                self.scroll_row = self.cursor_row;
            } else if self.cursor_row >= self.scroll_row + rows {
                self.scroll_row = self.cursor_row + 1 - rows;
            }
        }
    }

    /// Shift the visible slot window, keeping at least one column on screen
    pub fn scroll_slots(&mut self, delta: isize) {
        let slots = self.layout.visible_slots.max(1);
        let max_first = SLOTS_PER_DAY.saturating_sub(slots);
        self.scroll_slot = self.scroll_slot.saturating_add_signed(delta).min(max_first);
    }

    pub fn scroll_rows(&mut self, delta: isize) {
        let rows = self.layout.visible_rows.max(1);
        let max_first = self.state.roster().len().saturating_sub(rows);
        self.scroll_row = self.scroll_row.saturating_add_signed(delta).min(max_first);
    }

    /// React to a selection outcome from a click or drag start
    pub fn note_outcome(&mut self, outcome: &SelectOutcome) {
        match outcome {
            SelectOutcome::NeedsStaff(_) => {
                self.picker_cursor = 0;
                self.status = Some("Pick a person for this row first".into());
            }
            SelectOutcome::Rejected => {
                self.status = Some("That cell can't be selected".into());
            }
            _ => {}
        }
    }

    /// Apply a work item (or clear with `None`) to the selection
    pub fn apply(&mut self, work_id: Option<&str>) {
        if self.state.selection().is_empty() {
            self.status = Some("Select cells first".into());
            return;
        }
        if let Err(e) = self.state.apply_work_item(work_id) {
            self.status = Some(e.to_string());
        }
    }

    /// Apply the catalog item at a 1-based position
    pub fn apply_nth(&mut self, position: usize) {
        let id = position
            .checked_sub(1)
            .and_then(|i| self.state.catalog().nth(i))
            .map(|item| item.id.clone());
        match id {
            Some(id) => self.apply(Some(&id)),
            None => self.status = Some(format!("No work item {}", position)),
        }
    }

    pub fn undo(&mut self) {
        if !self.state.undo() {
            self.status = Some("Nothing to undo".into());
        }
    }

    pub fn confirm_all(&mut self) {
        self.end_key_drag();
        self.state.confirm_all();
    }

    pub fn close_panel(&mut self) {
        self.key_drag = false;
        self.state.close_panel();
    }

    pub fn end_key_drag(&mut self) {
        if self.key_drag {
            self.key_drag = false;
            self.state.end_drag();
        }
    }

    /// Drop the keyboard drag flag once a pointer gesture has ended the drag
    pub fn sync_key_drag(&mut self) {
        if self.key_drag && !self.state.is_dragging() {
            self.key_drag = false;
        }
    }

    pub fn add_row(&mut self) {
        self.state.add_placeholder_row();
        self.cursor_row = self.state.roster().len() - 1;
        self.ensure_cursor_visible();
    }

    /// Open the staff picker for a roster row
    pub fn open_picker(&mut self, row: usize) {
        let Some(id) = self.state.roster().rows().get(row).map(|r| r.id.clone()) else {
            return;
        };
        if self.state.request_staff_assignment(&id).is_ok() {
            self.picker_cursor = 0;
        }
    }

    /// Fill the prompted row with the candidate at `index`
    pub fn pick_candidate(&mut self, index: usize) {
        let (Some(row_id), Some(profile)) = (
            self.state.staff_prompt().map(str::to_string),
            self.candidates.get(index).cloned(),
        ) else {
            return;
        };
        if let Err(e) = self.state.assign_staff_to_row(&row_id, &profile) {
            self.status = Some(e.to_string());
        }
    }

    pub fn run_panel_action(&mut self, action: &PanelAction) {
        match action {
            PanelAction::Clear => self.apply(None),
            PanelAction::Apply(id) => self.apply(Some(id)),
            PanelAction::Close => self.close_panel(),
        }
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let (config, source) = config_io::load_config(config_path, &cwd)?;
    match &source {
        Some(path) => info!(path = %path.display(), store = %config.store.name, "starting grid"),
        None => info!(store = %config.store.name, "starting grid with built-in defaults"),
    }

    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    let stats = app.state.stats();
    info!(
        hours = stats.total_hours,
        staff = stats.scheduled_staff.len(),
        "grid closed"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, Instant::now()),
                _ => {}
            }
        }
        // Promote a held press to a drag even when no event arrives
        app.state.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
