use std::cell::Cell;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::data::{self, metrics::Metrics};
use crate::io::catalog_io::load_catalogs;
use crate::io::config_io::load_config;
use crate::logging::{self, LogTarget};
use crate::model::{AppConfig, Catalog, Entity, Mode, PerMode, RailLine, Stop, Vehicle};
use crate::ops::filter::{self, Selection};
use crate::ops::kpi::{self, KpiSummary};
use crate::store::{Interest, SelectionStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Seed for the mock performance series
const METRICS_SEED: u64 = 2024;

/// Which page is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    LiveMap,
    Performance,
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigate,
    /// The route/line picker has focus
    Picker,
}

/// Route/line picker UI state. Selection itself lives in the store.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    pub query: String,
    /// Byte offset of the cursor in `query`
    pub cursor: usize,
    pub open: bool,
    /// Index into the current candidate list
    pub highlight: usize,
    /// First candidate shown in the popup list
    pub scroll: usize,
    /// List rows the popup had room for on the last draw
    pub visible_rows: usize,
}

/// Main application state
pub struct App {
    pub store: SelectionStore,
    pub config: AppConfig,
    pub theme: Theme,
    pub view: View,
    pub input_mode: InputMode,
    pub picker: PickerState,
    pub vehicles: Vec<Vehicle>,
    pub rail_lines: Vec<RailLine>,
    pub stops: PerMode<Vec<Stop>>,
    pub metrics: Metrics,
    /// KPI counts for the active view, rebuilt when the store says so
    pub kpi: KpiSummary,
    pub should_quit: bool,
    /// Screen rect of the picker input, recorded during render
    pub picker_anchor: Option<Rect>,
    /// Screen rect of the open popup, recorded during render
    pub popup_area: Option<Rect>,
    view_dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: AppConfig, catalogs: PerMode<Catalog>) -> Self {
        let mut store = SelectionStore::new(catalogs);

        let view_dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&view_dirty);
        store.subscribe(Interest::ActiveView, move |_, _| flag.set(true));

        let theme = Theme::from_config(&config.ui);

        let mut app = App {
            store,
            config,
            theme,
            view: View::LiveMap,
            input_mode: InputMode::Navigate,
            picker: PickerState::default(),
            vehicles: data::vehicles::vehicles(),
            rail_lines: data::rail::rail_lines(),
            stops: PerMode::new(data::routes::bus_stops(), data::rail::rail_stations()),
            metrics: data::metrics::generate(METRICS_SEED),
            kpi: KpiSummary::default(),
            should_quit: false,
            picker_anchor: None,
            popup_area: None,
            view_dirty,
        };
        app.refresh_derived();
        app
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog(self.store.mode())
    }

    pub fn selection(&self) -> &Selection {
        self.store.selection(self.store.mode())
    }

    /// Candidates for the current query in the active catalog
    pub fn candidates(&self) -> Vec<&Entity> {
        filter::search_capped(
            self.catalog(),
            &self.picker.query,
            self.config.picker.max_results,
        )
    }

    /// Rebuild KPI counts if the store changed since the last call
    pub fn refresh_derived(&mut self) {
        if !self.view_dirty.replace(false) {
            return;
        }
        let mode = self.store.mode();
        let visible = self.store.visible_entity_ids(mode);
        let vehicles = kpi::visible_vehicles(&self.vehicles, mode, &visible);
        self.kpi = kpi::summarize(&vehicles);
    }

    /// Run a filter-engine operation against the active namespace and store
    /// the result.
    fn update_selection(&mut self, op: impl FnOnce(&Selection, &[&Entity]) -> Selection) {
        let mode = self.store.mode();
        let next = {
            let candidates = self.candidates();
            op(self.store.selection(mode), &candidates)
        };
        self.store.set_selection(mode, next);
    }

    pub fn toggle_entity(&mut self, id: &str) {
        self.update_selection(|sel, _| filter::toggle(sel, id));
    }

    pub fn toggle_highlighted(&mut self) {
        let id = match self.candidates().get(self.picker.highlight) {
            Some(e) => e.id.clone(),
            None => return,
        };
        self.toggle_entity(&id);
    }

    pub fn select_all_visible(&mut self) {
        self.update_selection(filter::select_all);
    }

    pub fn clear_visible(&mut self) {
        self.update_selection(filter::clear_visible);
    }

    /// Select every entity in the active catalog, ignoring the query
    pub fn select_entire_catalog(&mut self) {
        let mode = self.store.mode();
        let next = filter::select_entire_catalog(self.store.selection(mode), self.store.catalog(mode));
        self.store.set_selection(mode, next);
    }

    pub fn clear_all(&mut self) {
        self.update_selection(|sel, _| filter::clear_all(sel));
    }

    /// Drop the most recently added chip
    pub fn remove_last_chip(&mut self) {
        let last = match self.selection().last() {
            Some(id) => id.clone(),
            None => return,
        };
        self.toggle_entity(&last);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.store.mode() == mode {
            return;
        }
        self.store.set_mode(mode);
        self.reset_query();
        self.picker.open = false;
    }

    pub fn toggle_auxiliary_markers(&mut self) {
        let show = !self.store.show_auxiliary_markers();
        self.store.set_show_auxiliary_markers(show);
    }

    pub fn focus_picker(&mut self) {
        self.input_mode = InputMode::Picker;
        self.open_picker();
    }

    pub fn blur_picker(&mut self) {
        self.input_mode = InputMode::Navigate;
        self.picker.open = false;
    }

    pub fn open_picker(&mut self) {
        if !self.picker.open {
            self.picker.open = true;
            self.picker.highlight = 0;
            self.picker.scroll = 0;
        }
    }

    pub fn close_picker(&mut self) {
        self.picker.open = false;
    }

    fn reset_query(&mut self) {
        self.picker.query.clear();
        self.picker.cursor = 0;
        self.picker.highlight = 0;
        self.picker.scroll = 0;
    }

    /// Called after every query edit: reopen and restart the highlight
    pub fn query_changed(&mut self) {
        self.picker.open = true;
        self.picker.highlight = 0;
        self.picker.scroll = 0;
    }

    /// Move the highlight by `delta`, clamped to the candidate list
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.candidates().len();
        if len == 0 {
            self.picker.highlight = 0;
            return;
        }
        let current = self.picker.highlight.min(len - 1) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.picker.highlight = next as usize;
        self.adjust_scroll();
    }

    pub fn highlight_first(&mut self) {
        self.picker.highlight = 0;
        self.adjust_scroll();
    }

    pub fn highlight_last(&mut self) {
        self.picker.highlight = self.candidates().len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the highlight inside the visible window of the popup list
    pub fn adjust_scroll(&mut self) {
        let rows = self.picker.visible_rows.max(1);
        let p = &mut self.picker;
        if p.highlight < p.scroll {
            p.scroll = p.highlight;
        }
        if p.highlight >= p.scroll + rows {
            p.scroll = p.highlight + 1 - rows;
        }
    }
}

/// Load config, catalogs and logging, then run the TUI until quit
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = load_config(config_path)?;
    let _log_guard = logging::init(&config.log, LogTarget::Tui);
    tracing::debug!(?source, "loaded config");
    let catalogs = load_catalogs(&config.catalog)?;
    tracing::info!(
        routes = catalogs.bus.len(),
        lines = catalogs.rail.len(),
        "starting dashboard"
    );

    let mut app = App::new(config, catalogs);

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
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.refresh_derived();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                // Next draw recomputes the popup placement
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
