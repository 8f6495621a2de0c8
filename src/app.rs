// App state and main event loop.
// Routes between screens and turns keyboard and mouse input into list view operations.

use std::time::Duration;

use chrono::Utc;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::models::{AnalyticModel, ModelSource};
use crate::state::{
    Confirm, ListNavigator, ListViewState, ModelTab, Notifier, RowTarget, Toasts,
};
use crate::ui::{self, Button, ButtonVariant, button_at, modal};

/// What the editor screen was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTarget {
    New,
    Existing(u64),
}

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    Home,
    #[default]
    Models,
    Editor(EditorTarget),
}

/// Navigation target of the list view's callbacks.
#[derive(Debug, Default)]
pub struct Router {
    pub screen: Screen,
}

impl ListNavigator for Router {
    fn on_new(&mut self) {
        self.screen = Screen::Editor(EditorTarget::New);
    }

    fn on_edit(&mut self, id: u64) {
        self.screen = Screen::Editor(EditorTarget::Existing(id));
    }

    fn on_home(&mut self) {
        self.screen = Screen::Home;
    }
}

/// Actions on the models toolbar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Home,
    New,
    Reload,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 3] = [
        ToolbarAction::Home,
        ToolbarAction::New,
        ToolbarAction::Reload,
    ];
}

/// Main application state.
pub struct App {
    pub router: Router,
    pub models: ListViewState,
    pub toasts: Toasts,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Toolbar button positions from the last frame.
    pub toolbar_rects: Vec<Rect>,
    /// Tab button positions from the last frame.
    pub tab_rects: Vec<Rect>,
    source: Box<dyn ModelSource>,
    pending_load: bool,
}

impl App {
    pub fn new(source: Box<dyn ModelSource>, config: &Config) -> Self {
        let mut models = ListViewState::new(config.keep_selection_across_tabs);
        models.set_loading();
        Self {
            router: Router::default(),
            models,
            toasts: Toasts::new(config.toast_seconds),
            show_help: false,
            should_quit: false,
            toolbar_rects: Vec::new(),
            tab_rects: Vec::new(),
            source,
            pending_load: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.router.screen
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Look up a loaded record by identifier.
    pub fn model(&self, id: u64) -> Option<&AnalyticModel> {
        self.models.records.data()?.iter().find(|m| m.id == id)
    }

    /// Toolbar buttons for the models screen.
    pub fn toolbar(&self) -> Vec<Button> {
        ToolbarAction::ALL
            .iter()
            .map(|action| match action {
                ToolbarAction::Home => Button::new("Home").variant(ButtonVariant::Ghost),
                ToolbarAction::New => Button::new("+ New")
                    .variant(ButtonVariant::Primary)
                    .disabled(self.models.records.is_loading()),
                ToolbarAction::Reload => Button::new("Reload")
                    .variant(ButtonVariant::Outline)
                    .loading(self.models.records.is_loading()),
            })
            .collect()
    }

    /// Read records from the source into the list view.
    pub fn load_models(&mut self) {
        self.pending_load = false;
        match self.source.list() {
            Ok(records) => {
                tracing::info!(count = records.len(), "models loaded");
                self.models.set_loaded(records);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load models");
                self.toasts.error(&format!("Could not load models: {}", e));
                self.models.set_error(e.to_string());
            }
        }
    }

    /// Mark the list as loading; records are read on the next tick so the
    /// loading state gets drawn first.
    pub fn request_reload(&mut self) {
        self.models.set_loading();
        self.pending_load = true;
    }

    /// Work deferred until after a frame has been drawn.
    pub fn tick(&mut self) {
        if self.pending_load {
            self.load_models();
        }
        self.toasts.prune(Utc::now());
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let backdrop = terminal.draw(|frame| ui::draw(frame, self))?.buffer.clone();
            self.tick();

            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;
                let mut prompt = TerminalConfirm::new(terminal, backdrop);
                self.handle_event(event, &mut prompt);
            }
        }
        Ok(())
    }

    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event, confirm: &mut dyn Confirm) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, confirm),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(column, row, confirm),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, confirm: &mut dyn Confirm) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        match self.router.screen {
            Screen::Home => match key.code {
                KeyCode::Char('m') | KeyCode::Enter => self.router.screen = Screen::Models,
                KeyCode::Char('n') => self.new_model(),
                _ => {}
            },
            Screen::Editor(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('b')) {
                    self.router.screen = Screen::Models;
                }
            }
            Screen::Models => self.handle_models_key(key, confirm),
        }
    }

    fn handle_models_key(&mut self, key: KeyEvent, confirm: &mut dyn Confirm) {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.models.set_tab(self.models.active_tab.next());
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.models.set_tab(self.models.active_tab.prev());
            }
            KeyCode::Char('1') => self.models.set_tab(ModelTab::New),
            KeyCode::Char('2') => self.models.set_tab(ModelTab::Archived),
            KeyCode::Down | KeyCode::Char('j') => self.models.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.models.select_prev(),
            KeyCode::Char(' ') => {
                if let Some(id) = self.models.cursor_id() {
                    self.models.handle_select_row(id);
                }
            }
            KeyCode::Char('a') => self.models.handle_select_all(),
            KeyCode::Enter => {
                if let Some(id) = self.models.cursor_id() {
                    self.models.open_row(id, &mut self.router);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.models.cursor_id() {
                    self.models.handle_delete(id, confirm, &mut self.toasts);
                }
            }
            KeyCode::Char('n') => self.new_model(),
            KeyCode::Char('h') | KeyCode::Esc => self.router.on_home(),
            KeyCode::Char('r') => self.request_reload(),
            _ => {}
        }
    }

    // Creating is blocked until the list has settled.
    fn new_model(&mut self) {
        if self.models.records.is_loading() {
            return;
        }
        self.router.on_new();
    }

    fn handle_click(&mut self, column: u16, row: u16, confirm: &mut dyn Confirm) {
        if self.show_help || self.router.screen != Screen::Models {
            return;
        }

        if let Some(index) = button_at(&self.toolbar_rects, &self.toolbar(), column, row) {
            match ToolbarAction::ALL[index] {
                ToolbarAction::Home => self.router.on_home(),
                ToolbarAction::New => self.new_model(),
                ToolbarAction::Reload => self.request_reload(),
            }
            return;
        }

        if let Some(index) = button_at(&self.tab_rects, &ui::tab_buttons(&self.models), column, row)
        {
            self.models.set_tab(ModelTab::ALL[index]);
            return;
        }

        match self.models.hit_test(column, row) {
            Some(RowTarget::SelectAll) => self.models.handle_select_all(),
            Some(RowTarget::Checkbox(id)) => self.models.handle_select_row(id),
            Some(RowTarget::Delete(id)) => {
                self.models.handle_delete(id, confirm, &mut self.toasts);
            }
            Some(RowTarget::Open(id)) => self.models.open_row(id, &mut self.router),
            None => {}
        }
    }
}

/// Blocking yes/no prompt drawn over the last frame.
pub struct TerminalConfirm<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    backdrop: Buffer,
}

impl<'a, B: Backend> TerminalConfirm<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, backdrop: Buffer) -> Self {
        Self { terminal, backdrop }
    }
}

impl<B: Backend> Confirm for TerminalConfirm<'_, B> {
    fn confirm(&mut self, message: &str) -> bool {
        loop {
            let backdrop = &self.backdrop;
            let drawn = self.terminal.draw(|frame| {
                let buf = frame.buffer_mut();
                if buf.area == backdrop.area {
                    buf.clone_from(backdrop);
                }
                modal::draw_confirm_modal(frame, message);
            });
            if let Err(e) = drawn {
                tracing::error!(error = %e, "failed to draw confirm prompt");
                return false;
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return false,
                    _ => {}
                },
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "failed to read confirm answer");
                    return false;
                }
            }
        }
    }
}
