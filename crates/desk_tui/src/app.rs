//! TUI application state and event handling.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

use desk_client::client::ApiClient;
use desk_client::config::ClientConfig;
use desk_client::submission::{AnyResponse, Submission};
use desk_contract::form::{FieldSpec, InputKind};
use desk_contract::instruments::{AnyForm, Instrument};
use desk_contract::rules::FieldErrors;
use desk_report::report::Report;

use crate::screens;

/// One instrument module: form, inline errors and submission state.
///
/// Modules share nothing; the selector only decides which one is visible.
pub struct Module {
    pub instrument: Instrument,
    pub form: AnyForm,
    pub errors: FieldErrors,
    pub submission: Submission,
    /// Focused field index within the form.
    pub focus: usize,
}

impl Module {
    fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            form: AnyForm::new(instrument),
            errors: FieldErrors::new(),
            submission: Submission::new(),
            focus: 0,
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        self.form.form().fields()
    }
}

/// One form line ready to draw.
#[derive(Debug, Clone)]
pub struct FieldLine {
    pub label: &'static str,
    pub value: String,
    pub choice: bool,
    pub error: Option<String>,
}

/// Rendering state snapshot
pub struct RenderState {
    pub active: usize,
    pub titles: Vec<&'static str>,
    pub fields: Vec<FieldLine>,
    pub focus: usize,
    pub in_flight: bool,
    pub report: Option<Report>,
    pub scroll: u16,
}

/// TUI application state
pub struct TuiApp {
    /// The nine instrument modules, in tab order
    modules: Vec<Module>,
    /// Active module index
    active: usize,
    /// Report scroll offset
    scroll: u16,
    /// Exit flag
    should_quit: bool,
    /// API client
    api_client: ApiClient,
    /// Settled submissions arrive here from spawned tasks
    tx: mpsc::UnboundedSender<(usize, u64, Result<AnyResponse>)>,
    rx: mpsc::UnboundedReceiver<(usize, u64, Result<AnyResponse>)>,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            modules: Instrument::ALL.into_iter().map(Module::new).collect(),
            active: 0,
            scroll: 0,
            should_quit: false,
            api_client: ApiClient::new(config.base_url_trimmed().to_string()),
            tx,
            rx,
            terminal,
        })
    }

    /// Get a snapshot of the render state
    fn render_state(&self) -> RenderState {
        let module = &self.modules[self.active];
        let fields = module
            .fields()
            .iter()
            .map(|spec| FieldLine {
                label: spec.label,
                value: module.form.form().value(spec.name).to_string(),
                choice: matches!(spec.input, InputKind::Choice(_)),
                error: module.errors.get(spec.name).map(str::to_string),
            })
            .collect();

        RenderState {
            active: self.active,
            titles: Instrument::ALL.iter().map(|i| i.title()).collect(),
            fields,
            focus: module.focus,
            in_flight: module.submission.in_flight(),
            report: module.submission.response().map(desk_report::render::report),
            scroll: self.scroll,
        }
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Settle any finished submissions, regardless of which module
            // is currently displayed.
            while let Ok((index, epoch, result)) = self.rx.try_recv() {
                let module = &mut self.modules[index];
                module.submission.complete(module.instrument, epoch, result);
            }

            let state = self.render_state();
            self.terminal.draw(|frame| {
                Self::draw(frame, &state);
            })?;

            // Handle events with timeout for async refresh
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.select(self.active + 1),
            KeyCode::BackTab => self.select(self.active + Instrument::ALL.len() - 1),
            KeyCode::Up => {
                let module = &mut self.modules[self.active];
                module.focus = module.focus.saturating_sub(1);
            }
            KeyCode::Down => {
                let module = &mut self.modules[self.active];
                if module.focus + 1 < module.fields().len() {
                    module.focus += 1;
                }
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(5),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(5),
            KeyCode::Enter => self.submit(self.active),
            KeyCode::Backspace => self.edit(|value| {
                value.pop();
            }),
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Char(' ') => {
                if self.focused_choice().is_some() {
                    self.cycle_choice(true);
                } else {
                    self.edit(|value| value.push(' '));
                }
            }
            KeyCode::Char(c) => {
                if self.focused_choice().is_none() {
                    self.edit(|value| value.push(c));
                }
            }
            _ => {}
        }
    }

    /// Switch the active module, dropping the outgoing module's display
    /// state. A request it still has in flight keeps running in the
    /// background, but its result is discarded on arrival; results are
    /// never carried across instruments.
    fn select(&mut self, index: usize) {
        let outgoing = &mut self.modules[self.active];
        outgoing.form = AnyForm::new(outgoing.instrument);
        outgoing.errors.clear();
        outgoing.submission.reset();
        outgoing.focus = 0;

        self.active = index % Instrument::ALL.len();
        self.scroll = 0;
    }

    /// Vocabulary of the focused field, when it is a choice field.
    fn focused_choice(&self) -> Option<&'static [&'static str]> {
        let module = &self.modules[self.active];
        match module.fields().get(module.focus)?.input {
            InputKind::Choice(tokens) => Some(tokens),
            InputKind::Text => None,
        }
    }

    /// Mutate the focused field's raw text.
    fn edit(&mut self, apply: impl FnOnce(&mut String)) {
        let module = &mut self.modules[self.active];
        let Some(spec) = module.fields().get(module.focus) else {
            return;
        };
        if let Some(value) = module.form.form_mut().value_mut(spec.name) {
            apply(value);
        }
    }

    /// Step a choice field through its vocabulary.
    fn cycle_choice(&mut self, forward: bool) {
        let Some(tokens) = self.focused_choice() else {
            return;
        };
        self.edit(|value| {
            let position = tokens.iter().position(|&t| t == value.as_str());
            let next = match (position, forward) {
                (Some(i), true) => (i + 1) % tokens.len(),
                (Some(i), false) => (i + tokens.len() - 1) % tokens.len(),
                (None, _) => 0,
            };
            *value = tokens[next].to_string();
        });
    }

    /// Validate the active form and dispatch the request.
    ///
    /// A no-op while this module already has a request in flight; other
    /// modules are unaffected. Invalid input surfaces field errors and
    /// nothing leaves the client.
    fn submit(&mut self, index: usize) {
        let module = &mut self.modules[index];
        if !module.submission.can_submit() {
            return;
        }

        match module.form.validate() {
            Ok(request) => {
                module.errors.clear();
                let Some(epoch) = module.submission.begin() else {
                    return;
                };
                let client = self.api_client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.submit(&request).await;
                    let _ = tx.send((index, epoch, result));
                });
            }
            Err(errors) => {
                module.errors = errors;
            }
        }
    }

    /// Draw the current screen
    fn draw(frame: &mut Frame, state: &RenderState) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        screens::draw_header(frame, chunks[0], state.titles[state.active]);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(chunks[1]);

        screens::draw_instrument_list(frame, content[0], &state.titles, state.active);

        let form_height = state.fields.len() as u16 + 4;
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(form_height), Constraint::Min(0)])
            .split(content[1]);

        screens::draw_form(frame, right[0], &state.fields, state.focus, state.in_flight);
        screens::draw_report(frame, right[1], state.report.as_ref(), state.scroll);

        screens::draw_footer(frame, chunks[2]);
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_starts_idle_with_defaults() {
        let module = Module::new(Instrument::ArithmeticBasket);
        assert!(module.submission.can_submit());
        assert!(module.errors.is_empty());
        assert_eq!(module.focus, 0);
        assert_eq!(module.form.form().value("option_type"), "call");
        assert_eq!(module.form.form().value("control_variate"), "none");
    }

    #[test]
    fn every_instrument_has_a_module_form() {
        for instrument in Instrument::ALL {
            let module = Module::new(instrument);
            assert!(!module.fields().is_empty(), "{:?}", instrument);
        }
    }
}
