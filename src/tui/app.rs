//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation, gated on whether a dataset was uploaded
//! - Input event handling
//! - Background dataset upload via the upload worker

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::SimulatedImporter;
use crate::application::{AnalyticsService, AssessmentService};
use crate::config::Settings;
use crate::domain::{AssessmentReport, VitalsInput};
use crate::ports::DatasetImporter;

use super::ui::{
    analysis::render_analysis,
    patient::{render_patient_form, PatientFormState},
    prediction::render_prediction,
    render_disclaimer, render_nav,
    results::render_results,
    upload::{render_upload, UploadPhase, UploadState},
};
use super::worker::{UploadProgress, UploadWorker, UploadWorkerHandle};

/// Progress shown while the worker is still sleeping.
const MAX_PENDING_PROGRESS: f64 = 0.95;

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Analysis,
    Prediction,
    PatientInput,
    Results,
}

impl Screen {
    /// Screens that only make sense once a dataset has been uploaded.
    #[must_use]
    pub fn requires_data(self) -> bool {
        matches!(self, Self::Analysis | Self::Prediction)
    }
}

/// Main application state
pub struct App {
    screen: Screen,
    should_quit: bool,

    importer: Arc<SimulatedImporter>,
    assessment_service: AssessmentService,
    analytics_service: AnalyticsService,

    /// Set once an upload completes; never cleared
    has_data: bool,

    upload_state: UploadState,
    patient_form_state: PatientFormState,

    /// Last successful assessment
    report: Option<AssessmentReport>,

    pending_worker: Option<UploadWorkerHandle>,
    upload_started_at: Option<Instant>,
}

impl App {
    /// Create the application with the default adapters for `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self::with_dependencies(
            Arc::new(SimulatedImporter::new(settings.upload_delay)),
            AssessmentService::new(),
            AnalyticsService::default(),
        )
    }

    /// Create application with injected dependencies.
    #[must_use]
    pub fn with_dependencies(
        importer: Arc<SimulatedImporter>,
        assessment_service: AssessmentService,
        analytics_service: AnalyticsService,
    ) -> Self {
        Self {
            screen: Screen::Upload,
            should_quit: false,
            importer,
            assessment_service,
            analytics_service,
            has_data: false,
            upload_state: UploadState::default(),
            patient_form_state: PatientFormState::default(),
            report: None,
            pending_worker: None,
            upload_started_at: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.has_data
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        self.patient_form_state.clear_sensitive();
        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_worker();
            self.tick_upload_progress();

            terminal.draw(|f| self.draw(f))?;

            // Short poll to stay responsive
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the whole frame: navigation bar, current screen, disclaimer.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_nav(f, chunks[0], self.screen, self.has_data);

        let content = chunks[1];
        match (self.screen, &self.report) {
            (Screen::Upload, _) => render_upload(f, content, &self.upload_state, self.has_data),
            (Screen::Analysis, _) => render_analysis(f, content, &self.analytics_service),
            (Screen::Prediction, _) => render_prediction(f, content, &self.analytics_service),
            (Screen::Results, Some(report)) => render_results(f, content, report),
            (Screen::PatientInput | Screen::Results, _) => {
                render_patient_form(f, content, &self.patient_form_state);
            }
        }

        render_disclaimer(f, chunks[2]);
    }

    /// Poll the background worker for progress updates.
    fn poll_worker(&mut self) {
        while let Some(progress) = self
            .pending_worker
            .as_ref()
            .and_then(UploadWorkerHandle::try_recv)
        {
            match progress {
                UploadProgress::Processing => {
                    if !self.upload_state.is_processing() {
                        self.upload_state.phase = UploadPhase::Processing { progress: 0.0 };
                    }
                }
                UploadProgress::Complete(receipt) => {
                    self.finish_upload();
                    self.upload_state.phase = UploadPhase::Done { receipt };
                    self.has_data = true;
                    if self.screen == Screen::Upload {
                        self.screen = Screen::Analysis;
                    }
                    break;
                }
                UploadProgress::Error(message) => {
                    self.finish_upload();
                    self.upload_state.phase = UploadPhase::Failed { message };
                    break;
                }
            }
        }
    }

    fn finish_upload(&mut self) {
        self.pending_worker = None;
        self.upload_started_at = None;
    }

    /// Advance the upload gauge toward the importer's delay.
    fn tick_upload_progress(&mut self) {
        if self.pending_worker.is_none() {
            return;
        }
        let Some(started_at) = self.upload_started_at else {
            return;
        };
        let UploadPhase::Processing { progress } = &mut self.upload_state.phase else {
            return;
        };

        let delay = self.importer.delay().as_secs_f64();
        let elapsed = Instant::now()
            .saturating_duration_since(started_at)
            .as_secs_f64();
        let target = if delay > 0.0 {
            (elapsed / delay).min(MAX_PENDING_PROGRESS)
        } else {
            MAX_PENDING_PROGRESS
        };

        *progress = progress.max(target);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::F(1) => return self.navigate(Screen::PatientInput),
            KeyCode::F(2) => return self.navigate(Screen::Upload),
            KeyCode::F(3) => return self.navigate(Screen::Analysis),
            KeyCode::F(4) => return self.navigate(Screen::Prediction),
            _ => {}
        }

        match self.screen {
            Screen::Upload => self.handle_upload_key(key),
            Screen::Analysis | Screen::Prediction => self.handle_view_key(key),
            Screen::PatientInput => self.handle_patient_form_key(key),
            Screen::Results => self.handle_results_key(key),
        }
    }

    fn navigate(&mut self, target: Screen) {
        if target.requires_data() && !self.has_data {
            tracing::debug!("Ignoring navigation to {:?} before upload", target);
            return;
        }
        self.screen = target;
    }

    fn handle_upload_key(&mut self, key: KeyCode) {
        if self.upload_state.is_processing() {
            return;
        }

        match key {
            KeyCode::Enter => self.start_upload(),
            KeyCode::Backspace => self.upload_state.delete_char(),
            KeyCode::Delete => self.upload_state.clear(),
            KeyCode::Char(c) => self.upload_state.input_char(c),
            _ => {}
        }
    }

    fn handle_view_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('u') | KeyCode::Char('U') => self.navigate(Screen::Upload),
            KeyCode::Char('a') | KeyCode::Char('A') => self.navigate(Screen::Analysis),
            KeyCode::Char('p') | KeyCode::Char('P') => self.navigate(Screen::Prediction),
            KeyCode::Char('r') | KeyCode::Char('R') => self.navigate(Screen::PatientInput),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_patient_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.screen = Screen::Upload,
            KeyCode::Up | KeyCode::BackTab => self.patient_form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.patient_form_state.next_field(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.patient_form_state.load_sample_data(),
            KeyCode::Char(c) => self.patient_form_state.input_char(c),
            KeyCode::Backspace => self.patient_form_state.delete_char(),
            KeyCode::Delete => self.patient_form_state.clear_field(),
            KeyCode::Enter => self.submit_patient_form(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('b') | KeyCode::Char('B') => {
                if let Some(report) = &self.report {
                    self.patient_form_state
                        .replace_input(VitalsInput::from(&report.vitals));
                }
                self.patient_form_state.error_message = None;
                self.screen = Screen::PatientInput;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.patient_form_state.clear_sensitive();
                self.report = None;
                self.screen = Screen::PatientInput;
            }
            KeyCode::Esc => self.screen = Screen::Upload,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn submit_patient_form(&mut self) {
        match self.assessment_service.assess(&self.patient_form_state.input) {
            Ok(report) => {
                self.report = Some(report);
                self.screen = Screen::Results;

                // Clear plaintext buffers from the UI immediately.
                self.patient_form_state.clear_sensitive();
            }
            Err(e) => {
                self.patient_form_state.error_message = Some(e.to_string());
            }
        }
    }

    fn start_upload(&mut self) {
        if self.pending_worker.is_some() {
            return;
        }

        let path = PathBuf::from(self.upload_state.path.trim());
        if let Err(e) = self.importer.check(&path) {
            tracing::warn!("Upload rejected: {}", e);
            self.upload_state.phase = UploadPhase::Failed {
                message: e.to_string(),
            };
            return;
        }

        self.upload_state.phase = UploadPhase::Processing { progress: 0.0 };
        self.upload_started_at = Some(Instant::now());
        self.pending_worker = Some(UploadWorker::spawn(self.importer.clone(), path));
    }
}
