//! Application layer - core Elm architecture implementation.
//!
//! This module implements the Model-Update-View pattern: a single owned
//! [`AppModel`], a pure [`update`] reducer, and stateless view functions.
//! The driver below owns the terminal, the message channel, and the async
//! services, and routes everything through messages.

pub mod state;
pub mod update;
pub mod view;

pub use state::AppModel;
pub use update::update;
pub use view::render_app;

use std::{io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{signal, sync::mpsc, time::interval};
use tracing::{info, warn};
use tui_textarea::TextArea;

use crate::{
    config::Config,
    message::{AppMsg, PaneId},
    services::{ApiService, Debouncer, PromptSubmitter},
};

/// Main application following Elm architecture
pub struct Application {
    /// Terminal interface
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Application model (state)
    model: AppModel,
    /// Prompt editor widget
    textarea: TextArea<'static>,
    /// Message sender for async operations
    sender: mpsc::UnboundedSender<AppMsg>,
    /// Message receiver
    receiver: mpsc::UnboundedReceiver<AppMsg>,
    /// Services
    submitter: PromptSubmitter,
    debouncer: Debouncer,
    /// Application configuration
    config: Config,
    /// Whether the UI needs to be rerendered
    needs_render: bool,
}

impl Application {
    /// Create new application instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing ALP TUI application");

        let model = AppModel::new();
        let (sender, receiver) = mpsc::unbounded_channel();

        let api = ApiService::new(&config).context("Failed to initialize API service")?;
        let submitter = PromptSubmitter::new(api, sender.clone());
        let debouncer = Debouncer::new(
            Duration::from_millis(config.ui.debounce_ms),
            sender.clone(),
        );

        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(
            "Enter your prompt here... (e.g. 'Explain the concept of quantum computing in simple terms')",
        );

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        info!("Application initialized successfully");

        Ok(Self {
            terminal,
            model,
            textarea,
            sender,
            receiver,
            submitter,
            debouncer,
            config,
            needs_render: true, // Initial render is needed
        })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting application main loop");

        let mut events = EventStream::new();
        let mut tick = interval(Duration::from_millis(self.config.ui.tick_interval_ms));

        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        'main_loop: loop {
            tokio::select! {
                // Terminal input events
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event)? {
                                break 'main_loop;
                            }
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event error");
                        }
                        None => break 'main_loop,
                    }
                },

                // Handle internal messages with batching
                msg = self.receiver.recv() => {
                    if let Some(msg) = msg {
                        let mut messages = vec![msg];
                        while let Ok(additional_msg) = self.receiver.try_recv() {
                            messages.push(additional_msg);
                            // Limit batch size to prevent blocking
                            if messages.len() >= 10 {
                                break;
                            }
                        }

                        for batched_msg in messages {
                            if self.handle_message(batched_msg).await? {
                                break 'main_loop;
                            }
                        }
                    }
                },

                // Periodic tick for status expiry and spinners
                _ = tick.tick() => {
                    let _ = self.sender.send(AppMsg::Tick);
                },

                // Handle Ctrl+C (cross-platform)
                _ = &mut ctrl_c => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    break 'main_loop;
                }
            }

            if self.needs_render {
                self.render()?;
                self.needs_render = false;
            }
        }

        info!("Initiating graceful shutdown");
        self.debouncer.cancel();
        restore_terminal()?;
        info!("Graceful shutdown complete");
        Ok(())
    }

    /// Translate a terminal event into messages. Returns `true` to quit.
    fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(width, height) => {
                let _ = self.sender.send(AppMsg::TerminalResized(width, height));
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(true),
                KeyCode::Char('k') => {
                    let _ = self.sender.send(AppMsg::ComparisonToggled);
                    return Ok(false);
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => {
                if self.model.show_help {
                    let _ = self.sender.send(AppMsg::HelpToggle);
                } else {
                    return Ok(true);
                }
            }
            KeyCode::F(1) => {
                let _ = self.sender.send(AppMsg::HelpToggle);
            }
            KeyCode::Tab => {
                let _ = self.sender.send(AppMsg::FocusNext);
            }
            KeyCode::BackTab => {
                let _ = self.sender.send(AppMsg::FocusPrevious);
            }
            KeyCode::Enter
                if self.model.focused_pane == PaneId::Input
                    && key.modifiers.contains(KeyModifiers::ALT) =>
            {
                // Alt+Enter inserts a newline instead of submitting.
                self.textarea.insert_newline();
                self.send_input_changed();
            }
            KeyCode::Enter if self.model.focused_pane == PaneId::Input => {
                let _ = self.sender.send(AppMsg::PromptSubmitted);
            }
            KeyCode::Up if self.model.focused_pane == PaneId::Response => {
                let _ = self.sender.send(AppMsg::ResponseScrollUp);
            }
            KeyCode::Down if self.model.focused_pane == PaneId::Response => {
                let _ = self.sender.send(AppMsg::ResponseScrollDown);
            }
            _ => {
                if self.model.focused_pane == PaneId::Input && self.textarea.input(key) {
                    self.send_input_changed();
                }
            }
        }

        Ok(false)
    }

    fn send_input_changed(&mut self) {
        let text = self.textarea.lines().join("\n");
        let _ = self.sender.send(AppMsg::InputChanged(text));
    }

    /// Handle a message using the Elm update pattern
    async fn handle_message(&mut self, msg: AppMsg) -> Result<bool> {
        if matches!(msg, AppMsg::Quit) {
            return Ok(true);
        }

        // Side effects first, then the pure model update.
        self.handle_side_effects(&msg);

        if matches!(msg, AppMsg::Tick) {
            self.model
                .expire_status_message(self.config.ui.status_ttl_secs);
        }

        let effects = update(&mut self.model, msg)?;
        self.needs_render = true;

        for effect in effects {
            let _ = self.sender.send(effect);
        }

        Ok(false)
    }

    /// Handle side effects (I/O operations)
    fn handle_side_effects(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::InputChanged(_) => {
                self.debouncer.schedule();
            }

            AppMsg::SubmissionStarted(prompt, tier) => {
                let submitter = self.submitter.clone();
                let prompt = prompt.clone();
                let tier = *tier;
                tokio::spawn(async move {
                    submitter.submit(prompt, tier).await;
                });
            }

            AppMsg::ComparisonStarted(prompt) => {
                let submitter = self.submitter.clone();
                let prompt = prompt.clone();
                tokio::spawn(async move {
                    submitter.run_comparison(prompt).await;
                });
            }

            _ => {} // No side effects for other messages
        }
    }

    /// Render the application
    fn render(&mut self) -> Result<()> {
        view::style_input_editor(&mut self.textarea, &self.model);

        let model = &self.model;
        let textarea = &self.textarea;
        self.terminal
            .draw(|frame| render_app(model, textarea, frame))
            .context("Failed to draw frame")?;

        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}
