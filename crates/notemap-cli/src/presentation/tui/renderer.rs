//! TUI Renderer for the view command
//!
//! This module implements the terminal event loop for the interactive viewer.
//!
//! ## Design:
//! - The loop runs on the calling thread and owns the `MindMapApp`
//! - Generations run as tasks on a tokio runtime and report back over a
//!   channel tagged with their request sequence number
//! - Stale or post-teardown answers are filtered by the viewport, not here
//! - Mouse capture is enabled so card and popup presses reach the app

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notemap_runtime::{GenerationRequest, Result as RuntimeResult, TreeGenerator};
use notemap_types::TreeNode;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Handle;

use super::app::MindMapApp;
use super::screen::draw;

/// Generator answer sent from a worker task to the event loop
pub struct GenerationEvent {
    pub seq: u64,
    pub result: RuntimeResult<TreeNode>,
}

pub struct TuiRenderer {
    app: MindMapApp,
    generator: Arc<dyn TreeGenerator>,
    runtime: Handle,
    tx: Sender<GenerationEvent>,
    rx: Receiver<GenerationEvent>,
}

impl TuiRenderer {
    pub fn new(app: MindMapApp, generator: Arc<dyn TreeGenerator>, runtime: Handle) -> Self {
        let (tx, rx) = channel();
        Self {
            app,
            generator,
            runtime,
            tx,
            rx,
        }
    }

    /// Set up the terminal, run until the user quits, then restore it.
    pub fn run(mut self, auto_generate: bool) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if auto_generate && let Some(request) = self.app.request_generate() {
            self.spawn_generation(request);
        }

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| draw(&mut self.app, f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(request) = self.app.handle_key(key) {
                            self.spawn_generation(request);
                        }
                    }
                    Event::Mouse(mouse) => self.app.handle_mouse(mouse),
                    _ => {}
                }
            }

            while let Ok(GenerationEvent { seq, result }) = self.rx.try_recv() {
                self.app.apply_generation(seq, result);
            }

            if self.app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn spawn_generation(&self, request: GenerationRequest) {
        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();
        let GenerationRequest { seq, text } = request;

        self.runtime.spawn(async move {
            let result = generator.generate(text).await;
            // The receiver is gone once the viewer has quit
            let _ = tx.send(GenerationEvent { seq, result });
        });
    }
}
