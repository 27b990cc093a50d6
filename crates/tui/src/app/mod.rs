use crate::input::InputState;
use crate::keybinds::{HintContext, Keybinds};
use crate::picker;
use crate::ui::layout::{self, LayoutState};
use crate::ui::panel::PanelType;
use crate::ui::progress;
use crate::Config;
use anyhow::Result;
use cvkick_backend::{JobEvent, SimulatedBackend};
use cvkick_wizard::views::{LetterMode, COVER_LETTER_PLACEHOLDER};
use cvkick_wizard::{Field, Job, Notice, Preference, Severity, Step, StepView, TextEdit, Wizard};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::VecDeque;
use std::future::Future;
use std::time::Instant;
use tokio::sync::mpsc;

mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::App;
pub use types::{AppAsyncEvent, Destination, Toast};

const MAX_TOASTS: usize = 3;

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = error.to_string();
        tracing::warn!("{context}: {message}");
        self.push_toast(Notice::destructive(context, message));
    }

    pub(super) fn push_toast(&mut self, notice: Notice) {
        while self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast::new(notice, Instant::now()));
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }

    pub(super) fn dispatch_job(&self, job: Job) {
        tracing::debug!("Dispatching {} job (ticket {})", job.kind.label(), job.ticket);
        let backend = self.backend.clone();
        let generation = self.wizard_generation;
        self.spawn_app_task(async move {
            AppAsyncEvent::Job {
                generation,
                event: backend.run_job(job).await,
            }
        });
    }
}
