use super::*;
use cvkick_wizard::CvFile;

impl App {
    /// Mounts a fresh wizard or returns to the home screen. Either way the
    /// current wizard is dropped, which cancels whatever it had in flight.
    pub fn navigate(&mut self, destination: Destination) {
        let had_pending_job = self
            .wizard
            .as_ref()
            .is_some_and(|wizard| wizard.view().is_busy());
        self.wizard = None;
        self.path_input.clear();
        self.focus = 0;
        if had_pending_job {
            self.push_toast(Notice::info(
                "Cancelled",
                "The operation in progress was stopped.",
            ));
        }

        match destination {
            Destination::Home => tracing::info!("Navigated home"),
            Destination::NewApplication => {
                self.wizard_generation += 1;
                self.wizard = Some(Wizard::new(self.config.wizard.completed_steps));
                tracing::info!("Started application wizard #{}", self.wizard_generation);
            }
        }
    }

    pub fn process_async_events(&mut self) {
        let mut events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }

        let was_submitted = self.wizard.as_ref().is_some_and(Wizard::is_submitted);
        for event in events {
            self.apply_async_event(event);
        }
        if !was_submitted && self.wizard.as_ref().is_some_and(Wizard::is_submitted) {
            self.toasts.clear();
        }
        self.sync_notices();
    }

    fn apply_async_event(&mut self, event: AppAsyncEvent) {
        match event {
            AppAsyncEvent::Job { generation, event } => {
                if generation != self.wizard_generation {
                    tracing::debug!("Ignoring job result from wizard #{generation}");
                    return;
                }
                match event {
                    JobEvent::Finished { ticket, output } => {
                        if let Some(ref mut wizard) = self.wizard {
                            wizard.complete(ticket, output);
                        }
                    }
                    JobEvent::Cancelled { ticket } => {
                        tracing::debug!("Job {ticket} was cancelled");
                    }
                }
            }
        }
    }

    pub(super) fn sync_notices(&mut self) {
        let notices = match self.wizard.as_mut() {
            Some(wizard) => wizard.take_notices(),
            None => return,
        };
        for notice in notices {
            self.push_toast(notice);
        }
    }

    pub fn expire_toasts(&mut self, now: Instant) {
        let lifetime = self.config.toast_duration();
        self.toasts
            .retain(|toast| now.duration_since(toast.shown_at) < lifetime);
    }

    pub(super) fn select_cv(&mut self, file: CvFile) {
        let job = self.wizard.as_mut().and_then(|w| w.select_cv(file));
        if let Some(job) = job {
            self.dispatch_job(job);
        }
        self.sync_notices();
    }

    pub(super) fn submit_path(&mut self) {
        let raw = self.path_input.take();
        match picker::pick_file(&raw) {
            Ok(file) => {
                tracing::debug!("Picked {} ({})", file.name, file.mime_type);
                self.select_cv(file);
            }
            Err(e) => self.report_error("Could Not Open File", format!("{e:#}")),
        }
    }

    pub(super) fn generate_cover_letter(&mut self) {
        let job = self
            .wizard
            .as_mut()
            .and_then(Wizard::generate_cover_letter);
        if let Some(job) = job {
            self.dispatch_job(job);
        }
        self.sync_notices();
    }

    pub(super) fn send_application(&mut self) {
        let job = self.wizard.as_mut().and_then(Wizard::send);
        if let Some(job) = job {
            self.dispatch_job(job);
        }
        self.sync_notices();
    }

    pub(super) fn advance(&mut self) {
        if self.wizard.as_mut().is_some_and(Wizard::advance) {
            self.focus = 0;
        }
        self.sync_notices();
    }

    pub(super) fn retreat(&mut self) {
        if self.current_step() == Some(Step::Upload) {
            self.navigate(Destination::Home);
            return;
        }
        if self.wizard.as_mut().is_some_and(Wizard::retreat) {
            self.focus = 0;
        }
    }

    pub(super) fn cycle_focus(&mut self, forward: bool) {
        let count = self.focus_count();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    pub(super) fn edit_focused(&mut self, edit: TextEdit) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if let Some(ref mut wizard) = self.wizard {
            wizard.edit(field, edit);
        }
    }
}
