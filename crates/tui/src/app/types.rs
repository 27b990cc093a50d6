use cvkick_backend::JobEvent;
use cvkick_wizard::Notice;
use std::time::Instant;

#[derive(Debug)]
pub enum AppAsyncEvent {
    Job { generation: u64, event: JobEvent },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    NewApplication,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(notice: Notice, shown_at: Instant) -> Self {
        Self { notice, shown_at }
    }
}
