pub mod runner;
pub mod templates;

pub use runner::{BackendConfig, JobEvent, SimulatedBackend};
pub use templates::COVER_LETTER_TEMPLATE;
