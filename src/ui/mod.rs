pub mod app;
pub mod buttons;
pub mod chat;

pub use app::NexuthaApp;
