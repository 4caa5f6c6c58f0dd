//! Rule-based FAQ assistant for NEXUTHA: bilingual knowledge base, keyword
//! resolver, message formatter and the desktop chat window.

pub mod ai;
pub mod config;
pub mod core;
pub mod i18n;
pub mod knowledge;
pub mod logger;
pub mod services;
pub mod ui;
