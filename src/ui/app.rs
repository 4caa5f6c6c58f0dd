/// Main window: wires the chat agent to the egui frame loop
use super::{buttons, chat};
use crate::config::Config;
use crate::core::{self, AgentError, ChatAgent, ConversationMessage, Sender};
use crate::i18n::{self, Language, Theme};
use crate::services::{Preferences, PreferencesStore};
use eframe::egui;
use std::path::Path;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct NexuthaApp {
    config: Config,
    agent: Arc<Mutex<ChatAgent>>,
    preferences: PreferencesStore,
    language: Language,
    theme: Theme,
    messages: Vec<ConversationMessage>,
    input_text: String,
    is_thinking: bool,
    response_receiver: std_mpsc::Receiver<Result<ConversationMessage, AgentError>>,
    response_sender: std_mpsc::Sender<Result<ConversationMessage, AgentError>>,
    start_time: Instant,
    welcome_id: Option<Uuid>,
    theme_applied: bool,
}

impl NexuthaApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        agent: Arc<Mutex<ChatAgent>>,
        preferences: PreferencesStore,
        prefs: Preferences,
    ) -> Self {
        if let Some(path) = &config.cjk_font_path {
            install_font(&cc.egui_ctx, path);
        }

        let (sender, receiver) = std_mpsc::channel();

        Self {
            config,
            agent,
            preferences,
            language: prefs.language,
            theme: prefs.theme,
            messages: Vec::new(),
            input_text: String::new(),
            is_thinking: false,
            response_receiver: receiver,
            response_sender: sender,
            start_time: Instant::now(),
            welcome_id: None,
            theme_applied: false,
        }
    }

    fn send_message(&mut self, ctx: &egui::Context, message: String) {
        if message.trim().is_empty() || self.is_thinking {
            return;
        }

        self.messages
            .push(ConversationMessage::new(Sender::User, message.trim()));
        self.input_text.clear();
        self.is_thinking = true;

        let agent = Arc::clone(&self.agent);
        let sender = self.response_sender.clone();
        let ctx_clone = ctx.clone();

        tokio::spawn(async move {
            let result = core::respond(agent, message).await;
            if let Err(e) = sender.send(result) {
                log::error!("Failed to deliver reply: {}", e);
            }
            ctx_clone.request_repaint();
        });
    }

    fn receive_replies(&mut self) {
        while let Ok(result) = self.response_receiver.try_recv() {
            match result {
                Ok(reply) => self.messages.push(reply),
                Err(e) => {
                    log::warn!("⚠️ Reply failed: {}", e);
                    let text = i18n::ui_text(self.language).error;
                    self.messages.push(ConversationMessage::new(Sender::Bot, text));
                }
            }
            self.is_thinking = false;
        }
    }

    /// Shows the greeting once the welcome delay has passed
    fn show_welcome(&mut self, ctx: &egui::Context) {
        if self.welcome_id.is_some() {
            return;
        }

        let elapsed = self.start_time.elapsed();
        if elapsed < self.config.welcome_delay {
            ctx.request_repaint_after(self.config.welcome_delay - elapsed);
            return;
        }

        match self.agent.try_lock() {
            Ok(mut agent) => {
                let welcome = agent.welcome();
                self.welcome_id = Some(welcome.id);
                self.messages.push(welcome);
            }
            Err(_) => ctx.request_repaint(),
        }
    }

    /// Switches both the window and the agent, and rewrites the greeting
    fn set_language(&mut self, language: Language) {
        self.language = language;

        match self.agent.try_lock() {
            Ok(mut agent) => {
                agent.set_language(language);
                agent.relocalize_welcome();
            }
            Err(_) => {
                let agent = Arc::clone(&self.agent);
                tokio::spawn(async move {
                    let mut agent = agent.lock().await;
                    agent.set_language(language);
                    agent.relocalize_welcome();
                });
            }
        }

        if let Some(id) = self.welcome_id {
            let welcome = i18n::ui_text(language).welcome;
            if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                message.content = welcome.to_string();
            }
        }
        self.save_preferences();
    }

    fn clear_conversation(&mut self) {
        self.messages.clear();
        match self.agent.try_lock() {
            Ok(mut agent) => agent.clear_history(),
            Err(_) => {
                let agent = Arc::clone(&self.agent);
                tokio::spawn(async move {
                    agent.lock().await.clear_history();
                });
            }
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        self.theme = theme;
        apply_theme(ctx, theme);
        self.save_preferences();
    }

    fn save_preferences(&self) {
        let prefs = Preferences {
            language: self.language,
            theme: self.theme,
        };
        if let Err(e) = self.preferences.save(&prefs) {
            log::warn!("⚠️ Could not save preferences: {:#}", e);
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    });
}

/// Adds a font with Japanese glyphs as fallback for both families
fn install_font(ctx: &egui::Context, path: &Path) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("⚠️ Font {} not loaded: {}", path.display(), e);
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes).into());
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("🔤 Font loaded: {}", path.display());
}

impl eframe::App for NexuthaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            apply_theme(ctx, self.theme);
            self.theme_applied = true;
        }

        self.receive_replies();
        self.show_welcome(ctx);

        let text = i18n::ui_text(self.language);
        let mut new_language = None;
        let mut new_theme = None;
        let mut clear = false;
        let mut outgoing = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} · {}", self.config.assistant_name, text.title));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    new_theme = buttons::theme_toggle(ui, self.theme);
                    new_language = buttons::language_toggle(ui, self.language);
                    clear = buttons::clear_button(ui, text.clear, !self.is_thinking);
                });
            });
        });

        egui::TopBottomPanel::bottom("input").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(question) = buttons::quick_questions(ui, text.quick_questions, !self.is_thinking) {
                outgoing = Some(question.to_string());
            }

            ui.horizontal(|ui| {
                let hint = if self.is_thinking { text.sending } else { text.placeholder };
                let response = ui.add_enabled(
                    !self.is_thinking,
                    egui::TextEdit::singleline(&mut self.input_text)
                        .hint_text(hint)
                        .desired_width(ui.available_width() - 64.0),
                );
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(!self.is_thinking, egui::Button::new(text.send))
                    .clicked();

                if enter_pressed || clicked {
                    outgoing = Some(self.input_text.clone());
                    response.request_focus();
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat::show_messages(ui, &self.messages, text, self.is_thinking);
        });

        if let Some(language) = new_language {
            self.set_language(language);
        }
        if let Some(theme) = new_theme {
            self.set_theme(ctx, theme);
        }
        if clear {
            self.clear_conversation();
        }
        if let Some(message) = outgoing {
            self.send_message(ctx, message);
        }
    }
}
