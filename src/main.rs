use eframe::NativeOptions;
use nexutha_assistant::ai::Resolver;
use nexutha_assistant::config::Config;
use nexutha_assistant::core::{ChatAgent, ConversationHistory, RandomDelay};
use nexutha_assistant::logger;
use nexutha_assistant::services::{Preferences, PreferencesStore};
use nexutha_assistant::ui::NexuthaApp;
use std::sync::Arc;
use tokio::sync::Mutex;

fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("🚀 NEXUTHA assistant starting");

    // Replies are delayed on this runtime
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let config = Config::default();
    log::info!("📁 Configuration loaded");

    let preferences = PreferencesStore::new(config.preferences_path.clone());
    let fallback = Preferences {
        language: config.language,
        theme: config.theme,
    };
    log::info!("📄 Preferences file: {}", preferences.path().display());
    let prefs = match preferences.load() {
        Ok(saved) => saved.unwrap_or(fallback),
        Err(e) => {
            log::warn!("⚠️ Ignoring preferences: {:#}", e);
            fallback
        }
    };

    let agent = ChatAgent::new(
        Resolver::new(),
        ConversationHistory::new(config.history_capacity),
        Box::new(RandomDelay::new(config.thinking_min, config.thinking_max)),
        prefs.language,
    );
    let agent = Arc::new(Mutex::new(agent));

    let title = config.assistant_name.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([280.0, 360.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(NexuthaApp::new(cc, config, agent, preferences, prefs)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {}", e))?;

    log::info!("👋 NEXUTHA assistant stopped");
    Ok(())
}
