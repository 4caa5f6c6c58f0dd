use crate::ai::Resolver;
use crate::core::delay::ThinkingDelay;
use crate::core::history::{ConversationHistory, ConversationMessage, Sender};
use crate::i18n::{self, Language};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a reply is still being prepared")]
    Busy,
}

/// A resolved reply waiting for its thinking delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub reply: String,
    pub delay: Duration,
}

/// One chat session: resolver, bounded history, language and the
/// processing flag that allows a single outstanding reply.
pub struct ChatAgent {
    resolver: Resolver,
    history: ConversationHistory,
    delay: Box<dyn ThinkingDelay>,
    language: Language,
    processing: bool,
    welcome_id: Option<Uuid>,
}

impl ChatAgent {
    pub fn new(
        resolver: Resolver,
        history: ConversationHistory,
        delay: Box<dyn ThinkingDelay>,
        language: Language,
    ) -> Self {
        Self {
            resolver,
            history,
            delay,
            language,
            processing: false,
            welcome_id: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::info!("🌐 Language switched to {}", language);
        }
        self.language = language;
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Records the user message and resolves the answer. The caller shows the
    /// reply after `delay` and then calls [`ChatAgent::complete`].
    pub fn begin(&mut self, message: &str) -> Result<PendingReply, AgentError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AgentError::EmptyMessage);
        }
        if self.processing {
            log::warn!("⏳ Message rejected, previous reply still pending");
            return Err(AgentError::Busy);
        }

        self.processing = true;
        self.history.append(Sender::User, message);

        let reply = self.resolver.resolve(message, self.language);
        let delay = self.delay.next_delay();
        log::debug!("🧠 Reply ready, showing in {} ms", delay.as_millis());

        Ok(PendingReply { reply, delay })
    }

    /// Records the bot reply and accepts input again
    pub fn complete(&mut self, reply: &str) -> ConversationMessage {
        self.processing = false;
        self.history.append(Sender::Bot, reply).clone()
    }

    /// Records and returns the greeting shown when the window opens
    pub fn welcome(&mut self) -> ConversationMessage {
        let text = i18n::ui_text(self.language).welcome;
        let message = self.history.append(Sender::Bot, text).clone();
        self.welcome_id = Some(message.id);
        message
    }

    /// Rewrites the greeting in the current language. `None` when no greeting
    /// was shown or it has left the history.
    pub fn relocalize_welcome(&mut self) -> Option<ConversationMessage> {
        let id = self.welcome_id?;
        let text = i18n::ui_text(self.language).welcome;
        self.history.update(id, text).cloned()
    }

    pub fn history(&self) -> Vec<ConversationMessage> {
        self.history.snapshot()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.welcome_id = None;
        log::info!("🗑️  Conversation history cleared");
    }
}

/// Full exchange for a shared agent: resolve, wait out the thinking delay
/// without holding the lock, then record the reply. Once started, the reply
/// is always completed.
pub async fn respond(
    agent: Arc<Mutex<ChatAgent>>,
    message: String,
) -> Result<ConversationMessage, AgentError> {
    let pending = {
        let mut agent = agent.lock().await;
        agent.begin(&message)?
    };

    if !pending.delay.is_zero() {
        tokio::time::sleep(pending.delay).await;
    }

    let reply = agent.lock().await.complete(&pending.reply);
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::templates;
    use crate::core::delay::NoDelay;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedDelay(Duration);

    impl ThinkingDelay for FixedDelay {
        fn next_delay(&mut self) -> Duration {
            self.0
        }
    }

    fn agent_with(delay: Box<dyn ThinkingDelay>, language: Language) -> ChatAgent {
        ChatAgent::new(
            Resolver::with_rng(StdRng::seed_from_u64(3)),
            ConversationHistory::default(),
            delay,
            language,
        )
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let mut agent = agent_with(Box::new(NoDelay), Language::Ja);
        assert_eq!(agent.begin("   "), Err(AgentError::EmptyMessage));
        assert!(!agent.is_processing());
        assert!(agent.history().is_empty());
    }

    #[test]
    fn test_second_message_while_processing_is_busy() {
        let mut agent = agent_with(Box::new(NoDelay), Language::En);
        let pending = agent.begin("pricing").unwrap();
        assert!(agent.is_processing());
        assert_eq!(agent.begin("contact"), Err(AgentError::Busy));

        agent.complete(&pending.reply);
        assert!(!agent.is_processing());
        assert!(agent.begin("contact").is_ok());
    }

    #[test]
    fn test_exchange_is_recorded_in_order() {
        let mut agent = agent_with(Box::new(NoDelay), Language::En);
        let pending = agent.begin("  music  ").unwrap();
        agent.complete(&pending.reply);

        let history = agent.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, Sender::User);
        assert_eq!(history[0].content, "music");
        assert_eq!(history[1].sender, Sender::Bot);
        assert!(history[1].content.contains("Music Business Details"));
    }

    #[test]
    fn test_delay_comes_from_injected_source() {
        let mut agent = agent_with(Box::new(FixedDelay(Duration::from_millis(1500))), Language::Ja);
        let pending = agent.begin("料金").unwrap();
        assert_eq!(pending.delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_language_switch_changes_answers() {
        let mut agent = agent_with(Box::new(NoDelay), Language::Ja);
        let ja = agent.begin("hello").unwrap();
        agent.complete(&ja.reply);
        assert!(templates::fallbacks(Language::Ja).contains(&ja.reply.as_str()));

        agent.set_language(Language::En);
        let en = agent.begin("hello").unwrap();
        assert!(templates::fallbacks(Language::En).contains(&en.reply.as_str()));
    }

    #[test]
    fn test_welcome_is_localized_and_recorded() {
        let mut agent = agent_with(Box::new(NoDelay), Language::En);
        let welcome = agent.welcome();
        assert!(welcome.content.starts_with("Hello! I'm NEXUTHA's AI assistant"));
        assert_eq!(welcome.sender, Sender::Bot);
        assert_eq!(agent.history().len(), 1);

        agent.clear_history();
        assert!(agent.history().is_empty());
        assert!(agent.relocalize_welcome().is_none());
    }

    #[test]
    fn test_welcome_follows_language_switch() {
        let mut agent = agent_with(Box::new(NoDelay), Language::Ja);
        let welcome = agent.welcome();
        assert_eq!(welcome.content, i18n::ui_text(Language::Ja).welcome);
        let pending = agent.begin("料金").unwrap();
        agent.complete(&pending.reply);

        agent.set_language(Language::En);
        let updated = agent.relocalize_welcome().unwrap();
        assert_eq!(updated.id, welcome.id);
        assert_eq!(updated.timestamp, welcome.timestamp);
        assert_eq!(updated.content, i18n::ui_text(Language::En).welcome);

        let history = agent.history();
        assert_eq!(history[0].content, i18n::ui_text(Language::En).welcome);
        assert!(history[2].content.contains("料金体系"));
    }

    #[test]
    fn test_relocalize_without_welcome_is_none() {
        let mut agent = agent_with(Box::new(NoDelay), Language::Ja);
        agent.set_language(Language::En);
        assert!(agent.relocalize_welcome().is_none());
    }

    #[tokio::test]
    async fn test_respond_completes_with_zero_delay() {
        let agent = Arc::new(Mutex::new(agent_with(Box::new(NoDelay), Language::Ja)));

        let reply = respond(Arc::clone(&agent), "料金を教えてください".to_string())
            .await
            .unwrap();
        assert!(reply.content.contains("料金体系"));
        assert_eq!(reply.sender, Sender::Bot);

        let agent = agent.lock().await;
        assert!(!agent.is_processing());
        assert_eq!(agent.history().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_respond_rejects_overlapping_message() {
        let agent = Arc::new(Mutex::new(agent_with(
            Box::new(FixedDelay(Duration::from_secs(2))),
            Language::En,
        )));

        let first = tokio::spawn(respond(Arc::clone(&agent), "services".to_string()));
        tokio::task::yield_now().await;

        let second = respond(Arc::clone(&agent), "contact".to_string()).await;
        assert_eq!(second, Err(AgentError::Busy));

        let reply = first.await.unwrap().unwrap();
        assert!(reply.content.contains("Main Services"));
        assert!(!agent.lock().await.is_processing());
    }
}
