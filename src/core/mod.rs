pub mod agent;
pub mod delay;
pub mod formatter;
pub mod history;

pub use agent::{respond, AgentError, ChatAgent, PendingReply};
pub use delay::{NoDelay, RandomDelay, ThinkingDelay};
pub use formatter::{format_message, parse_message, Line, Span, Style};
pub use history::{ConversationHistory, ConversationMessage, Sender};
