pub mod local;
pub mod templates;

pub use local::{classify, Resolver, Topic, TopicRule, TOPIC_RULES};
