use super::templates;
use crate::i18n::Language;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Category of user intent, each answered by one template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Company,
    Services,
    Pricing,
    Development,
    Music,
    Fabrication,
    AiAutomation,
    Contact,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Company,
        Topic::Services,
        Topic::Pricing,
        Topic::Development,
        Topic::Music,
        Topic::Fabrication,
        Topic::AiAutomation,
        Topic::Contact,
    ];
}

/// A topic and the substrings (both languages) that select it
#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

impl TopicRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|&word| normalized.contains(word))
    }
}

/// Rules in priority order: the first match wins, even when a later rule
/// would also match ("pricing for music" is a pricing question).
pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Company,
        keywords: &["会社", "nexutha", "について", "company", "about", "overview"],
    },
    TopicRule {
        topic: Topic::Services,
        keywords: &["サービス", "service", "事業"],
    },
    TopicRule {
        topic: Topic::Pricing,
        keywords: &["料金", "価格", "費用", "pricing", "cost", "price"],
    },
    TopicRule {
        topic: Topic::Development,
        keywords: &["開発", "投資", "将来", "development", "investment", "future"],
    },
    TopicRule {
        topic: Topic::Music,
        keywords: &["音楽", "楽曲", "ジャンル", "on:μ", "music", "song", "track", "genre"],
    },
    TopicRule {
        topic: Topic::Fabrication,
        keywords: &["xtool", "レーザー", "加工", "木材", "ステンレス", "laser", "engraving"],
    },
    // "ai" also hits words like "email"; kept as is
    TopicRule {
        topic: Topic::AiAutomation,
        keywords: &["ai", "自動化", "プロンプト", "chatgpt", "automation", "prompt"],
    },
    TopicRule {
        topic: Topic::Contact,
        keywords: &["連絡", "問い合わせ", "相談", "contact", "inquiry", "consultation"],
    },
];

/// Picks the topic of a message, or `None` when nothing matches
pub fn classify(message: &str) -> Option<Topic> {
    let normalized = message.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
}

/// Keyword-driven answer selection over the static knowledge base
pub struct Resolver<R: Rng = StdRng> {
    rng: R,
}

impl Resolver<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Resolver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Resolver<R> {
    /// Uses `rng` for the fallback greeting choice
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Answers `message` in `language`. Never returns an empty string.
    pub fn resolve(&mut self, message: &str, language: Language) -> String {
        match classify(message) {
            Some(topic) => {
                log::debug!("🎯 Topic {:?} ({})", topic, language);
                templates::render(topic, language)
            }
            None => {
                let options = templates::fallbacks(language);
                let index = self.rng.gen_range(0..options.len());
                log::debug!("💬 No topic matched, fallback #{} ({})", index, language);
                options[index].to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge;

    fn seeded() -> Resolver<StdRng> {
        Resolver::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_pricing_keywords_in_both_languages() {
        let mut resolver = seeded();
        for message in ["料金はいくら？", "価格表", "費用の目安", "What is the cost?", "PRICE list", "pricing"] {
            for language in Language::ALL {
                let answer = resolver.resolve(message, language);
                assert!(
                    answer.contains(knowledge::get(language).pricing.consultation),
                    "{} / {}",
                    message,
                    language
                );
            }
        }
    }

    #[test]
    fn test_company_outranks_pricing() {
        assert_eq!(classify("company pricing"), Some(Topic::Company));
        let answer = seeded().resolve("About your price", Language::En);
        assert!(answer.contains("About NEXUTHA"));
        assert!(!answer.contains("Pricing Structure"));
    }

    #[test]
    fn test_pricing_outranks_music() {
        assert_eq!(classify("pricing for music"), Some(Topic::Pricing));
    }

    #[test]
    fn test_ai_substring_collision_is_preserved() {
        assert_eq!(classify("send me an email"), Some(Topic::AiAutomation));
        assert_eq!(classify("email contact"), Some(Topic::AiAutomation));
    }

    #[test]
    fn test_classify_each_topic() {
        assert_eq!(classify("NEXUTHAってどんな会社？"), Some(Topic::Company));
        assert_eq!(classify("サービス一覧"), Some(Topic::Services));
        assert_eq!(classify("将来の計画"), Some(Topic::Development));
        assert_eq!(classify("新しい楽曲"), Some(Topic::Music));
        assert_eq!(classify("What genres do you make?"), Some(Topic::Music));
        assert_eq!(classify("Laser engraving?"), Some(Topic::Fabrication));
        assert_eq!(classify("プロンプト作成"), Some(Topic::AiAutomation));
        assert_eq!(classify("連絡したい"), Some(Topic::Contact));
        assert_eq!(classify("hello"), None);
    }

    #[test]
    fn test_japanese_pricing_example() {
        let answer = seeded().resolve("料金を教えてください", Language::Ja);
        assert!(answer.contains("料金体系"));
        assert!(answer.contains("初回相談：無料（60分）"));
    }

    #[test]
    fn test_genres_example() {
        let answer = seeded().resolve("What genres do you make?", Language::En);
        assert!(answer.contains("Electronic"));
        assert!(answer.contains("Ambient"));
    }

    #[test]
    fn test_unmatched_message_returns_a_fallback() {
        let mut resolver = seeded();
        for language in Language::ALL {
            for _ in 0..20 {
                let answer = resolver.resolve("hello there", language);
                assert!(templates::fallbacks(language).contains(&answer.as_str()));
            }
        }
    }

    #[test]
    fn test_fallback_choice_follows_injected_rng() {
        let mut resolver = Resolver::with_rng(StdRng::seed_from_u64(7));
        let mut mirror = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            let expected = templates::fallbacks(Language::En)[mirror.gen_range(0..3)];
            assert_eq!(resolver.resolve("hmm", Language::En), expected);
        }
    }

    #[test]
    fn test_answers_are_never_empty() {
        let mut resolver = seeded();
        for message in ["", "   ", "?", "music", "連絡"] {
            assert!(!resolver.resolve(message, Language::Ja).is_empty());
        }
    }
}
