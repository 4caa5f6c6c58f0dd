/// Languages, themes and the localized strings of the chat window
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language code: {0}")]
    Unsupported(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

/// Supported languages. Japanese is the primary locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ja, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// Delimiter used when a list is rendered inline
    pub fn list_separator(self) -> &'static str {
        match self {
            Language::Ja => "、",
            Language::En => ", ",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::Ja => Language::En,
            Language::En => Language::Ja,
        }
    }

    /// Label shown on the language switch
    pub fn label(self) -> &'static str {
        match self {
            Language::Ja => "日本語",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" => Ok(Language::Ja),
            "en" | "en-us" | "en-gb" => Ok(Language::En),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "🌙",
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// A one-click prompt offered under the message list
#[derive(Debug, Clone, Copy)]
pub struct QuickQuestion {
    pub label: &'static str,
    pub message: &'static str,
}

/// Strings of the chat window for one language
#[derive(Debug)]
pub struct UiText {
    pub title: &'static str,
    pub welcome: &'static str,
    pub placeholder: &'static str,
    pub sending: &'static str,
    pub thinking: &'static str,
    pub error: &'static str,
    pub send: &'static str,
    /// Hover text of the clear-conversation button
    pub clear: &'static str,
    pub you: &'static str,
    pub assistant: &'static str,
    pub quick_questions: &'static [QuickQuestion],
}

static JA_TEXT: UiText = UiText {
    title: "AIアシスタント",
    welcome: "こんにちは！NEXUTHAのAIアシスタントです 🤖\n\n何でもお気軽にお聞きください。サービス、料金、お問い合わせ方法など、なんでもお答えします！",
    placeholder: "メッセージを入力...",
    sending: "送信中...",
    thinking: "考え中...",
    error: "申し訳ございません。一時的に応答できません。お問い合わせフォームからご連絡ください。",
    send: "送信",
    clear: "会話をクリア",
    you: "あなた",
    assistant: "NEXUTHA",
    quick_questions: &[
        QuickQuestion { label: "サービス", message: "サービス内容を教えてください" },
        QuickQuestion { label: "料金", message: "料金を教えてください" },
        QuickQuestion { label: "お問い合わせ", message: "問い合わせ方法を教えてください" },
        QuickQuestion { label: "会社概要", message: "会社について教えてください" },
    ],
};

static EN_TEXT: UiText = UiText {
    title: "AI Assistant",
    welcome: "Hello! I'm NEXUTHA's AI assistant 🤖\n\nFeel free to ask me anything. Services, pricing, contact methods - I'm here to help!",
    placeholder: "Type a message...",
    sending: "Sending...",
    thinking: "Thinking...",
    error: "I apologize, but I cannot respond temporarily. Please contact us through the contact form.",
    send: "Send",
    clear: "Clear conversation",
    you: "You",
    assistant: "NEXUTHA",
    quick_questions: &[
        QuickQuestion { label: "Services", message: "What services do you offer?" },
        QuickQuestion { label: "Pricing", message: "Tell me about your pricing" },
        QuickQuestion { label: "Contact", message: "How can I contact you?" },
        QuickQuestion { label: "Company", message: "Tell me about the company" },
    ],
};

pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::Ja => &JA_TEXT,
        Language::En => &EN_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_parse() {
        assert_eq!("ja".parse::<Language>(), Ok(Language::Ja));
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::En));
        assert_eq!("en-US".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(LanguageError::Unsupported("fr".to_string()))
        );
    }

    #[test]
    fn test_theme_names_parse() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
    }

    #[test]
    fn test_window_strings_are_localized() {
        let ja = ui_text(Language::Ja);
        let en = ui_text(Language::En);
        assert_ne!(ja.clear, en.clear);
        assert_ne!(ja.welcome, en.welcome);
        assert!(!ja.clear.is_empty() && !en.clear.is_empty());
    }

    #[test]
    fn test_list_separator() {
        assert_eq!(Language::Ja.list_separator(), "、");
        assert_eq!(Language::En.list_separator(), ", ");
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Language::Ja.toggle(), Language::En);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_quick_questions_align_across_languages() {
        let ja = ui_text(Language::Ja);
        let en = ui_text(Language::En);
        assert_eq!(ja.quick_questions.len(), en.quick_questions.len());
        assert!(ja.quick_questions.iter().all(|q| !q.message.is_empty()));
    }
}
