//! Static company knowledge, one tree per language.
//!
//! Both trees are values of the same [`KnowledgeBase`] type, so every key path
//! of one exists in the other.

mod en;
mod ja;

use crate::i18n::Language;
use serde::Serialize;

pub type List = &'static [&'static str];

#[derive(Debug, Serialize)]
pub struct KnowledgeBase {
    pub company: Company,
    pub services: Services,
    pub technology: Technology,
    pub pricing: Pricing,
    pub development: Development,
    pub team: Team,
    pub contact: Contact,
    pub faq: Faq,
}

#[derive(Debug, Serialize)]
pub struct Company {
    pub name: &'static str,
    pub founded: &'static str,
    pub ceo: &'static str,
    pub vision: &'static str,
    pub mission: &'static str,
    pub values: List,
    pub location: &'static str,
    pub employees: &'static str,
    pub culture: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Services {
    pub music: MusicService,
    pub fabrication: FabricationService,
    pub ai: AiService,
    pub automation: AutomationService,
}

#[derive(Debug, Serialize)]
pub struct MusicService {
    pub overview: &'static str,
    pub technology: &'static str,
    pub genres: List,
    pub platforms: List,
    pub latest: &'static str,
    pub collaboration: &'static str,
    pub pricing: &'static str,
}

/// Precision laser fabrication (xTool)
#[derive(Debug, Serialize)]
pub struct FabricationService {
    pub overview: &'static str,
    pub materials: List,
    pub capabilities: List,
    pub applications: List,
    pub quality: &'static str,
    pub turnaround: &'static str,
    pub pricing: &'static str,
    pub marketplace: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AiService {
    pub overview: &'static str,
    pub specialties: List,
    pub services: List,
    pub benefits: List,
    pub consultation: &'static str,
    pub pricing: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AutomationService {
    pub overview: &'static str,
    pub components: List,
    pub progress: &'static str,
    pub timeline: &'static str,
    pub target: &'static str,
    pub roi: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Technology {
    pub ai: List,
    pub hardware: List,
    pub software: List,
    pub platforms: List,
    pub databases: List,
    pub integration: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Pricing {
    pub consultation: &'static str,
    pub music: &'static str,
    pub fabrication: &'static str,
    pub ai: &'static str,
    pub enterprise: &'static str,
    pub subscription: &'static str,
    pub payment: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Development {
    pub current: &'static str,
    pub roadmap: List,
    pub investment: &'static str,
    pub patents: &'static str,
    pub research: &'static str,
    pub expansion: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Team {
    pub ceo: &'static str,
    pub expertise: List,
    pub advisors: &'static str,
    pub recruitment: &'static str,
    pub culture: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub website: &'static str,
    pub note: &'static str,
    pub response_time: &'static str,
    pub languages: List,
    pub meeting: &'static str,
    pub office_hours: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Faq {
    pub minimum_order: FaqEntry,
    pub delivery: FaqEntry,
    pub guarantee: FaqEntry,
    pub confidentiality: FaqEntry,
    pub payment: FaqEntry,
    pub cancellation: FaqEntry,
}

/// Knowledge tree for `language`
pub fn get(language: Language) -> &'static KnowledgeBase {
    match language {
        Language::Ja => &ja::KNOWLEDGE,
        Language::En => &en::KNOWLEDGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Dot separated key paths of the serialized tree; list indices are not
    /// part of a path
    fn key_paths(kb: &KnowledgeBase) -> BTreeSet<String> {
        let value = serde_json::to_value(kb).unwrap();
        let mut paths = BTreeSet::new();
        collect_paths(&value, String::new(), &mut paths);
        paths
    }

    fn collect_paths(value: &serde_json::Value, prefix: String, out: &mut BTreeSet<String>) {
        if let serde_json::Value::Object(map) = value {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_paths(child, path.clone(), out);
                out.insert(path);
            }
        }
    }

    #[test]
    fn test_language_trees_have_identical_shape() {
        let ja = key_paths(get(Language::Ja));
        let en = key_paths(get(Language::En));
        assert!(!ja.is_empty());
        assert_eq!(ja, en);
    }

    #[test]
    fn test_key_paths_cover_nested_services() {
        let paths = key_paths(get(Language::Ja));
        assert!(paths.contains(&"services.music.genres".to_string()));
        assert!(paths.contains(&"services.fabrication.turnaround".to_string()));
        assert!(paths.contains(&"faq.cancellation.answer".to_string()));
        assert!(paths.contains(&"contact".to_string()));
    }

    #[test]
    fn test_no_empty_leaves() {
        for language in Language::ALL {
            let value = serde_json::to_value(get(language)).unwrap();
            assert!(no_empty_strings(&value), "empty leaf in {}", language);
        }
    }

    fn no_empty_strings(value: &serde_json::Value) -> bool {
        match value {
            serde_json::Value::String(s) => !s.trim().is_empty(),
            serde_json::Value::Array(items) => !items.is_empty() && items.iter().all(no_empty_strings),
            serde_json::Value::Object(map) => map.values().all(no_empty_strings),
            _ => true,
        }
    }

    #[test]
    fn test_shared_facts_match() {
        let ja = get(Language::Ja);
        let en = get(Language::En);
        assert_eq!(ja.company.name, en.company.name);
        assert_eq!(ja.contact.email, en.contact.email);
        assert_eq!(ja.contact.website, en.contact.website);
        assert_eq!(ja.services.music.genres.len(), en.services.music.genres.len());
    }
}
