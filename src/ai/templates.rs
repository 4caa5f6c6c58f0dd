/// Answer templates for each topic, rendered from the knowledge tree
use super::local::Topic;
use crate::i18n::Language;
use crate::knowledge::{self, KnowledgeBase, List};

pub const APPLE_MUSIC_URL: &str = "https://music.apple.com/jp/artist/on-%CE%BC/1821249016";
pub const SPOTIFY_URL: &str = "https://open.spotify.com/intl-ja/artist/6mlMniZ6dIFrAgtvyNngtd";
pub const MERCARI_URL: &str = "https://jp.mercari.com/item/m86932594623";

const JA_FALLBACKS: [&str; 3] = [
    "こんにちは！NEXUTHAのAIアシスタントです 🤖\n\n以下についてお気軽にお聞きください：\n• 会社について\n• サービス内容\n• 料金・見積もり\n• お問い合わせ方法\n• 開発・投資情報\n\n何をお手伝いできますか？",
    "ご質問ありがとうございます！\n\nNEXUTHAでは音楽制作、xTool精密加工、AI活用、自動化システムなど幅広いサービスを提供しています。\n\n具体的にどのようなことをお聞きになりたいですか？",
    "お疲れさまです！✨\n\nNEXUTHAの革新的なサービスについて、何でもお聞きください。音楽、技術、自動化...あらゆる分野でお手伝いします！\n\n「サービス」「料金」「問い合わせ」などとお話しください。",
];

const EN_FALLBACKS: [&str; 3] = [
    "Hello! I'm NEXUTHA's AI assistant 🤖\n\nFeel free to ask about:\n• Company information\n• Service details\n• Pricing & quotes\n• Contact methods\n• Development & investment\n\nHow can I help you?",
    "Thank you for your question!\n\nNEXUTHA offers a wide range of services including music production, xTool precision processing, AI utilization, and automation systems.\n\nWhat specifically would you like to know?",
    "Great to meet you! ✨\n\nPlease ask anything about NEXUTHA's innovative services. We help with music, technology, automation... all fields!\n\nTry saying \"services\", \"pricing\", or \"contact\".",
];

/// The generic greetings used when no topic matches
pub fn fallbacks(language: Language) -> &'static [&'static str; 3] {
    match language {
        Language::Ja => &JA_FALLBACKS,
        Language::En => &EN_FALLBACKS,
    }
}

fn join(items: List, language: Language) -> String {
    items.join(language.list_separator())
}

fn bullets(items: List) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(topic: Topic, language: Language) -> String {
    let kb = knowledge::get(language);
    match topic {
        Topic::Company => company(kb, language),
        Topic::Services => services(kb, language),
        Topic::Pricing => pricing(kb, language),
        Topic::Development => development(kb, language),
        Topic::Music => music(kb, language),
        Topic::Fabrication => fabrication(kb, language),
        Topic::AiAutomation => ai_automation(kb, language),
        Topic::Contact => contact(kb, language),
    }
}

fn company(kb: &KnowledgeBase, language: Language) -> String {
    let c = &kb.company;
    match language {
        Language::Ja => format!(
            "🏢 **NEXUTHAについて**\n\n\
            **創設**: {}\n\
            **代表**: {}\n\
            **ビジョン**: {}\n\n\
            **企業文化**: {}\n\n\
            **価値観**: \n{}\n\n\
            **拠点**: {}\n\n\
            私たちは21世紀の技術革新と人間性の調和を目指す革新的企業です。何か具体的にお聞きになりたいことはありますか？",
            c.founded,
            c.ceo,
            c.vision,
            c.culture,
            bullets(c.values),
            c.location
        ),
        Language::En => format!(
            "🏢 **About NEXUTHA**\n\n\
            **Founded**: {}\n\
            **CEO**: {}\n\
            **Vision**: {}\n\n\
            **Culture**: {}\n\n\
            **Values**: \n{}\n\n\
            **Location**: {}\n\n\
            We are an innovative company aiming for harmony between 21st century technological innovation and humanity. Is there anything specific you'd like to know?",
            c.founded,
            c.ceo,
            c.vision,
            c.culture,
            bullets(c.values),
            c.location
        ),
    }
}

fn services(kb: &KnowledgeBase, language: Language) -> String {
    let s = &kb.services;
    match language {
        Language::Ja => format!(
            "🎯 **NEXUTHAの主要サービス**\n\n\
            🎵 **音楽制作**\n{}\n\
            • 対応ジャンル: {}\n\
            • 配信プラットフォーム: {}\n\
            • 料金: {}\n\n\
            ⚡ **xTool精密加工**\n{}\n\
            • 対応素材: {}\n\
            • 精度: {}\n\
            • 料金: {}\n\n\
            🤖 **AI活用コンサルティング**\n{}\n\
            • 専門分野: {}\n\
            • 効果: {}\n\
            • 料金: {}\n\n\
            🚀 **完全自動化システム**\n{}\n\
            • 進捗: {}\n\
            • 目標: {}\n\n\
            どのサービスについて詳しくお聞きになりますか？",
            s.music.overview,
            join(s.music.genres, language),
            join(s.music.platforms, language),
            s.music.pricing,
            s.fabrication.overview,
            join(s.fabrication.materials, language),
            s.fabrication.quality,
            s.fabrication.pricing,
            s.ai.overview,
            join(s.ai.specialties, language),
            join(s.ai.benefits, language),
            s.ai.pricing,
            s.automation.overview,
            s.automation.progress,
            s.automation.roi
        ),
        Language::En => format!(
            "🎯 **NEXUTHA's Main Services**\n\n\
            🎵 **Music Production**\n{}\n\
            • Genres: {}\n\
            • Platforms: {}\n\
            • Pricing: {}\n\n\
            ⚡ **xTool Precision Processing**\n{}\n\
            • Materials: {}\n\
            • Quality: {}\n\
            • Pricing: {}\n\n\
            🤖 **AI Consulting**\n{}\n\
            • Specialties: {}\n\
            • Benefits: {}\n\
            • Pricing: {}\n\n\
            🚀 **Complete Automation System**\n{}\n\
            • Progress: {}\n\
            • Target: {}\n\n\
            Which service would you like to know more about?",
            s.music.overview,
            join(s.music.genres, language),
            join(s.music.platforms, language),
            s.music.pricing,
            s.fabrication.overview,
            join(s.fabrication.materials, language),
            s.fabrication.quality,
            s.fabrication.pricing,
            s.ai.overview,
            join(s.ai.specialties, language),
            join(s.ai.benefits, language),
            s.ai.pricing,
            s.automation.overview,
            s.automation.progress,
            s.automation.roi
        ),
    }
}

fn pricing(kb: &KnowledgeBase, language: Language) -> String {
    let p = &kb.pricing;
    match language {
        Language::Ja => format!(
            "💰 **NEXUTHA 料金体系**\n\n\
            **相談・コンサルティング**\n{}\n\n\
            **音楽制作**\n{}\n\n\
            **xTool加工**\n{}\n\n\
            **AI・自動化**\n{}\n\n\
            **継続サポート**\n{}\n\n\
            **支払い方法**\n{}\n\n\
            **企業向けプラン**\n{}\n\n\
            まずは無料相談から始めませんか？具体的なプロジェクト内容をお聞かせいただければ、詳細なお見積もりをご提案いたします。",
            p.consultation, p.music, p.fabrication, p.ai, p.subscription, p.payment, p.enterprise
        ),
        Language::En => format!(
            "💰 **NEXUTHA Pricing Structure**\n\n\
            **Consultation**\n{}\n\n\
            **Music Production**\n{}\n\n\
            **xTool Processing**\n{}\n\n\
            **AI & Automation**\n{}\n\n\
            **Ongoing Support**\n{}\n\n\
            **Payment Methods**\n{}\n\n\
            **Enterprise Plans**\n{}\n\n\
            Would you like to start with a free consultation? If you tell us about your specific project, we can provide a detailed quote.",
            p.consultation, p.music, p.fabrication, p.ai, p.subscription, p.payment, p.enterprise
        ),
    }
}

fn development(kb: &KnowledgeBase, language: Language) -> String {
    let d = &kb.development;
    match language {
        Language::Ja => format!(
            "🚀 **開発状況・投資機会**\n\n\
            **現在の開発状況**\n{}\n\n\
            **開発ロードマップ**\n{}\n\n\
            **投資機会**\n{}\n\n\
            **知的財産**\n{}\n\n\
            **研究協力**\n{}\n\n\
            **拡張計画**\n{}\n\n\
            NEXUTHAは次世代の働き方を変革する革新的技術を開発しています。戦略的パートナーシップや投資にご興味がございましたら、詳細をご説明いたします。",
            d.current,
            bullets(d.roadmap),
            d.investment,
            d.patents,
            d.research,
            d.expansion
        ),
        Language::En => format!(
            "🚀 **Development Status & Investment Opportunities**\n\n\
            **Current Development**\n{}\n\n\
            **Development Roadmap**\n{}\n\n\
            **Investment Opportunity**\n{}\n\n\
            **Intellectual Property**\n{}\n\n\
            **Research Collaboration**\n{}\n\n\
            **Expansion Plan**\n{}\n\n\
            NEXUTHA is developing innovative technology that will transform the future of work. If you're interested in strategic partnerships or investment, we'd be happy to provide detailed information.",
            d.current,
            bullets(d.roadmap),
            d.investment,
            d.patents,
            d.research,
            d.expansion
        ),
    }
}

fn music(kb: &KnowledgeBase, language: Language) -> String {
    let m = &kb.services.music;
    match language {
        Language::Ja => format!(
            "🎵 **NEXUTHA 音楽事業詳細**\n\n\
            **配信中アーティスト**\n\
            • ON:μ (オンミュー)\n\
            • NEXUTHA\n\n\
            **最新リリース**\n{}\n\n\
            **対応ジャンル**\n{}\n\n\
            **制作技術**\n{}\n\n\
            **配信プラットフォーム**\n{}\n\n\
            **コラボレーション**\n{}\n\n\
            **料金**\n{}\n\n\
            **Apple Music**: {}\n\
            **Spotify**: {}\n\n\
            楽曲制作やコラボレーションにご興味がございましたらお聞かせください！",
            m.latest,
            join(m.genres, language),
            m.technology,
            join(m.platforms, language),
            m.collaboration,
            m.pricing,
            APPLE_MUSIC_URL,
            SPOTIFY_URL
        ),
        Language::En => format!(
            "🎵 **NEXUTHA Music Business Details**\n\n\
            **Streaming Artists**\n\
            • ON:μ (On-mu)\n\
            • NEXUTHA\n\n\
            **Latest Release**\n{}\n\n\
            **Supported Genres**\n{}\n\n\
            **Production Technology**\n{}\n\n\
            **Streaming Platforms**\n{}\n\n\
            **Collaboration**\n{}\n\n\
            **Pricing**\n{}\n\n\
            **Apple Music**: {}\n\
            **Spotify**: {}\n\n\
            If you're interested in music production or collaboration, please let us know!",
            m.latest,
            join(m.genres, language),
            m.technology,
            join(m.platforms, language),
            m.collaboration,
            m.pricing,
            APPLE_MUSIC_URL,
            SPOTIFY_URL
        ),
    }
}

fn fabrication(kb: &KnowledgeBase, language: Language) -> String {
    let f = &kb.services.fabrication;
    match language {
        Language::Ja => format!(
            "⚡ **xTool精密加工サービス詳細**\n\n\
            **対応素材**\n{}\n\n\
            **加工技術**\n{}\n\n\
            **応用分野**\n{}\n\n\
            **品質基準**\n{}\n\n\
            **納期**\n{}\n\n\
            **料金目安**\n{}\n\n\
            **販売実績**\n{}\n\n\
            **メルカリ作品例**: {}\n\n\
            オーダーメイドのデザインや特殊な素材での加工もご相談ください。白黒画像であればほぼ完璧に再現可能です！",
            join(f.materials, language),
            join(f.capabilities, language),
            join(f.applications, language),
            f.quality,
            f.turnaround,
            f.pricing,
            f.marketplace,
            MERCARI_URL
        ),
        Language::En => format!(
            "⚡ **xTool Precision Processing Service Details**\n\n\
            **Supported Materials**\n{}\n\n\
            **Processing Technologies**\n{}\n\n\
            **Applications**\n{}\n\n\
            **Quality Standards**\n{}\n\n\
            **Delivery Time**\n{}\n\n\
            **Pricing Guide**\n{}\n\n\
            **Sales Record**\n{}\n\n\
            **Mercari Examples**: {}\n\n\
            Please consult us for custom designs or special material processing. We can reproduce black and white images almost perfectly!",
            join(f.materials, language),
            join(f.capabilities, language),
            join(f.applications, language),
            f.quality,
            f.turnaround,
            f.pricing,
            f.marketplace,
            MERCARI_URL
        ),
    }
}

fn ai_automation(kb: &KnowledgeBase, language: Language) -> String {
    let ai = &kb.services.ai;
    let auto = &kb.services.automation;
    match language {
        Language::Ja => format!(
            "🤖 **AI・自動化サービス詳細**\n\n\
            **専門分野**\n{}\n\n\
            **提供サービス**\n{}\n\n\
            **導入効果**\n{}\n\n\
            **自動化システム概要**\n{}\n\n\
            **システム構成要素**\n{}\n\n\
            **開発進捗**\n{}\n\n\
            **料金**\n{}\n\n\
            **コンサルティング**\n{}\n\n\
            ChatGPTを活用したビジネス効率化や、完全自動化システムの導入をご検討でしたら、まずは無料相談からお試しください！",
            join(ai.specialties, language),
            join(ai.services, language),
            join(ai.benefits, language),
            auto.overview,
            join(auto.components, language),
            auto.progress,
            ai.pricing,
            ai.consultation
        ),
        Language::En => format!(
            "🤖 **AI & Automation Service Details**\n\n\
            **Specialties**\n{}\n\n\
            **Services Offered**\n{}\n\n\
            **Implementation Benefits**\n{}\n\n\
            **Automation System Overview**\n{}\n\n\
            **System Components**\n{}\n\n\
            **Development Progress**\n{}\n\n\
            **Pricing**\n{}\n\n\
            **Consultation**\n{}\n\n\
            If you're considering ChatGPT-powered business efficiency or complete automation system implementation, please start with our free consultation!",
            join(ai.specialties, language),
            join(ai.services, language),
            join(ai.benefits, language),
            auto.overview,
            join(auto.components, language),
            auto.progress,
            ai.pricing,
            ai.consultation
        ),
    }
}

fn contact(kb: &KnowledgeBase, language: Language) -> String {
    let c = &kb.contact;
    match language {
        Language::Ja => format!(
            "📞 **お問い合わせ・相談方法**\n\n\
            **連絡先**\n\
            • メール: {}\n\
            • ウェブサイト: {}\n\
            • note: {}\n\n\
            **対応時間**\n{}\n\n\
            **返信時間**\n{}\n\n\
            **対応言語**\n{}\n\n\
            **会議方法**\n{}\n\n\
            **初回相談**\n{}\n\n\
            お気軽にご相談ください。具体的なプロジェクトについて詳しくお話をお聞かせいただければ、最適なソリューションをご提案いたします！",
            c.email,
            c.website,
            c.note,
            c.office_hours,
            c.response_time,
            join(c.languages, language),
            c.meeting,
            kb.pricing.consultation
        ),
        Language::En => format!(
            "📞 **Contact & Consultation Methods**\n\n\
            **Contact Information**\n\
            • Email: {}\n\
            • Website: {}\n\
            • Note: {}\n\n\
            **Business Hours**\n{}\n\n\
            **Response Time**\n{}\n\n\
            **Languages**\n{}\n\n\
            **Meeting Methods**\n{}\n\n\
            **Initial Consultation**\n{}\n\n\
            Please feel free to contact us. If you tell us about your specific project in detail, we can propose the optimal solution for you!",
            c.email,
            c.website,
            c.note,
            c.office_hours,
            c.response_time,
            join(c.languages, language),
            c.meeting,
            kb.pricing.consultation
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_lists_use_language_separator() {
        let ja = render(Topic::Music, Language::Ja);
        assert!(ja.contains("エレクトロニック、アンビエント、テクノ、フューチャーベース"));

        let en = render(Topic::Music, Language::En);
        assert!(en.contains("Electronic, Ambient, Techno, Future Bass"));
    }

    #[test]
    fn test_bullet_lists_one_item_per_line() {
        let en = render(Topic::Development, Language::En);
        assert!(en.contains("• 2025 Q1: Prototype completion\n• 2025 Q2: α version testing"));
    }

    #[test]
    fn test_every_topic_renders_both_languages() {
        for topic in Topic::ALL {
            for language in Language::ALL {
                let text = render(topic, language);
                assert!(text.contains("**"), "{:?}/{} has no heading", topic, language);
                assert!(!text.contains("{}"));
            }
        }
    }

    #[test]
    fn test_contact_includes_consultation_price() {
        let ja = render(Topic::Contact, Language::Ja);
        assert!(ja.contains("runa.yasu@icloud.com"));
        assert!(ja.contains("初回相談：無料（60分）"));
    }
}
