use super::*;

pub(super) static KNOWLEDGE: KnowledgeBase = KnowledgeBase {
    company: Company {
        name: "NEXUTHA",
        founded: "2024年",
        ceo: "音楽プロデューサー・自動化システム開発者",
        vision: "完全自動収益化システム搭載ロボットの開発により、人間の創造性を最大化する",
        mission: "単純作業からの完全解放を通じて、人類の働き方と生き方を根本から変革する",
        values: &["革新性", "創造性", "効率性", "人間性の尊重", "技術による社会貢献"],
        location: "日本（グローバル展開予定）",
        employees: "少数精鋭チーム",
        culture: "創造性を最大化し、テクノロジーで人類の可能性を拡張することを使命とする",
    },
    services: Services {
        music: MusicService {
            overview: "ON:μとNEXUTHA名義でApple Music、Spotify等で楽曲配信中",
            technology: "Suno AIを活用した革新的音楽制作",
            genres: &["エレクトロニック", "アンビエント", "テクノ", "フューチャーベース"],
            platforms: &["Apple Music", "Spotify", "YouTube Music", "Amazon Music"],
            latest: "Cyber Dreams（ON:μ）が好評配信中",
            collaboration: "アーティストとのコラボレーション、リミックス制作も対応",
            pricing: "楽曲制作：50,000円〜、リミックス：30,000円〜（要相談）",
        },
        fabrication: FabricationService {
            overview: "木材・ステンレス・アクリルの精密レーザー加工サービス",
            materials: &["天然木材", "ステンレス鋼", "アクリル", "革", "紙", "段ボール"],
            capabilities: &["精密彫刻", "カット加工", "オーダーメイド対応", "白黒画像の完璧再現"],
            applications: &["記念品", "看板", "アクセサリー", "インテリア", "プロトタイプ"],
            quality: "プロ仕様の精度で、0.1mm単位の精密加工が可能",
            turnaround: "通常3-7営業日（サイズ・複雑さによる）",
            pricing: "木材：2,000円〜、ステンレス：3,000円〜、アクリル：1,500円〜（サイズ・デザインによる）",
            marketplace: "メルカリでも作品販売中",
        },
        ai: AiService {
            overview: "ChatGPT最適化プロンプト作成、SNS自動化、記事制作効率化",
            specialties: &["プロンプトエンジニアリング", "自動化システム構築", "コンテンツ最適化"],
            services: &["note記事構成プロンプト", "SNS投稿自動化", "YouTube台本生成", "セールスライティング"],
            benefits: &["作業時間を80%短縮", "コンテンツ品質向上", "継続的な収益化支援"],
            consultation: "初回無料相談、継続サポートプランあり",
            pricing: "プロンプト作成：10,000円〜、自動化システム：50,000円〜（要相談）",
        },
        automation: AutomationService {
            overview: "市場分析から販売まで全工程を自動化する完全収益化システム",
            components: &["AI市場分析エンジン", "自動商品企画システム", "生産管理AI", "販売最適化AI", "顧客対応ボット"],
            progress: "システム全体75%完成、AI意思決定エンジン60%、ロボティクス統合40%",
            timeline: "2025年内プロトタイプ完成、2026年β版リリース予定",
            target: "中小企業から大企業まで、あらゆる規模のビジネスに対応",
            roi: "導入企業で平均300%の収益向上を目標",
        },
    },
    technology: Technology {
        ai: &["GPT-4", "Claude", "Suno AI", "機械学習", "自然言語処理", "コンピュータビジョン"],
        hardware: &["xTool レーザーカッター", "3Dプリンター", "ロボティクス機器", "IoTセンサー"],
        software: &["Python", "JavaScript", "React", "Node.js", "TensorFlow", "PyTorch"],
        platforms: &["AWS", "Google Cloud", "Microsoft Azure", "Vercel", "GitHub"],
        databases: &["PostgreSQL", "MongoDB", "Redis", "Vector DB"],
        integration: "API連携、Webhook、リアルタイム同期に対応",
    },
    pricing: Pricing {
        consultation: "初回相談：無料（60分）",
        music: "楽曲制作：50,000円〜、リミックス：30,000円〜",
        fabrication: "木材加工：2,000円〜、金属加工：3,000円〜、アクリル：1,500円〜",
        ai: "プロンプト作成：10,000円〜、自動化システム：50,000円〜",
        enterprise: "大企業向けカスタムソリューション：要相談",
        subscription: "継続サポート：月額30,000円〜",
        payment: "銀行振込、クレジットカード、PayPal対応",
    },
    development: Development {
        current: "完全自動収益化システムv1.0開発中（進捗75%）",
        roadmap: &["2025年Q1: プロトタイプ完成", "2025年Q2: α版テスト", "2025年Q4: β版リリース", "2026年: 正式版リリース"],
        investment: "戦略的パートナー・投資家募集中（シリーズA想定：5億円）",
        patents: "自動化システムに関する特許申請準備中",
        research: "東京大学、スタンフォード大学との共同研究検討中",
        expansion: "10年以内の世界展開を目標（アジア→北米→欧州の順）",
    },
    team: Team {
        ceo: "音楽プロデューサー・自動化システム開発者",
        expertise: &["AI開発", "音楽制作", "ビジネス戦略", "マーケティング", "製造技術"],
        advisors: "業界エキスパート、投資家、学術関係者",
        recruitment: "AI エンジニア、ロボティクス専門家、ビジネス開発担当者を募集中",
        culture: "リモートワーク推奨、成果主義、学習機会提供",
    },
    contact: Contact {
        email: "runa.yasu@icloud.com",
        website: "https://nexutha.com",
        note: "https://note.com/watashi_hou",
        response_time: "24時間以内（営業日）",
        languages: &["日本語", "英語"],
        meeting: "Zoom、Google Meet、対面会議対応",
        office_hours: "平日9:00-18:00（JST）",
    },
    faq: Faq {
        minimum_order: FaqEntry {
            question: "最低発注額",
            answer: "プロジェクトにより異なりますが、最低10,000円から承ります",
        },
        delivery: FaqEntry {
            question: "納期",
            answer: "内容により3日〜4週間程度",
        },
        guarantee: FaqEntry {
            question: "保証",
            answer: "品質保証付き、修正対応あり",
        },
        confidentiality: FaqEntry {
            question: "秘密保持",
            answer: "NDA締結可能",
        },
        payment: FaqEntry {
            question: "支払い",
            answer: "前払い50%、納品後50%が基本",
        },
        cancellation: FaqEntry {
            question: "キャンセル",
            answer: "制作開始前なら全額返金、制作開始後は進捗に応じて決定",
        },
    },
};
