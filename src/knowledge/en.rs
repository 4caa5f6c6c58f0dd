use super::*;

pub(super) static KNOWLEDGE: KnowledgeBase = KnowledgeBase {
    company: Company {
        name: "NEXUTHA",
        founded: "2024",
        ceo: "Music Producer & Automation System Developer",
        vision: "Maximize human creativity through robots with fully automated revenue systems",
        mission: "Transform how humanity works and lives through complete liberation from simple tasks",
        values: &["Innovation", "Creativity", "Efficiency", "Respect for Humanity", "Social Contribution through Technology"],
        location: "Japan (Global expansion planned)",
        employees: "Elite small team",
        culture: "Mission to maximize creativity and expand human potential through technology",
    },
    services: Services {
        music: MusicService {
            overview: "Music distribution on Apple Music, Spotify under ON:μ and NEXUTHA",
            technology: "Innovative music production using Suno AI",
            genres: &["Electronic", "Ambient", "Techno", "Future Bass"],
            platforms: &["Apple Music", "Spotify", "YouTube Music", "Amazon Music"],
            latest: "Cyber Dreams (ON:μ) currently streaming",
            collaboration: "Artist collaborations and remix production available",
            pricing: "Music production: $350+, Remix: $200+ (negotiable)",
        },
        fabrication: FabricationService {
            overview: "Precision laser processing of wood, stainless steel, and acrylic",
            materials: &["Natural wood", "Stainless steel", "Acrylic", "Leather", "Paper", "Cardboard"],
            capabilities: &["Precision engraving", "Cut processing", "Custom orders", "Perfect black & white image reproduction"],
            applications: &["Commemorative items", "Signs", "Accessories", "Interior", "Prototypes"],
            quality: "Professional precision with 0.1mm accuracy",
            turnaround: "Usually 3-7 business days (depending on size/complexity)",
            pricing: "Wood: $15+, Stainless: $20+, Acrylic: $10+ (varies by size/design)",
            marketplace: "Also selling works on Mercari",
        },
        ai: AiService {
            overview: "ChatGPT optimization, SNS automation, article creation efficiency",
            specialties: &["Prompt Engineering", "Automation System Construction", "Content Optimization"],
            services: &["Note article prompts", "SNS automation", "YouTube script generation", "Sales writing"],
            benefits: &["80% work time reduction", "Content quality improvement", "Continuous monetization support"],
            consultation: "Free initial consultation, ongoing support plans available",
            pricing: "Prompt creation: $70+, Automation system: $350+ (negotiable)",
        },
        automation: AutomationService {
            overview: "Complete revenue system automating all processes from market analysis to sales",
            components: &["AI market analysis", "Auto product planning", "Production management AI", "Sales optimization", "Customer service bot"],
            progress: "System 75% complete, AI decision engine 60%, robotics integration 40%",
            timeline: "Prototype completion 2025, β version release 2026",
            target: "Supporting businesses of all sizes from SMEs to enterprises",
            roi: "Target 300% average revenue improvement for implementing companies",
        },
    },
    technology: Technology {
        ai: &["GPT-4", "Claude", "Suno AI", "Machine Learning", "Natural Language Processing", "Computer Vision"],
        hardware: &["xTool Laser Cutter", "3D Printer", "Robotics Equipment", "IoT Sensors"],
        software: &["Python", "JavaScript", "React", "Node.js", "TensorFlow", "PyTorch"],
        platforms: &["AWS", "Google Cloud", "Microsoft Azure", "Vercel", "GitHub"],
        databases: &["PostgreSQL", "MongoDB", "Redis", "Vector DB"],
        integration: "API integration, Webhook, real-time synchronization support",
    },
    pricing: Pricing {
        consultation: "Initial consultation: Free (60 minutes)",
        music: "Music production: $350+, Remix: $200+",
        fabrication: "Wood processing: $15+, Metal processing: $20+, Acrylic: $10+",
        ai: "Prompt creation: $70+, Automation system: $350+",
        enterprise: "Custom solutions for enterprises: Negotiable",
        subscription: "Ongoing support: $200+/month",
        payment: "Bank transfer, credit card, PayPal supported",
    },
    development: Development {
        current: "Full automation revenue system v1.0 in development (75% progress)",
        roadmap: &["2025 Q1: Prototype completion", "2025 Q2: α version testing", "2025 Q4: β version release", "2026: Official release"],
        investment: "Seeking strategic partners and investors (Series A: $3.5M target)",
        patents: "Patent applications in preparation for automation systems",
        research: "Considering joint research with University of Tokyo and Stanford University",
        expansion: "Global expansion within 10 years (Asia → North America → Europe)",
    },
    team: Team {
        ceo: "Music Producer & Automation System Developer",
        expertise: &["AI Development", "Music Production", "Business Strategy", "Marketing", "Manufacturing Technology"],
        advisors: "Industry experts, investors, academic relations",
        recruitment: "Recruiting AI engineers, robotics specialists, business development staff",
        culture: "Remote work encouraged, merit-based, learning opportunities provided",
    },
    contact: Contact {
        email: "runa.yasu@icloud.com",
        website: "https://nexutha.com",
        note: "https://note.com/watashi_hou",
        response_time: "Within 24 hours (business days)",
        languages: &["Japanese", "English"],
        meeting: "Zoom, Google Meet, in-person meetings supported",
        office_hours: "Weekdays 9:00-18:00 (JST)",
    },
    faq: Faq {
        minimum_order: FaqEntry {
            question: "Minimum order",
            answer: "Varies by project, but starts from $70",
        },
        delivery: FaqEntry {
            question: "Delivery",
            answer: "3 days to 4 weeks depending on content",
        },
        guarantee: FaqEntry {
            question: "Guarantee",
            answer: "Quality guarantee included, revision support",
        },
        confidentiality: FaqEntry {
            question: "Confidentiality",
            answer: "NDA available",
        },
        payment: FaqEntry {
            question: "Payment",
            answer: "Basic: 50% upfront, 50% on delivery",
        },
        cancellation: FaqEntry {
            question: "Cancellation",
            answer: "Full refund before production starts, decided according to progress after start",
        },
    },
};
