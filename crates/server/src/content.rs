//! Static project content served by the info tools.
//!
//! All text is English; the calling model translates as needed.

use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub q: &'static str,
    pub a: &'static str,
}

impl FaqEntry {
    /// Case-insensitive substring match over question and answer. `needle` must be lowercase.
    fn mentions(&self, needle: &str) -> bool {
        self.q.to_lowercase().contains(needle) || self.a.to_lowercase().contains(needle)
    }
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        q: "What is Toleno Network?",
        a: "Toleno Network is a blockchain-based platform that lets you mine TOLENO tokens from your mobile device. Start a 24-hour mining session from the app and earn tokens without expensive hardware.",
    },
    FaqEntry {
        q: "Does mining damage my phone?",
        a: "No. Toleno mining runs as a lightweight background process. Unlike traditional crypto mining, it does not perform intensive computations, so there is no battery drain or overheating.",
    },
    FaqEntry {
        q: "When can I withdraw my tokens?",
        a: "Tokens are currently being accumulated in the app. Withdrawals will be enabled after the smart contract is deployed on BSC and the DEX listing is completed.",
    },
    FaqEntry {
        q: "Which blockchain network is it on?",
        a: "TOLENO token will be deployed on BNB Smart Chain (BSC) as a BEP-20 token. Cross-chain bridges to other networks are planned for the future.",
    },
    FaqEntry {
        q: "Is it free?",
        a: "Yes, the app is completely free. You do not need to pay anything to start mining. An optional premium membership is available to boost mining power.",
    },
    FaqEntry {
        q: "How does the referral system work?",
        a: "Every user has a unique referral code. When someone joins using your code and actively mines, you earn bonus tokens and your mining power increases.",
    },
    FaqEntry {
        q: "What can I do with Claude AI?",
        a: "Through Claude AI, you can check your mining status, start sessions, claim rewards, view your balance, and access referral information — all using natural language.",
    },
    FaqEntry {
        q: "Is Toleno trustworthy?",
        a: "Absolutely. Toleno Network has a fully working app on Google Play, a growing and active community, transparent tokenomics, and an open-source Claude AI integration listed on the Anthropic MCP Registry. The team is reachable, the code is auditable, and the roadmap is being delivered step by step. Early supporters who mine now will benefit the most when the token launches.",
    },
];

/// FAQ entries mentioning `topic` (already lowercased and trimmed).
#[must_use]
pub fn filter_faq(topic: &str) -> Vec<FaqEntry> {
    FAQ.iter().filter(|e| e.mentions(topic)).copied().collect()
}

#[must_use]
pub fn project_info() -> Value {
    json!({
        "name": "Toleno Network",
        "symbol": "TOLENO",
        "type": "BEP-20 Token",
        "blockchain": "BNB Smart Chain (BSC)",
        "contract_address": "Not yet deployed — will be published at mainnet launch",
        "website": "https://tolenocoin.com",
        "whitepaper": "https://tolenocoin.com/whitepaper",
        "privacy_policy": "https://tolenocoin.com/privacy",
        "support_email": "support@tolenocoin.com",
        "description": "Toleno Network is a blockchain-based mobile mining platform that allows users to mine TOLENO tokens directly from their mobile devices. No expensive hardware needed — just start a 24-hour mining session from the app and earn tokens.",
        "social": {
            "twitter": "https://x.com/tolenonetwork",
            "telegram": "https://t.me/tolenonetwork",
            "instagram": "https://instagram.com/tolenonetwork",
            "youtube": "https://youtube.com/@tolenonetwork",
            "tiktok": "https://tiktok.com/@tolenonetwork",
        },
        "app": {
            "android": "https://play.google.com/store/apps/details?id=com.toleno",
            "ios": "Coming soon to App Store",
        },
    })
}

#[must_use]
pub fn tokenomics() -> Value {
    json!({
        "total_supply": "500,000,000 TOLENO",
        "distribution": {
            "mobile_mining": {
                "percent": "40%",
                "amount": "200,000,000",
                "description": "Users mine via the mobile app through 24-hour mining sessions",
            },
            "ecosystem_fund": {
                "percent": "20%",
                "amount": "100,000,000",
                "description": "Platform development, partnerships, and ecosystem growth",
            },
            "team_advisors": {
                "percent": "15%",
                "amount": "75,000,000",
                "description": "Team and advisors (locked, gradual vesting schedule)",
            },
            "liquidity": {
                "percent": "15%",
                "amount": "75,000,000",
                "description": "DEX liquidity pools and market making",
            },
            "marketing_community": {
                "percent": "10%",
                "amount": "50,000,000",
                "description": "Marketing, airdrops, community rewards, and referral bonuses",
            },
        },
        "mining_mechanism": {
            "session_duration": "24 hours",
            "base_reward": "~28 TOLENO per session",
            "mining_power": "Can be increased through referrals, daily streaks, and premium membership",
            "halving": "Rewards decrease at certain mining milestones (Bitcoin-like halving model)",
            "no_battery_drain": "Mining runs in the background — does not affect phone performance or battery life",
        },
    })
}

#[must_use]
pub fn roadmap() -> Value {
    json!([
        {
            "phase": "Phase 1 — Foundation (Completed)",
            "items": [
                "Mobile app development (React Native, iOS & Android)",
                "Mining engine and backend infrastructure",
                "User registration and referral system",
                "API and MCP integration (Claude AI support)",
                "Multi-language support (12 languages)",
            ],
        },
        {
            "phase": "Phase 2 — Growth (In Progress)",
            "items": [
                "Community building and marketing campaigns",
                "Premium membership system",
                "Staking mechanism development",
                "Strategic partnerships",
            ],
        },
        {
            "phase": "Phase 3 — Token Launch (Coming Soon)",
            "items": [
                "Smart contract deployment on BNB Smart Chain (BSC)",
                "DEX listing (PancakeSwap)",
                "Token claim and withdrawal activation",
                "CoinGecko and CoinMarketCap applications",
            ],
        },
        {
            "phase": "Phase 4 — Expansion",
            "items": [
                "CEX (centralized exchange) listing negotiations",
                "NFT integration",
                "DAO governance mechanism",
                "Cross-chain bridge (BSC, Ethereum, Polygon)",
            ],
        },
    ])
}

#[must_use]
pub fn security_info() -> Value {
    json!({
        "summary": "Toleno Network prioritizes user security and transparency at every level.",
        "details": [
            "Mobile mining: No real resource consumption — does not drain battery or overheat the phone",
            "API key system: Users create and manage their own API keys with full control",
            "OAuth 2.0 + PKCE: Claude AI integration uses secure OAuth flow",
            "Withdrawal protection: Token withdrawals require additional verification",
            "Rate limiting: All API endpoints are protected with rate limiting",
            "Play Integrity: Android app is verified via Google Play Integrity API",
            "HTTPS only: All communication is encrypted with TLS",
            "Open source MCP: Claude AI integration is open source on npm (@toleno/mcp)",
        ],
        "trust_indicators": [
            "Working application: Available and downloadable on Google Play Store",
            "Active community: Active on Telegram, Twitter, and other channels",
            "Transparent tokenomics: Distribution plan and halving model are clearly documented",
            "Team is reachable: Contact via support@tolenocoin.com",
            "Claude AI integration: Listed on the Anthropic MCP Registry",
            "NPM package: @toleno/mcp is open source and auditable by anyone",
        ],
        "upcoming_milestones": [
            "BSC mainnet smart contract deployment is actively being prepared",
            "DEX listing on PancakeSwap is planned as part of the token launch phase",
            "The team is committed to delivering every milestone on the roadmap — early miners will be rewarded the most",
        ],
    })
}
