use soroban_sdk::{contracttype, Address, String};

// Percentage retained by the platform on every withdrawn donation.
pub const PLATFORM_FEE: i128 = 5;

// One soulbound contract per badge tier: five donation tiers followed by
// three campaign tiers, in roster order.
pub const SOULBOUND_COUNT: u32 = 8;

pub const TTL_INSTANCE: u32 = 17280 * 30;
pub const TTL_PERSISTENT: u32 = 17280 * 90;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    NativeToken,
    Paused,
    CampaignCount,
    Tokens,
    SoulboundContracts,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(u64),
    Donation(u64, Address),
    CampaignTokens(u64),
    OwnerCampaigns(Address),
    Account(Address),
    Badge(Address, u32),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub details: String,
    pub description: String,
    pub target: i128,
    pub paused: bool,
    pub claimed: bool,
    pub created_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenInfo {
    pub address: Address,
    pub ticker: String,
    pub decimals: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AccountInfo {
    pub banned: bool,
    pub verified: bool,
    pub donation_count: u64,
    pub campaigns_created: u64,
}

impl AccountInfo {
    pub fn fresh() -> Self {
        AccountInfo {
            banned: false,
            verified: false,
            donation_count: 0,
            campaigns_created: 0,
        }
    }
}

// Per-token running total recorded against one campaign.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DonationEntry {
    pub token: Address,
    pub amount: i128,
}
