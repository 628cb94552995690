use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Donation-count achievement tiers, in roster order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DonationBadge {
    First,
    Fifth,
    Tenth,
    Fiftieth,
    Hundredth,
}

/// Campaign-count achievement tiers, continuing the roster after the
/// donation tiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignBadge {
    First,
    Third,
    Tenth,
}

impl DonationBadge {
    pub fn threshold(self) -> u64 {
        match self {
            DonationBadge::First => 1,
            DonationBadge::Fifth => 5,
            DonationBadge::Tenth => 10,
            DonationBadge::Fiftieth => 50,
            DonationBadge::Hundredth => 100,
        }
    }

    pub fn roster_index(self) -> u32 {
        match self {
            DonationBadge::First => 0,
            DonationBadge::Fifth => 1,
            DonationBadge::Tenth => 2,
            DonationBadge::Fiftieth => 3,
            DonationBadge::Hundredth => 4,
        }
    }
}

impl CampaignBadge {
    pub fn threshold(self) -> u64 {
        match self {
            CampaignBadge::First => 1,
            CampaignBadge::Third => 3,
            CampaignBadge::Tenth => 10,
        }
    }

    pub fn roster_index(self) -> u32 {
        match self {
            CampaignBadge::First => 5,
            CampaignBadge::Third => 6,
            CampaignBadge::Tenth => 7,
        }
    }
}

/// Issuance surface of the soulbound badge contracts. The charity contract
/// is granted the editor role on every roster entry, so it mints with its
/// own address as the minter.
#[contractclient(name = "SoulboundClient")]
pub trait SoulboundBadge {
    fn mint(env: Env, minter: Address, to: Address);
}
