use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u64,
    pub owner: Address,
    pub title: String,
    pub target: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignUpdatedEvent {
    pub campaign_id: u64,
    pub title: String,
    pub target: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignPausedEvent {
    pub campaign_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignUnpausedEvent {
    pub campaign_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignDonationEvent {
    pub campaign_id: u64,
    pub donor: Address,
    pub token: Address,
    pub amount: i128,
    pub display_name: String,
    pub message: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignClaimedEvent {
    pub campaign_id: u64,
    pub owner: Address,
    pub claimed_by: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct TokenAddedEvent {
    pub token: Address,
    pub ticker: String,
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct TokenRemovedEvent {
    pub token: Address,
    pub ticker: String,
}

#[contracttype]
#[derive(Clone)]
pub struct UserBannedEvent {
    pub user: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct UserUnbannedEvent {
    pub user: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct UserVerifiedEvent {
    pub user: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct UserUnverifiedEvent {
    pub user: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct BadgeClaimedEvent {
    pub claimer: Address,
    pub soulbound: Address,
    pub roster_index: u32,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_updated(env: &Env, event: CampaignUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_updated"),), event);
}

pub fn emit_campaign_paused(env: &Env, event: CampaignPausedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_paused"),), event);
}

pub fn emit_campaign_unpaused(env: &Env, event: CampaignUnpausedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_unpaused"),), event);
}

pub fn emit_campaign_donation(env: &Env, event: CampaignDonationEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_donation"),), event);
}

pub fn emit_campaign_claimed(env: &Env, event: CampaignClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_claimed"),), event);
}

pub fn emit_token_added(env: &Env, event: TokenAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "token_added"),), event);
}

pub fn emit_token_removed(env: &Env, event: TokenRemovedEvent) {
    env.events()
        .publish((Symbol::new(env, "token_removed"),), event);
}

pub fn emit_user_banned(env: &Env, event: UserBannedEvent) {
    env.events()
        .publish((Symbol::new(env, "user_banned"),), event);
}

pub fn emit_user_unbanned(env: &Env, event: UserUnbannedEvent) {
    env.events()
        .publish((Symbol::new(env, "user_unbanned"),), event);
}

pub fn emit_user_verified(env: &Env, event: UserVerifiedEvent) {
    env.events()
        .publish((Symbol::new(env, "user_verified"),), event);
}

pub fn emit_user_unverified(env: &Env, event: UserUnverifiedEvent) {
    env.events()
        .publish((Symbol::new(env, "user_unverified"),), event);
}

pub fn emit_badge_claimed(env: &Env, event: BadgeClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "badge_claimed"),), event);
}
