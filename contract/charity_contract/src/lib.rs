#![no_std]

mod badges;
mod events;
mod storage_types;

#[cfg(test)]
mod test;

pub use badges::{CampaignBadge, DonationBadge};
use badges::SoulboundClient;
use storage_types::{
    AccountInfo, Campaign, DataKey, DonationEntry, PersistentKey, TokenInfo, PLATFORM_FEE,
    SOULBOUND_COUNT, TTL_INSTANCE, TTL_PERSISTENT,
};

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CharityError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    AccountError = 3,
    ValidationError = 4,
    ContractPaused = 5,
    InvalidToken = 6,
    InsufficientBalance = 7,
}

#[contract]
pub struct CharityContract;

#[contractimpl]
impl CharityContract {
    /// `native_token` is the asset contract donations without an explicit
    /// token go through. `soulbound_contracts` is the badge roster: five
    /// donation tiers followed by three campaign tiers.
    pub fn initialize(e: Env, admin: Address, native_token: Address, soulbound_contracts: Vec<Address>) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, CharityError::AlreadyInitialized);
        }
        admin.require_auth();

        if soulbound_contracts.len() != SOULBOUND_COUNT {
            panic_with_error!(&e, CharityError::ValidationError);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::NativeToken, &native_token);
        e.storage().instance().set(&DataKey::Paused, &false);
        e.storage().instance().set(&DataKey::CampaignCount, &0u64);
        e.storage()
            .instance()
            .set(&DataKey::Tokens, &Vec::<TokenInfo>::new(&e));
        e.storage()
            .instance()
            .set(&DataKey::SoulboundContracts, &soulbound_contracts);
        extend_instance(&e);
    }

    // ── Account moderation ────────────────────────────────────────────

    pub fn ban_user(e: Env, caller: Address, user: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        let mut account = read_account(&e, &user);
        account.banned = true;
        write_account(&e, &user, &account);

        events::emit_user_banned(&e, events::UserBannedEvent { user });
    }

    pub fn unban_user(e: Env, caller: Address, user: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        let mut account = read_account(&e, &user);
        account.banned = false;
        write_account(&e, &user, &account);

        events::emit_user_unbanned(&e, events::UserUnbannedEvent { user });
    }

    pub fn verify_user(e: Env, caller: Address, user: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        let mut account = read_account(&e, &user);
        account.verified = true;
        write_account(&e, &user, &account);

        events::emit_user_verified(&e, events::UserVerifiedEvent { user });
    }

    pub fn unverify_user(e: Env, caller: Address, user: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        let mut account = read_account(&e, &user);
        account.verified = false;
        write_account(&e, &user, &account);

        events::emit_user_unverified(&e, events::UserUnverifiedEvent { user });
    }

    pub fn is_verified_user(e: Env, user: Address) -> bool {
        read_account(&e, &user).verified
    }

    pub fn get_account_info(e: Env, user: Address) -> AccountInfo {
        read_account(&e, &user)
    }

    // ── Global pause ──────────────────────────────────────────────────

    pub fn pause(e: Env, caller: Address) {
        caller.require_auth();
        require_admin(&e, &caller);
        e.storage().instance().set(&DataKey::Paused, &true);
    }

    pub fn unpause(e: Env, caller: Address) {
        caller.require_auth();
        require_admin(&e, &caller);
        e.storage().instance().set(&DataKey::Paused, &false);
    }

    pub fn is_paused(e: Env) -> bool {
        e.storage().instance().get(&DataKey::Paused).unwrap()
    }

    // ── Token registry ────────────────────────────────────────────────

    pub fn add_token(e: Env, caller: Address, token: Address, ticker: String, decimals: u32) {
        caller.require_auth();
        require_admin(&e, &caller);

        if is_blank(&ticker) || decimals == 0 {
            panic_with_error!(&e, CharityError::ValidationError);
        }

        let mut tokens = read_tokens(&e);
        for info in tokens.iter() {
            if info.address == token {
                panic_with_error!(&e, CharityError::ValidationError);
            }
        }

        tokens.push_back(TokenInfo {
            address: token.clone(),
            ticker: ticker.clone(),
            decimals,
        });
        e.storage().instance().set(&DataKey::Tokens, &tokens);
        extend_instance(&e);

        events::emit_token_added(
            &e,
            events::TokenAddedEvent {
                token,
                ticker,
                decimals,
            },
        );
    }

    pub fn remove_token(e: Env, caller: Address, token: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        let mut tokens = read_tokens(&e);
        let index = tokens
            .iter()
            .position(|info| info.address == token)
            .unwrap_or_else(|| panic_with_error!(&e, CharityError::ValidationError));

        let removed = tokens.get(index as u32).unwrap();
        tokens.remove(index as u32);
        e.storage().instance().set(&DataKey::Tokens, &tokens);

        events::emit_token_removed(
            &e,
            events::TokenRemovedEvent {
                token,
                ticker: removed.ticker,
            },
        );
    }

    /// Parallel address/ticker sequences in insertion order.
    pub fn get_available_tokens(e: Env) -> (Vec<Address>, Vec<String>) {
        let tokens = read_tokens(&e);
        let mut addresses = Vec::new(&e);
        let mut tickers = Vec::new(&e);
        for info in tokens.iter() {
            addresses.push_back(info.address);
            tickers.push_back(info.ticker);
        }
        (addresses, tickers)
    }

    // ── Campaign lifecycle ────────────────────────────────────────────

    pub fn create_campaign(
        e: Env,
        creator: Address,
        title: String,
        details: String,
        description: String,
        target: i128,
    ) -> u64 {
        creator.require_auth();
        require_not_banned(&e, &creator);
        check_not_paused(&e);
        validate_campaign_fields(&e, &title, &details, &description, target);

        let campaign_id: u64 = e.storage().instance().get(&DataKey::CampaignCount).unwrap();
        let campaign_id = campaign_id + 1;

        let campaign = Campaign {
            id: campaign_id,
            owner: creator.clone(),
            title: title.clone(),
            details,
            description,
            target,
            paused: false,
            claimed: false,
            created_at: e.ledger().timestamp(),
        };

        write_campaign(&e, &campaign);
        e.storage().instance().set(&DataKey::CampaignCount, &campaign_id);

        let owned_key = PersistentKey::OwnerCampaigns(creator.clone());
        let mut owned: Vec<u64> = e
            .storage()
            .persistent()
            .get(&owned_key)
            .unwrap_or(Vec::new(&e));
        owned.push_back(campaign_id);
        e.storage().persistent().set(&owned_key, &owned);
        extend_persistent(&e, &owned_key);

        let mut account = read_account(&e, &creator);
        account.campaigns_created += 1;
        write_account(&e, &creator, &account);
        extend_instance(&e);

        events::emit_campaign_created(
            &e,
            events::CampaignCreatedEvent {
                campaign_id,
                owner: creator,
                title,
                target,
            },
        );

        campaign_id
    }

    pub fn update_campaign(
        e: Env,
        caller: Address,
        campaign_id: u64,
        title: String,
        details: String,
        description: String,
        target: i128,
    ) {
        caller.require_auth();
        require_not_banned(&e, &caller);
        check_not_paused(&e);

        let mut campaign = read_campaign(&e, campaign_id);
        if campaign.claimed {
            panic_with_error!(&e, CharityError::ValidationError);
        }
        if campaign.owner != caller {
            panic_with_error!(&e, CharityError::AccountError);
        }
        validate_campaign_fields(&e, &title, &details, &description, target);

        campaign.title = title.clone();
        campaign.details = details;
        campaign.description = description;
        campaign.target = target;
        write_campaign(&e, &campaign);

        events::emit_campaign_updated(
            &e,
            events::CampaignUpdatedEvent {
                campaign_id,
                title,
                target,
            },
        );
    }

    pub fn pause_campaign(e: Env, caller: Address, campaign_id: u64) {
        caller.require_auth();
        require_not_banned(&e, &caller);
        check_not_paused(&e);

        let mut campaign = read_campaign(&e, campaign_id);
        if campaign.claimed || campaign.paused {
            panic_with_error!(&e, CharityError::ValidationError);
        }
        if campaign.owner != caller {
            panic_with_error!(&e, CharityError::AccountError);
        }

        campaign.paused = true;
        write_campaign(&e, &campaign);

        events::emit_campaign_paused(
            &e,
            events::CampaignPausedEvent {
                campaign_id,
                owner: caller,
            },
        );
    }

    pub fn unpause_campaign(e: Env, caller: Address, campaign_id: u64) {
        caller.require_auth();
        require_not_banned(&e, &caller);
        check_not_paused(&e);

        let mut campaign = read_campaign(&e, campaign_id);
        if campaign.claimed || !campaign.paused {
            panic_with_error!(&e, CharityError::ValidationError);
        }
        if campaign.owner != caller {
            panic_with_error!(&e, CharityError::AccountError);
        }

        campaign.paused = false;
        write_campaign(&e, &campaign);

        events::emit_campaign_unpaused(
            &e,
            events::CampaignUnpausedEvent {
                campaign_id,
                owner: caller,
            },
        );
    }

    pub fn get_campaign_details(e: Env, campaign_id: u64) -> Campaign {
        read_campaign(&e, campaign_id)
    }

    pub fn number_of_campaigns(e: Env) -> u64 {
        e.storage().instance().get(&DataKey::CampaignCount).unwrap()
    }

    /// 1-indexed window of global campaign ids. Pages past the end are
    /// empty; a page or size of zero is rejected.
    pub fn get_paginated_campaigns_index(e: Env, page: u32, page_size: u32) -> Vec<u64> {
        if page == 0 || page_size == 0 {
            panic_with_error!(&e, CharityError::ValidationError);
        }

        let count: u64 = e.storage().instance().get(&DataKey::CampaignCount).unwrap();
        let start = (page as u64 - 1) * page_size as u64 + 1;

        let mut ids = Vec::new(&e);
        if start > count {
            return ids;
        }
        let end = core::cmp::min(count, start + page_size as u64 - 1);
        for id in start..=end {
            ids.push_back(id);
        }
        ids
    }

    /// 1-indexed window over the campaigns owned by `owner`.
    pub fn get_my_campaign_index(e: Env, owner: Address, page: u32, page_size: u32) -> Vec<u64> {
        if page == 0 || page_size == 0 {
            panic_with_error!(&e, CharityError::ValidationError);
        }

        let owned: Vec<u64> = e
            .storage()
            .persistent()
            .get(&PersistentKey::OwnerCampaigns(owner))
            .unwrap_or(Vec::new(&e));

        let start = (page - 1) * page_size;
        let mut ids = Vec::new(&e);
        if start >= owned.len() {
            return ids;
        }
        let end = core::cmp::min(owned.len(), start + page_size);
        for i in start..end {
            ids.push_back(owned.get(i).unwrap());
        }
        ids
    }

    // ── Donations ─────────────────────────────────────────────────────

    pub fn donate_with_token(
        e: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
        token: Address,
        display_name: String,
        message: String,
    ) {
        donor.require_auth();
        require_not_banned(&e, &donor);
        check_not_paused(&e);

        if !token_registered(&e, &token) {
            panic_with_error!(&e, CharityError::InvalidToken);
        }

        Self::process_donation(&e, donor, campaign_id, amount, token, display_name, message);
    }

    /// Native-currency variant: the attached value flows through the
    /// native asset contract configured at initialization.
    pub fn donate(
        e: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
        display_name: String,
        message: String,
    ) {
        donor.require_auth();
        require_not_banned(&e, &donor);
        check_not_paused(&e);

        let native: Address = e.storage().instance().get(&DataKey::NativeToken).unwrap();
        Self::process_donation(&e, donor, campaign_id, amount, native, display_name, message);
    }

    pub fn get_campaign_donations(e: Env, campaign_id: u64) -> Vec<DonationEntry> {
        let _campaign = read_campaign(&e, campaign_id);

        let tokens: Vec<Address> = e
            .storage()
            .persistent()
            .get(&PersistentKey::CampaignTokens(campaign_id))
            .unwrap_or(Vec::new(&e));

        let mut entries = Vec::new(&e);
        for token in tokens.iter() {
            let amount: i128 = e
                .storage()
                .persistent()
                .get(&PersistentKey::Donation(campaign_id, token.clone()))
                .unwrap_or(0);
            entries.push_back(DonationEntry { token, amount });
        }
        entries
    }

    // ── Withdrawal ────────────────────────────────────────────────────

    /// Contract-admin operation: pays each donated token out to the
    /// campaign owner minus the platform fee, then marks the campaign
    /// claimed for good.
    pub fn withdraw_campaign(e: Env, caller: Address, campaign_id: u64) {
        caller.require_auth();
        require_not_banned(&e, &caller);

        let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
        if caller != admin {
            panic_with_error!(&e, CharityError::AccountError);
        }
        check_not_paused(&e);

        let mut campaign = read_campaign(&e, campaign_id);
        if campaign.claimed {
            panic_with_error!(&e, CharityError::ValidationError);
        }

        let tokens: Vec<Address> = e
            .storage()
            .persistent()
            .get(&PersistentKey::CampaignTokens(campaign_id))
            .unwrap_or(Vec::new(&e));

        for token_addr in tokens.iter() {
            let amount: i128 = e
                .storage()
                .persistent()
                .get(&PersistentKey::Donation(campaign_id, token_addr.clone()))
                .unwrap_or(0);
            if amount == 0 {
                continue;
            }

            let fee = amount * PLATFORM_FEE / 100;
            let payout = amount - fee;
            if payout > 0 {
                token::Client::new(&e, &token_addr).transfer(
                    &e.current_contract_address(),
                    &campaign.owner,
                    &payout,
                );
            }
        }

        campaign.claimed = true;
        write_campaign(&e, &campaign);

        events::emit_campaign_claimed(
            &e,
            events::CampaignClaimedEvent {
                campaign_id,
                owner: campaign.owner,
                claimed_by: caller,
            },
        );
    }

    // ── Achievement badges ────────────────────────────────────────────

    pub fn claim_donation_badge(e: Env, claimer: Address, badge: DonationBadge) {
        claimer.require_auth();
        require_not_banned(&e, &claimer);
        check_not_paused(&e);

        let account = read_account(&e, &claimer);
        if account.donation_count < badge.threshold() {
            panic_with_error!(&e, CharityError::AccountError);
        }

        Self::issue_badge(&e, &claimer, badge.roster_index());
    }

    pub fn claim_campaign_badge(e: Env, claimer: Address, badge: CampaignBadge) {
        claimer.require_auth();
        require_not_banned(&e, &claimer);
        check_not_paused(&e);

        let account = read_account(&e, &claimer);
        if account.campaigns_created < badge.threshold() {
            panic_with_error!(&e, CharityError::AccountError);
        }

        Self::issue_badge(&e, &claimer, badge.roster_index());
    }

    pub fn has_donation_badge(e: Env, user: Address, badge: DonationBadge) -> bool {
        e.storage()
            .persistent()
            .has(&PersistentKey::Badge(user, badge.roster_index()))
    }

    pub fn has_campaign_badge(e: Env, user: Address, badge: CampaignBadge) -> bool {
        e.storage()
            .persistent()
            .has(&PersistentKey::Badge(user, badge.roster_index()))
    }

    pub fn get_soulbound_contracts(e: Env) -> Vec<Address> {
        e.storage()
            .instance()
            .get(&DataKey::SoulboundContracts)
            .unwrap()
    }

    pub fn admin(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Admin).unwrap()
    }
}

impl CharityContract {
    fn process_donation(
        e: &Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
        token_addr: Address,
        display_name: String,
        message: String,
    ) {
        let campaign = read_campaign(e, campaign_id);
        if campaign.paused || campaign.claimed {
            panic_with_error!(e, CharityError::ValidationError);
        }
        if amount <= 0 {
            panic_with_error!(e, CharityError::ValidationError);
        }

        token::Client::new(e, &token_addr).transfer(
            &donor,
            &e.current_contract_address(),
            &amount,
        );

        record_donation(e, campaign_id, &token_addr, amount);

        let mut account = read_account(e, &donor);
        account.donation_count += 1;
        write_account(e, &donor, &account);

        events::emit_campaign_donation(
            e,
            events::CampaignDonationEvent {
                campaign_id,
                donor,
                token: token_addr,
                amount,
                display_name,
                message,
            },
        );
    }

    fn issue_badge(e: &Env, claimer: &Address, roster_index: u32) {
        let key = PersistentKey::Badge(claimer.clone(), roster_index);
        if e.storage().persistent().has(&key) {
            panic_with_error!(e, CharityError::AccountError);
        }

        let roster: Vec<Address> = e
            .storage()
            .instance()
            .get(&DataKey::SoulboundContracts)
            .unwrap();
        let soulbound = roster.get(roster_index).unwrap();

        SoulboundClient::new(e, &soulbound).mint(&e.current_contract_address(), claimer);

        e.storage().persistent().set(&key, &true);
        extend_persistent(e, &key);

        events::emit_badge_claimed(
            e,
            events::BadgeClaimedEvent {
                claimer: claimer.clone(),
                soulbound,
                roster_index,
            },
        );
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn check_not_paused(e: &Env) {
    let paused: bool = e.storage().instance().get(&DataKey::Paused).unwrap();
    if paused {
        panic_with_error!(e, CharityError::ContractPaused);
    }
}

fn require_admin(e: &Env, caller: &Address) {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    if caller != &admin {
        panic_with_error!(e, CharityError::Unauthorized);
    }
}

fn require_not_banned(e: &Env, user: &Address) {
    if read_account(e, user).banned {
        panic_with_error!(e, CharityError::AccountError);
    }
}

fn read_account(e: &Env, user: &Address) -> AccountInfo {
    e.storage()
        .persistent()
        .get(&PersistentKey::Account(user.clone()))
        .unwrap_or(AccountInfo::fresh())
}

fn write_account(e: &Env, user: &Address, account: &AccountInfo) {
    let key = PersistentKey::Account(user.clone());
    e.storage().persistent().set(&key, account);
    extend_persistent(e, &key);
}

fn is_blank(s: &String) -> bool {
    s.len() == 0
}

fn validate_campaign_fields(
    e: &Env,
    title: &String,
    details: &String,
    description: &String,
    target: i128,
) {
    if is_blank(title) || is_blank(details) || is_blank(description) || target <= 0 {
        panic_with_error!(e, CharityError::ValidationError);
    }
}

fn read_campaign(e: &Env, campaign_id: u64) -> Campaign {
    let count: u64 = e.storage().instance().get(&DataKey::CampaignCount).unwrap();
    if campaign_id == 0 || campaign_id > count {
        panic_with_error!(e, CharityError::ValidationError);
    }
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(e, CharityError::ValidationError))
}

fn write_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

fn read_tokens(e: &Env) -> Vec<TokenInfo> {
    e.storage().instance().get(&DataKey::Tokens).unwrap()
}

fn token_registered(e: &Env, token: &Address) -> bool {
    for info in read_tokens(e).iter() {
        if &info.address == token {
            return true;
        }
    }
    false
}

fn record_donation(e: &Env, campaign_id: u64, token_addr: &Address, amount: i128) {
    let key = PersistentKey::Donation(campaign_id, token_addr.clone());
    let total: i128 = e.storage().persistent().get(&key).unwrap_or(0);

    if total == 0 {
        let list_key = PersistentKey::CampaignTokens(campaign_id);
        let mut list: Vec<Address> = e
            .storage()
            .persistent()
            .get(&list_key)
            .unwrap_or(Vec::new(e));
        if !list.contains(token_addr) {
            list.push_back(token_addr.clone());
        }
        e.storage().persistent().set(&list_key, &list);
        extend_persistent(e, &list_key);
    }

    e.storage().persistent().set(&key, &(total + amount));
    extend_persistent(e, &key);
}
