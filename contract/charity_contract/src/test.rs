#![cfg(test)]

use super::*;
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env, String, Vec,
};
use soulbound_contract::{SoulboundContract, SoulboundContractClient};

struct CharityFixture<'a> {
    env: Env,
    admin: Address,
    native: TokenClient<'a>,
    native_sac: StellarAssetClient<'a>,
    charity: CharityContractClient<'a>,
    soulbounds: Vec<Address>,
}

fn setup<'a>() -> CharityFixture<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let native_id = env.register_stellar_asset_contract_v2(admin.clone());
    let native = TokenClient::new(&env, &native_id.address());
    let native_sac = StellarAssetClient::new(&env, &native_id.address());

    let charity = CharityContractClient::new(&env, &env.register(CharityContract, ()));

    let mut soulbounds = Vec::new(&env);
    for _i in 0..8u32 {
        let badge = SoulboundContractClient::new(&env, &env.register(SoulboundContract, ()));
        badge.initialize(&admin, &String::from_str(&env, "QmBadgeMetadata"));
        badge.grant_editor(&admin, &charity.address);
        soulbounds.push_back(badge.address.clone());
    }

    charity.initialize(&admin, &native.address, &soulbounds);

    CharityFixture {
        env,
        admin,
        native,
        native_sac,
        charity,
        soulbounds,
    }
}

fn register_asset<'a>(fx: &CharityFixture, ticker: &str) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let sac = fx.env.register_stellar_asset_contract_v2(fx.admin.clone());
    fx.charity.add_token(
        &fx.admin,
        &sac.address(),
        &String::from_str(&fx.env, ticker),
        &7,
    );
    (
        TokenClient::new(&fx.env, &sac.address()),
        StellarAssetClient::new(&fx.env, &sac.address()),
    )
}

fn create_campaign(fx: &CharityFixture, owner: &Address) -> u64 {
    fx.charity.create_campaign(
        owner,
        &String::from_str(&fx.env, "Clean Water"),
        &String::from_str(&fx.env, "Wells for three villages"),
        &String::from_str(&fx.env, "Funds drilling equipment and maintenance"),
        &1_000_000,
    )
}

fn donate_native_n(fx: &CharityFixture, donor: &Address, campaign_id: u64, times: u64) {
    fx.native_sac.mint(donor, &(times as i128 * 100));
    for _ in 0..times {
        fx.charity.donate(
            donor,
            &campaign_id,
            &100,
            &String::from_str(&fx.env, "Anonymous"),
            &String::from_str(&fx.env, "Keep going"),
        );
    }
}

// ── Ban and unban ─────────────────────────────────────────────────────

#[test]
fn test_banned_user_cannot_create_campaign() {
    let fx = setup();
    let user = Address::generate(&fx.env);

    fx.charity.ban_user(&fx.admin, &user);

    let result = fx.charity.try_create_campaign(
        &user,
        &String::from_str(&fx.env, "Test"),
        &String::from_str(&fx.env, "Test"),
        &String::from_str(&fx.env, "Test"),
        &100,
    );
    assert_eq!(result, Err(Ok(CharityError::AccountError.into())));
}

#[test]
fn test_unban_restores_access() {
    let fx = setup();
    let user = Address::generate(&fx.env);

    fx.charity.ban_user(&fx.admin, &user);
    assert!(fx.charity.get_account_info(&user).banned);

    fx.charity.unban_user(&fx.admin, &user);
    assert!(!fx.charity.get_account_info(&user).banned);

    assert_eq!(create_campaign(&fx, &user), 1);
}

#[test]
fn test_ban_requires_admin() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let other = Address::generate(&fx.env);

    assert_eq!(
        fx.charity.try_ban_user(&user, &other),
        Err(Ok(CharityError::Unauthorized.into()))
    );
    assert_eq!(
        fx.charity.try_unban_user(&user, &other),
        Err(Ok(CharityError::Unauthorized.into()))
    );
}

// ── Verify and unverify ───────────────────────────────────────────────

#[test]
fn test_verify_and_unverify_user() {
    let fx = setup();
    let user = Address::generate(&fx.env);

    assert!(!fx.charity.is_verified_user(&user));

    fx.charity.verify_user(&fx.admin, &user);
    assert!(fx.charity.is_verified_user(&user));

    fx.charity.unverify_user(&fx.admin, &user);
    assert!(!fx.charity.is_verified_user(&user));
}

#[test]
fn test_verify_requires_admin() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let other = Address::generate(&fx.env);

    assert_eq!(
        fx.charity.try_verify_user(&user, &other),
        Err(Ok(CharityError::Unauthorized.into()))
    );
    assert_eq!(
        fx.charity.try_unverify_user(&user, &other),
        Err(Ok(CharityError::Unauthorized.into()))
    );
}

// ── Token registry ────────────────────────────────────────────────────

#[test]
fn test_add_token() {
    let fx = setup();
    let (usdc, _) = register_asset(&fx, "axlUSDC");

    let (addresses, tickers) = fx.charity.get_available_tokens();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses.get(0).unwrap(), usdc.address);
    assert_eq!(tickers.get(0).unwrap(), String::from_str(&fx.env, "axlUSDC"));
}

#[test]
fn test_add_token_requires_admin() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let sac = fx.env.register_stellar_asset_contract_v2(fx.admin.clone());

    assert_eq!(
        fx.charity.try_add_token(
            &user,
            &sac.address(),
            &String::from_str(&fx.env, "axlUSDC"),
            &7
        ),
        Err(Ok(CharityError::Unauthorized.into()))
    );
}

#[test]
fn test_add_token_rejects_empty_ticker_and_zero_decimals() {
    let fx = setup();
    let sac = fx.env.register_stellar_asset_contract_v2(fx.admin.clone());

    assert_eq!(
        fx.charity
            .try_add_token(&fx.admin, &sac.address(), &String::from_str(&fx.env, ""), &7),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity.try_add_token(
            &fx.admin,
            &sac.address(),
            &String::from_str(&fx.env, "axlUSDC"),
            &0
        ),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_add_token_rejects_duplicates() {
    let fx = setup();
    let (usdc, _) = register_asset(&fx, "axlUSDC");

    assert_eq!(
        fx.charity.try_add_token(
            &fx.admin,
            &usdc.address,
            &String::from_str(&fx.env, "axlUSDC"),
            &7
        ),
        Err(Ok(CharityError::ValidationError.into()))
    );

    let (addresses, _) = fx.charity.get_available_tokens();
    assert_eq!(addresses.len(), 1);
}

#[test]
fn test_remove_token() {
    let fx = setup();
    let (usdc, _) = register_asset(&fx, "axlUSDC");
    let (_usdt, _) = register_asset(&fx, "axlUSDT");

    fx.charity.remove_token(&fx.admin, &usdc.address);

    let (addresses, tickers) = fx.charity.get_available_tokens();
    assert_eq!(addresses.len(), 1);
    assert!(!addresses.contains(&usdc.address));
    assert!(tickers.contains(String::from_str(&fx.env, "axlUSDT")));

    // Gone means gone.
    assert_eq!(
        fx.charity.try_remove_token(&fx.admin, &usdc.address),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_remove_token_requires_admin() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let (usdc, _) = register_asset(&fx, "axlUSDC");

    assert_eq!(
        fx.charity.try_remove_token(&user, &usdc.address),
        Err(Ok(CharityError::Unauthorized.into()))
    );
}

// ── Campaign lifecycle ────────────────────────────────────────────────

#[test]
fn test_create_campaign_assigns_sequential_ids() {
    let fx = setup();
    let user1 = Address::generate(&fx.env);
    let user2 = Address::generate(&fx.env);

    assert_eq!(create_campaign(&fx, &user1), 1);
    assert_eq!(create_campaign(&fx, &user2), 2);
    assert_eq!(fx.charity.number_of_campaigns(), 2);

    let campaign = fx.charity.get_campaign_details(&1);
    assert_eq!(campaign.id, 1);
    assert_eq!(campaign.owner, user1);
    assert_eq!(campaign.title, String::from_str(&fx.env, "Clean Water"));
    assert_eq!(campaign.target, 1_000_000);
    assert!(!campaign.paused);
    assert!(!campaign.claimed);

    assert_eq!(fx.charity.get_account_info(&user1).campaigns_created, 1);
}

#[test]
fn test_create_campaign_rejects_empty_fields_and_zero_target() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let filled = String::from_str(&fx.env, "Test");
    let blank = String::from_str(&fx.env, "");

    assert_eq!(
        fx.charity
            .try_create_campaign(&user, &blank, &filled, &filled, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity
            .try_create_campaign(&user, &filled, &blank, &filled, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity
            .try_create_campaign(&user, &filled, &filled, &blank, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity
            .try_create_campaign(&user, &filled, &filled, &filled, &0),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_campaign_lookup_rejects_invalid_ids() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    create_campaign(&fx, &user);

    assert_eq!(
        fx.charity.try_get_campaign_details(&0),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity.try_get_campaign_details(&2),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_update_campaign() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let id = create_campaign(&fx, &user);

    fx.charity.update_campaign(
        &user,
        &id,
        &String::from_str(&fx.env, "Clean Water II"),
        &String::from_str(&fx.env, "More wells"),
        &String::from_str(&fx.env, "Scope doubled after site survey"),
        &2_000_000,
    );

    let campaign = fx.charity.get_campaign_details(&id);
    assert_eq!(campaign.title, String::from_str(&fx.env, "Clean Water II"));
    assert_eq!(campaign.target, 2_000_000);
    assert_eq!(campaign.owner, user);
}

#[test]
fn test_update_campaign_is_owner_only() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let intruder = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);
    let text = String::from_str(&fx.env, "Hijacked");

    assert_eq!(
        fx.charity
            .try_update_campaign(&intruder, &id, &text, &text, &text, &100),
        Err(Ok(CharityError::AccountError.into()))
    );
}

#[test]
fn test_update_campaign_rejects_invalid_input() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let id = create_campaign(&fx, &user);
    let text = String::from_str(&fx.env, "Test");
    let blank = String::from_str(&fx.env, "");

    assert_eq!(
        fx.charity
            .try_update_campaign(&user, &0, &text, &text, &text, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity
            .try_update_campaign(&user, &(id + 1), &text, &text, &text, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity
            .try_update_campaign(&user, &id, &blank, &text, &text, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity
            .try_update_campaign(&user, &id, &text, &text, &text, &0),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_pause_and_unpause_campaign() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let intruder = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    assert_eq!(
        fx.charity.try_pause_campaign(&intruder, &id),
        Err(Ok(CharityError::AccountError.into()))
    );

    fx.charity.pause_campaign(&owner, &id);
    assert!(fx.charity.get_campaign_details(&id).paused);

    assert_eq!(
        fx.charity.try_pause_campaign(&owner, &id),
        Err(Ok(CharityError::ValidationError.into()))
    );

    fx.charity.unpause_campaign(&owner, &id);
    assert!(!fx.charity.get_campaign_details(&id).paused);

    assert_eq!(
        fx.charity.try_unpause_campaign(&owner, &id),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_global_pagination() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    for _ in 0..5 {
        create_campaign(&fx, &user);
    }

    let page1 = fx.charity.get_paginated_campaigns_index(&1, &2);
    assert_eq!(page1, Vec::from_array(&fx.env, [1u64, 2]));

    let page3 = fx.charity.get_paginated_campaigns_index(&3, &2);
    assert_eq!(page3, Vec::from_array(&fx.env, [5u64]));

    let page4 = fx.charity.get_paginated_campaigns_index(&4, &2);
    assert_eq!(page4.len(), 0);

    assert_eq!(
        fx.charity.try_get_paginated_campaigns_index(&0, &2),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity.try_get_paginated_campaigns_index(&1, &0),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_my_campaign_index_filters_by_owner() {
    let fx = setup();
    let user1 = Address::generate(&fx.env);
    let user2 = Address::generate(&fx.env);

    create_campaign(&fx, &user1); // 1
    create_campaign(&fx, &user2); // 2
    create_campaign(&fx, &user1); // 3
    create_campaign(&fx, &user1); // 4

    let mine = fx.charity.get_my_campaign_index(&user1, &1, &10);
    assert_eq!(mine, Vec::from_array(&fx.env, [1u64, 3, 4]));

    let page2 = fx.charity.get_my_campaign_index(&user1, &2, &2);
    assert_eq!(page2, Vec::from_array(&fx.env, [4u64]));

    let theirs = fx.charity.get_my_campaign_index(&user2, &1, &10);
    assert_eq!(theirs, Vec::from_array(&fx.env, [2u64]));
}

// ── Donations ─────────────────────────────────────────────────────────

#[test]
fn test_token_donations_accumulate() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    let (usdc, usdc_sac) = register_asset(&fx, "axlUSDC");
    usdc_sac.mint(&donor, &1_000);

    let name = String::from_str(&fx.env, "Alice");
    let message = String::from_str(&fx.env, "For the wells");
    fx.charity
        .donate_with_token(&donor, &id, &100, &usdc.address, &name, &message);
    fx.charity
        .donate_with_token(&donor, &id, &100, &usdc.address, &name, &message);

    let entries = fx.charity.get_campaign_donations(&id);
    assert_eq!(entries.len(), 1);
    let entry = entries.get(0).unwrap();
    assert_eq!(entry.token, usdc.address);
    assert_eq!(entry.amount, 200);

    assert_eq!(usdc.balance(&fx.charity.address), 200);
    assert_eq!(usdc.balance(&donor), 800);
    assert_eq!(fx.charity.get_account_info(&donor).donation_count, 2);
}

#[test]
fn test_donating_a_new_token_adds_an_entry() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    let (usdc, usdc_sac) = register_asset(&fx, "axlUSDC");
    let (usdt, usdt_sac) = register_asset(&fx, "axlUSDT");
    usdc_sac.mint(&donor, &500);
    usdt_sac.mint(&donor, &500);

    let name = String::from_str(&fx.env, "Alice");
    let message = String::from_str(&fx.env, "hi");
    fx.charity
        .donate_with_token(&donor, &id, &300, &usdc.address, &name, &message);
    fx.charity
        .donate_with_token(&donor, &id, &500, &usdt.address, &name, &message);

    let entries = fx.charity.get_campaign_donations(&id);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get(0).unwrap().amount, 300);
    assert_eq!(entries.get(1).unwrap().amount, 500);
}

#[test]
fn test_donate_with_unregistered_token() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    let rogue = fx.env.register_stellar_asset_contract_v2(fx.admin.clone());
    StellarAssetClient::new(&fx.env, &rogue.address()).mint(&donor, &500);

    assert_eq!(
        fx.charity.try_donate_with_token(
            &donor,
            &id,
            &100,
            &rogue.address(),
            &String::from_str(&fx.env, "Alice"),
            &String::from_str(&fx.env, "hi"),
        ),
        Err(Ok(CharityError::InvalidToken.into()))
    );
}

#[test]
fn test_donate_validation() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);
    let name = String::from_str(&fx.env, "Alice");
    let message = String::from_str(&fx.env, "hi");

    fx.native_sac.mint(&donor, &1_000);

    // Zero amount.
    assert_eq!(
        fx.charity.try_donate(&donor, &id, &0, &name, &message),
        Err(Ok(CharityError::ValidationError.into()))
    );

    // Missing campaign.
    assert_eq!(
        fx.charity.try_donate(&donor, &99, &100, &name, &message),
        Err(Ok(CharityError::ValidationError.into()))
    );

    // Paused campaign.
    fx.charity.pause_campaign(&owner, &id);
    assert_eq!(
        fx.charity.try_donate(&donor, &id, &100, &name, &message),
        Err(Ok(CharityError::ValidationError.into()))
    );
    fx.charity.unpause_campaign(&owner, &id);

    // Banned donor.
    fx.charity.ban_user(&fx.admin, &donor);
    assert_eq!(
        fx.charity.try_donate(&donor, &id, &100, &name, &message),
        Err(Ok(CharityError::AccountError.into()))
    );
}

#[test]
fn test_native_donation_is_recorded_under_native_token() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    fx.native_sac.mint(&donor, &1_000);
    fx.charity.donate(
        &donor,
        &id,
        &400,
        &String::from_str(&fx.env, "Anonymous"),
        &String::from_str(&fx.env, "godspeed"),
    );

    let entries = fx.charity.get_campaign_donations(&id);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get(0).unwrap().token, fx.native.address);
    assert_eq!(entries.get(0).unwrap().amount, 400);
    assert_eq!(fx.native.balance(&fx.charity.address), 400);
}

// ── Withdrawal ────────────────────────────────────────────────────────

#[test]
fn test_withdraw_campaign_pays_fee_adjusted_amounts() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    let (usdc, usdc_sac) = register_asset(&fx, "axlUSDC");
    usdc_sac.mint(&donor, &1_000);
    fx.native_sac.mint(&donor, &500);

    let name = String::from_str(&fx.env, "Alice");
    let message = String::from_str(&fx.env, "hi");
    fx.charity
        .donate_with_token(&donor, &id, &1_000, &usdc.address, &name, &message);
    fx.charity.donate(&donor, &id, &500, &name, &message);

    fx.charity.withdraw_campaign(&fx.admin, &id);

    // 5% platform fee stays with the contract.
    assert_eq!(usdc.balance(&owner), 950);
    assert_eq!(usdc.balance(&fx.charity.address), 50);
    assert_eq!(fx.native.balance(&owner), 475);
    assert_eq!(fx.native.balance(&fx.charity.address), 25);

    assert!(fx.charity.get_campaign_details(&id).claimed);
}

#[test]
fn test_withdraw_campaign_is_single_shot() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);
    donate_native_n(&fx, &donor, id, 1);

    fx.charity.withdraw_campaign(&fx.admin, &id);
    assert_eq!(
        fx.charity.try_withdraw_campaign(&fx.admin, &id),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_claimed_campaign_rejects_donations_and_updates() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);
    donate_native_n(&fx, &donor, id, 1);

    fx.charity.withdraw_campaign(&fx.admin, &id);

    fx.native_sac.mint(&donor, &100);
    assert_eq!(
        fx.charity.try_donate(
            &donor,
            &id,
            &100,
            &String::from_str(&fx.env, "Alice"),
            &String::from_str(&fx.env, "hi"),
        ),
        Err(Ok(CharityError::ValidationError.into()))
    );

    let text = String::from_str(&fx.env, "Test");
    assert_eq!(
        fx.charity
            .try_update_campaign(&owner, &id, &text, &text, &text, &100),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

#[test]
fn test_withdraw_campaign_requires_contract_admin() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    // Even the campaign owner cannot withdraw.
    assert_eq!(
        fx.charity.try_withdraw_campaign(&owner, &id),
        Err(Ok(CharityError::AccountError.into()))
    );
}

#[test]
fn test_withdraw_campaign_invalid_id() {
    let fx = setup();

    assert_eq!(
        fx.charity.try_withdraw_campaign(&fx.admin, &0),
        Err(Ok(CharityError::ValidationError.into()))
    );
    assert_eq!(
        fx.charity.try_withdraw_campaign(&fx.admin, &1),
        Err(Ok(CharityError::ValidationError.into()))
    );
}

// ── Achievement badges ────────────────────────────────────────────────

#[test]
fn test_first_donation_badge() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    // Nothing donated yet.
    assert_eq!(
        fx.charity.try_claim_donation_badge(&donor, &DonationBadge::First),
        Err(Ok(CharityError::AccountError.into()))
    );

    donate_native_n(&fx, &donor, id, 1);
    fx.charity.claim_donation_badge(&donor, &DonationBadge::First);

    assert!(fx.charity.has_donation_badge(&donor, &DonationBadge::First));
    let badge = SoulboundContractClient::new(&fx.env, &fx.soulbounds.get(0).unwrap());
    assert_eq!(badge.balance(&donor), 1);

    // One shot per tier.
    assert_eq!(
        fx.charity.try_claim_donation_badge(&donor, &DonationBadge::First),
        Err(Ok(CharityError::AccountError.into()))
    );
}

#[test]
fn test_donation_badge_thresholds_are_exact() {
    let fx = setup();
    let owner = Address::generate(&fx.env);
    let donor = Address::generate(&fx.env);
    let id = create_campaign(&fx, &owner);

    donate_native_n(&fx, &donor, id, 4);
    assert_eq!(
        fx.charity.try_claim_donation_badge(&donor, &DonationBadge::Fifth),
        Err(Ok(CharityError::AccountError.into()))
    );

    donate_native_n(&fx, &donor, id, 1);
    assert_eq!(fx.charity.get_account_info(&donor).donation_count, 5);
    fx.charity.claim_donation_badge(&donor, &DonationBadge::Fifth);

    // Lower tiers stay claimable on their own.
    fx.charity.claim_donation_badge(&donor, &DonationBadge::First);
    assert!(fx.charity.has_donation_badge(&donor, &DonationBadge::First));
    assert!(fx.charity.has_donation_badge(&donor, &DonationBadge::Fifth));
    assert!(!fx.charity.has_donation_badge(&donor, &DonationBadge::Tenth));
}

#[test]
fn test_campaign_badges() {
    let fx = setup();
    let creator = Address::generate(&fx.env);

    for _ in 0..3 {
        create_campaign(&fx, &creator);
    }

    fx.charity.claim_campaign_badge(&creator, &CampaignBadge::First);
    fx.charity.claim_campaign_badge(&creator, &CampaignBadge::Third);
    assert_eq!(
        fx.charity.try_claim_campaign_badge(&creator, &CampaignBadge::Tenth),
        Err(Ok(CharityError::AccountError.into()))
    );

    assert!(fx.charity.has_campaign_badge(&creator, &CampaignBadge::First));
    assert!(fx.charity.has_campaign_badge(&creator, &CampaignBadge::Third));

    let badge = SoulboundContractClient::new(&fx.env, &fx.soulbounds.get(5).unwrap());
    assert_eq!(badge.balance(&creator), 1);
}

#[test]
fn test_badge_roster_is_exposed() {
    let fx = setup();

    let roster = fx.charity.get_soulbound_contracts();
    assert_eq!(roster.len(), 8);
    assert_eq!(roster, fx.soulbounds);
}

// ── Global pause ──────────────────────────────────────────────────────

#[test]
fn test_global_pause_blocks_mutations() {
    let fx = setup();
    let user = Address::generate(&fx.env);
    let id = create_campaign(&fx, &user);
    donate_native_n(&fx, &user, id, 1);

    fx.charity.pause(&fx.admin);
    assert!(fx.charity.is_paused());

    assert_eq!(
        fx.charity.try_create_campaign(
            &user,
            &String::from_str(&fx.env, "Test"),
            &String::from_str(&fx.env, "Test"),
            &String::from_str(&fx.env, "Test"),
            &100,
        ),
        Err(Ok(CharityError::ContractPaused.into()))
    );

    fx.native_sac.mint(&user, &100);
    assert_eq!(
        fx.charity.try_donate(
            &user,
            &id,
            &100,
            &String::from_str(&fx.env, "Alice"),
            &String::from_str(&fx.env, "hi"),
        ),
        Err(Ok(CharityError::ContractPaused.into()))
    );

    assert_eq!(
        fx.charity.try_withdraw_campaign(&fx.admin, &id),
        Err(Ok(CharityError::ContractPaused.into()))
    );

    assert_eq!(
        fx.charity.try_claim_donation_badge(&user, &DonationBadge::First),
        Err(Ok(CharityError::ContractPaused.into()))
    );

    fx.charity.unpause(&fx.admin);
    fx.charity.claim_donation_badge(&user, &DonationBadge::First);
}

#[test]
fn test_pause_requires_admin() {
    let fx = setup();
    let user = Address::generate(&fx.env);

    assert_eq!(
        fx.charity.try_pause(&user),
        Err(Ok(CharityError::Unauthorized.into()))
    );
}

// ── Initialization ────────────────────────────────────────────────────

#[test]
fn test_initialize_twice_rejected() {
    let fx = setup();

    assert_eq!(
        fx.charity
            .try_initialize(&fx.admin, &fx.native.address, &fx.soulbounds),
        Err(Ok(CharityError::AlreadyInitialized.into()))
    );
}

#[test]
fn test_initialize_requires_full_badge_roster() {
    let fx = setup();

    let fresh = CharityContractClient::new(&fx.env, &fx.env.register(CharityContract, ()));
    let mut short_roster = Vec::new(&fx.env);
    for _ in 0..7u32 {
        short_roster.push_back(Address::generate(&fx.env));
    }

    assert_eq!(
        fresh.try_initialize(&fx.admin, &fx.native.address, &short_roster),
        Err(Ok(CharityError::ValidationError.into()))
    );
}
