#![no_std]

mod balance;
mod storage_types;


use storage_types::{
    DataKey, DECIMALS, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_SUPPLY,
};

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token,
    token::TokenInterface, Address, Env, MuxedAddress, String,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidAmount = 3,
    InvalidExpiration = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    SupplyCapExceeded = 7,
}

#[contract]
pub struct RewardTokenContract;

#[contractimpl]
impl RewardTokenContract {
    /// Issue the entire max supply to the admin and record the minter role.
    pub fn initialize(e: Env, admin: Address, minter: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, TokenError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Minter, &minter);
        e.storage().instance().set(&DataKey::TotalSupply, &MAX_SUPPLY);
        balance::receive_balance(&e, admin.clone(), MAX_SUPPLY);
        extend_instance(&e);

        e.events()
            .publish((symbol_short!("mint"), admin.clone(), admin), MAX_SUPPLY);
    }

    /// Privileged mint. The supply cap still binds, so this only succeeds
    /// for headroom created by burns.
    pub fn mint_to(e: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        require_minter(&e, &caller);
        check_nonnegative_amount(&e, amount);

        let supply: i128 = e.storage().instance().get(&DataKey::TotalSupply).unwrap();
        if supply + amount > MAX_SUPPLY {
            panic_with_error!(&e, TokenError::SupplyCapExceeded);
        }

        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply + amount));
        balance::receive_balance(&e, to.clone(), amount);
        extend_instance(&e);

        e.events()
            .publish((symbol_short!("mint"), caller, to), amount);
    }

    pub fn total_supply(e: Env) -> i128 {
        e.storage().instance().get(&DataKey::TotalSupply).unwrap()
    }

    pub fn max_supply(_e: Env) -> i128 {
        MAX_SUPPLY
    }

    pub fn admin(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Admin).unwrap()
    }

    pub fn minter(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Minter).unwrap()
    }
}

#[contractimpl]
impl token::TokenInterface for RewardTokenContract {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        extend_instance(&e);
        balance::read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        balance::write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        e.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    fn balance(e: Env, id: Address) -> i128 {
        extend_instance(&e);
        balance::read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: MuxedAddress, amount: i128) {
        let to = to.address();
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        balance::spend_balance(&e, from.clone(), amount);
        balance::receive_balance(&e, to.clone(), amount);
        e.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        balance::spend_allowance(&e, from.clone(), spender, amount);
        balance::spend_balance(&e, from.clone(), amount);
        balance::receive_balance(&e, to.clone(), amount);
        e.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        balance::spend_balance(&e, from.clone(), amount);
        let supply: i128 = e.storage().instance().get(&DataKey::TotalSupply).unwrap();
        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply - amount));
        e.events().publish((symbol_short!("burn"), from), amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        balance::spend_allowance(&e, from.clone(), spender, amount);
        balance::spend_balance(&e, from.clone(), amount);
        let supply: i128 = e.storage().instance().get(&DataKey::TotalSupply).unwrap();
        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply - amount));
        e.events().publish((symbol_short!("burn"), from), amount);
    }

    fn decimals(_e: Env) -> u32 {
        DECIMALS
    }

    fn name(e: Env) -> String {
        String::from_str(&e, "Kindly")
    }

    fn symbol(e: Env) -> String {
        String::from_str(&e, "KND")
    }
}

fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn require_minter(e: &Env, caller: &Address) {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    let minter: Address = e.storage().instance().get(&DataKey::Minter).unwrap();
    if caller != &admin && caller != &minter {
        panic_with_error!(e, TokenError::Unauthorized);
    }
}

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::InvalidAmount);
    }
}
