#![no_std]

mod storage_types;


use storage_types::{
    AllowanceDataKey, AllowanceValue, DataKey, TokenMetadata, BALANCE_BUMP_AMOUNT,
    BALANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
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
}

#[contract]
pub struct AssetTokenContract;

#[contractimpl]
impl AssetTokenContract {
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        mint_amount: i128,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, TokenError::AlreadyInitialized);
        }
        admin.require_auth();
        if mint_amount <= 0 {
            panic_with_error!(&e, TokenError::InvalidAmount);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        e.storage().instance().set(&DataKey::MintAmount, &mint_amount);
        e.storage().instance().set(&DataKey::TotalSupply, &0i128);
        extend_instance(&e);
    }

    /// Open faucet: mints the configured amount to the caller.
    pub fn mint(e: Env, caller: Address) {
        caller.require_auth();
        extend_instance(&e);

        let amount: i128 = e.storage().instance().get(&DataKey::MintAmount).unwrap();
        let supply: i128 = e.storage().instance().get(&DataKey::TotalSupply).unwrap();
        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply + amount));
        receive_balance(&e, caller.clone(), amount);

        e.events()
            .publish((symbol_short!("mint"), caller.clone(), caller), amount);
    }

    /// Admin-only arbitrary mint.
    pub fn mint_to(e: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        require_admin(&e, &caller);
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        let supply: i128 = e.storage().instance().get(&DataKey::TotalSupply).unwrap();
        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply + amount));
        receive_balance(&e, to.clone(), amount);

        e.events()
            .publish((symbol_short!("mint"), caller, to), amount);
    }

    pub fn total_supply(e: Env) -> i128 {
        e.storage().instance().get(&DataKey::TotalSupply).unwrap()
    }

    pub fn mint_amount(e: Env) -> i128 {
        e.storage().instance().get(&DataKey::MintAmount).unwrap()
    }

    pub fn admin(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Admin).unwrap()
    }
}

#[contractimpl]
impl token::TokenInterface for AssetTokenContract {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        extend_instance(&e);
        read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        e.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    fn balance(e: Env, id: Address) -> i128 {
        extend_instance(&e);
        read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: MuxedAddress, amount: i128) {
        let to = to.address();
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        e.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        e.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        extend_instance(&e);

        spend_balance(&e, from.clone(), amount);
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

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        let supply: i128 = e.storage().instance().get(&DataKey::TotalSupply).unwrap();
        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply - amount));
        e.events().publish((symbol_short!("burn"), from), amount);
    }

    fn decimals(e: Env) -> u32 {
        read_metadata(&e).decimals
    }

    fn name(e: Env) -> String {
        read_metadata(&e).name
    }

    fn symbol(e: Env) -> String {
        read_metadata(&e).symbol
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_metadata(e: &Env) -> TokenMetadata {
    e.storage().instance().get(&DataKey::Metadata).unwrap()
}

fn require_admin(e: &Env, caller: &Address) {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    if caller != &admin {
        panic_with_error!(e, TokenError::Unauthorized);
    }
}

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::InvalidAmount);
    }
}

fn read_balance(e: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = e.storage().persistent().get::<DataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(e: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

fn receive_balance(e: &Env, addr: Address, amount: i128) {
    let balance = read_balance(e, addr.clone());
    write_balance(e, addr, balance + amount);
}

fn spend_balance(e: &Env, addr: Address, amount: i128) {
    let balance = read_balance(e, addr.clone());
    if balance < amount {
        panic_with_error!(e, TokenError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
}

fn read_allowance(e: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    if let Some(allowance) = e.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        if allowance.expiration_ledger < e.ledger().sequence() {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        } else {
            allowance
        }
    } else {
        AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        }
    }
}

fn write_allowance(e: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        panic_with_error!(e, TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    e.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - e.ledger().sequence();
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

fn spend_allowance(e: &Env, from: Address, spender: Address, amount: i128) {
    let allowance = read_allowance(e, from.clone(), spender.clone());
    if allowance.amount < amount {
        panic_with_error!(e, TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            e,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}
