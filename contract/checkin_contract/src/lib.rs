#![no_std]

mod events;
mod rewards;
mod storage_types;


use rewards::{day_number, reward_for_streak};
use storage_types::{CheckInStats, DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CheckInError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    AccountError = 3,
    ContractPaused = 4,
    InsufficientBalance = 5,
}

#[contract]
pub struct CheckInContract;

#[contractimpl]
impl CheckInContract {
    /// `token` is the reward currency; the pool is whatever balance this
    /// contract address holds in it.
    pub fn initialize(e: Env, admin: Address, token: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, CheckInError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::Paused, &false);
        extend_instance(&e);
    }

    /// Daily check-in. One call per UTC day; a gap of exactly one day
    /// continues the streak, anything longer restarts it at 1.
    pub fn check_in(e: Env, claimer: Address) -> i128 {
        claimer.require_auth();

        if is_banned(&e, &claimer) {
            panic_with_error!(&e, CheckInError::AccountError);
        }
        check_not_paused(&e);

        let now = e.ledger().timestamp();
        let today = day_number(now);

        let key = PersistentKey::Stats(claimer.clone());
        let mut stats: CheckInStats = e.storage().persistent().get(&key).unwrap_or(CheckInStats {
            consecutive_days: 0,
            last_checkin: 0,
            total_checkins: 0,
            total_claimed: 0,
        });

        let streak = if stats.total_checkins == 0 {
            1
        } else {
            let last_day = day_number(stats.last_checkin);
            if today == last_day {
                panic_with_error!(&e, CheckInError::AccountError);
            }
            if today - last_day == 1 {
                stats.consecutive_days + 1
            } else {
                1
            }
        };

        let reward = reward_for_streak(streak);
        let token_addr: Address = e.storage().instance().get(&DataKey::Token).unwrap();
        let client = token::Client::new(&e, &token_addr);

        if client.balance(&e.current_contract_address()) < reward {
            panic_with_error!(&e, CheckInError::InsufficientBalance);
        }
        client.transfer(&e.current_contract_address(), &claimer, &reward);

        stats.consecutive_days = streak;
        stats.last_checkin = now;
        stats.total_checkins += 1;
        stats.total_claimed += reward;
        e.storage().persistent().set(&key, &stats);
        e.storage()
            .persistent()
            .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
        extend_instance(&e);

        events::emit_checked_in(
            &e,
            events::CheckedInEvent {
                claimer,
                consecutive_days: streak,
                reward,
            },
        );

        reward
    }

    /// Admin drain of the reward pool.
    pub fn withdraw(e: Env, caller: Address, amount: i128) {
        caller.require_auth();
        require_admin(&e, &caller);

        let token_addr: Address = e.storage().instance().get(&DataKey::Token).unwrap();
        let client = token::Client::new(&e, &token_addr);

        if client.balance(&e.current_contract_address()) < amount {
            panic_with_error!(&e, CheckInError::InsufficientBalance);
        }
        client.transfer(&e.current_contract_address(), &caller, &amount);

        events::emit_pool_withdrawn(
            &e,
            events::PoolWithdrawnEvent {
                admin: caller,
                amount,
            },
        );
    }

    pub fn ban_claimer(e: Env, caller: Address, claimer: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        let key = PersistentKey::Banned(claimer.clone());
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);

        events::emit_claimer_banned(&e, events::ClaimerBannedEvent { claimer });
    }

    pub fn unban_claimer(e: Env, caller: Address, claimer: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        e.storage()
            .persistent()
            .remove(&PersistentKey::Banned(claimer.clone()));

        events::emit_claimer_unbanned(&e, events::ClaimerUnbannedEvent { claimer });
    }

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

    pub fn get_checkin_stats(e: Env, claimer: Address) -> Option<CheckInStats> {
        e.storage().persistent().get(&PersistentKey::Stats(claimer))
    }

    pub fn pool_balance(e: Env) -> i128 {
        let token_addr: Address = e.storage().instance().get(&DataKey::Token).unwrap();
        token::Client::new(&e, &token_addr).balance(&e.current_contract_address())
    }

    pub fn is_banned(e: Env, claimer: Address) -> bool {
        is_banned(&e, &claimer)
    }

    pub fn is_paused(e: Env) -> bool {
        e.storage().instance().get(&DataKey::Paused).unwrap()
    }

    pub fn admin(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Admin).unwrap()
    }
}

fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn check_not_paused(e: &Env) {
    let paused: bool = e.storage().instance().get(&DataKey::Paused).unwrap();
    if paused {
        panic_with_error!(e, CheckInError::ContractPaused);
    }
}

fn require_admin(e: &Env, caller: &Address) {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    if caller != &admin {
        panic_with_error!(e, CheckInError::Unauthorized);
    }
}

fn is_banned(e: &Env, claimer: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&PersistentKey::Banned(claimer.clone()))
}
