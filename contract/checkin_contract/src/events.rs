use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CheckedInEvent {
    pub claimer: Address,
    pub consecutive_days: u32,
    pub reward: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct PoolWithdrawnEvent {
    pub admin: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ClaimerBannedEvent {
    pub claimer: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct ClaimerUnbannedEvent {
    pub claimer: Address,
}

pub fn emit_checked_in(env: &Env, event: CheckedInEvent) {
    env.events()
        .publish((Symbol::new(env, "checked_in"),), event);
}

pub fn emit_pool_withdrawn(env: &Env, event: PoolWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "pool_withdrawn"),), event);
}

pub fn emit_claimer_banned(env: &Env, event: ClaimerBannedEvent) {
    env.events()
        .publish((Symbol::new(env, "claimer_banned"),), event);
}

pub fn emit_claimer_unbanned(env: &Env, event: ClaimerUnbannedEvent) {
    env.events()
        .publish((Symbol::new(env, "claimer_unbanned"),), event);
}
