use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const TTL_INSTANCE: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const TTL_PERSISTENT: u32 = 90 * DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Paused,
}

#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Stats(Address),
    Banned(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CheckInStats {
    pub consecutive_days: u32,
    pub last_checkin: u64,
    pub total_checkins: u64,
    pub total_claimed: i128,
}
