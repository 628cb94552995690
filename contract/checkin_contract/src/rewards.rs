pub const SECONDS_PER_DAY: u64 = 86400;
pub const REWARD_CYCLE_DAYS: u32 = 7;

/// Daily payout per streak day, in stroops (7 decimals):
/// 1.25, 1.5, 2, 3, 5, 7, 10 tokens. The cycle restarts on day 8.
pub const DAILY_REWARDS: [i128; 7] = [
    12_500_000,
    15_000_000,
    20_000_000,
    30_000_000,
    50_000_000,
    70_000_000,
    100_000_000,
];

/// UTC day index of a ledger timestamp. Streak decisions compare day
/// indices, never raw second deltas.
pub fn day_number(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

pub fn reward_for_streak(streak: u32) -> i128 {
    DAILY_REWARDS[((streak - 1) % REWARD_CYCLE_DAYS) as usize]
}
