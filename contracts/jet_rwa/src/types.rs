use soroban_sdk::{contracttype, Address, String};

/// Fixed-point scale of the dividend accumulator (1e18).
///
/// `acc_per_share` grows by `floor(amount * ACC_SCALE / total_supply)` on each
/// deposit. The truncated remainder is never distributed.
pub const ACC_SCALE: i128 = 1_000_000_000_000_000_000;

/// Shares are indivisible.
pub const SHARE_DECIMALS: u32 = 0;

// Storage TTLs, in ledgers (~5s each)
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

/// Static description of the tokenized aircraft, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetInfo {
    pub name: String,
    pub symbol: String,
    pub tail_number: String,
    pub manufacturer: String,
}

/// Per-holder ledger entry, created on the first balance change.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Account {
    /// Shares owned
    pub balance: i128,
    /// Cumulative dividends already paid out
    pub withdrawn: i128,
    /// Offset in ACC_SCALE units that cancels entitlement from
    /// deposits made before a balance change
    pub correction: i128,
}

/// Global dividend accounting.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DividendTotals {
    /// Cumulative revenue per share, scaled by ACC_SCALE. Never decreases.
    pub acc_per_share: i128,
    pub total_deposited: i128,
    pub total_withdrawn: i128,
}

/// Sale controller state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SaleConfig {
    /// Price of one share in payment-token units (0 = unset)
    pub price: i128,
    pub active: bool,
    /// Buyer payments not yet withdrawn by the owner. Kept apart from revenue.
    pub proceeds: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaintenanceRecord {
    pub description: String,
    pub cost: i128,
    pub provider: String,
    pub timestamp: u64,
    pub sequence: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PaymentToken,
    AssetInfo,
    TotalSupply,
    Dividends,
    Sale,
    MaintenanceCount,
    Account(Address), // holder -> Account
    Maintenance(u32), // sequence -> MaintenanceRecord
}
