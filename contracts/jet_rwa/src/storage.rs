use crate::error::Error;
use crate::types::{
    Account, AssetInfo, DataKey, DividendTotals, MaintenanceRecord, SaleConfig,
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{Address, Env};

pub struct Storage;

impl Storage {
    // TTL
    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn bump_persistent(env: &Env, key: &DataKey) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    // Lifecycle
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Owner)
    }

    pub fn require_initialized(env: &Env) -> Result<(), Error> {
        if !Self::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    // Owner
    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
        Self::bump_instance(env);
    }

    // Payment token
    pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_payment_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::PaymentToken, token);
        Self::bump_instance(env);
    }

    // Asset metadata
    pub fn get_asset_info(env: &Env) -> Result<AssetInfo, Error> {
        env.storage()
            .instance()
            .get(&DataKey::AssetInfo)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_asset_info(env: &Env, info: &AssetInfo) {
        env.storage().instance().set(&DataKey::AssetInfo, info);
        Self::bump_instance(env);
    }

    // Supply
    pub fn get_total_supply(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(env: &Env, supply: i128) {
        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        Self::bump_instance(env);
    }

    // Dividends
    pub fn get_dividends(env: &Env) -> DividendTotals {
        env.storage()
            .instance()
            .get(&DataKey::Dividends)
            .unwrap_or_default()
    }

    pub fn set_dividends(env: &Env, totals: &DividendTotals) {
        env.storage().instance().set(&DataKey::Dividends, totals);
        Self::bump_instance(env);
    }

    // Sale
    pub fn get_sale(env: &Env) -> SaleConfig {
        env.storage()
            .instance()
            .get(&DataKey::Sale)
            .unwrap_or_default()
    }

    pub fn set_sale(env: &Env, sale: &SaleConfig) {
        env.storage().instance().set(&DataKey::Sale, sale);
        Self::bump_instance(env);
    }

    // Accounts
    pub fn get_account(env: &Env, holder: &Address) -> Account {
        env.storage()
            .persistent()
            .get(&DataKey::Account(holder.clone()))
            .unwrap_or_default()
    }

    pub fn set_account(env: &Env, holder: &Address, account: &Account) {
        let key = DataKey::Account(holder.clone());
        env.storage().persistent().set(&key, account);
        Self::bump_persistent(env, &key);
    }

    // Maintenance log
    pub fn get_maintenance_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::MaintenanceCount)
            .unwrap_or(0)
    }

    pub fn set_maintenance_count(env: &Env, count: u32) {
        env.storage()
            .instance()
            .set(&DataKey::MaintenanceCount, &count);
        Self::bump_instance(env);
    }

    pub fn get_maintenance(env: &Env, sequence: u32) -> Option<MaintenanceRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Maintenance(sequence))
    }

    pub fn set_maintenance(env: &Env, record: &MaintenanceRecord) {
        let key = DataKey::Maintenance(record.sequence);
        env.storage().persistent().set(&key, record);
        Self::bump_persistent(env, &key);
    }
}
