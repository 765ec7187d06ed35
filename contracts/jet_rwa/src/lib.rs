#![no_std]

mod access;
mod dividends;
mod error;
mod events;
mod ledger;
mod maintenance;
mod sale;
mod storage;
mod types;

pub use error::Error;
pub use types::{
    AssetInfo, DividendTotals, MaintenanceRecord, SaleConfig, ACC_SCALE, SHARE_DECIMALS,
};

use access::AccessControl;
use dividends::DividendAccumulator;
use ledger::ShareLedger;
use maintenance::MaintenanceLog;
use sale::SaleController;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

/// Fractional ownership of one aircraft with pull-payment revenue sharing.
#[contract]
pub struct JetRwa;

#[contractimpl]
impl JetRwa {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the share ledger for one aircraft
    ///
    /// `payment_token` is the asset used for share purchases, revenue and payouts.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        name: String,
        symbol: String,
        tail_number: String,
        manufacturer: String,
    ) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        Storage::set_owner(&env, &owner);
        Storage::set_payment_token(&env, &payment_token);
        Storage::set_asset_info(
            &env,
            &AssetInfo {
                name,
                symbol,
                tail_number,
                manufacturer,
            },
        );
        Storage::set_total_supply(&env, 0);
        Storage::set_dividends(&env, &DividendTotals::default());
        Storage::set_sale(&env, &SaleConfig::default());
        Storage::set_maintenance_count(&env, 0);

        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        AccessControl::owner(&env)
    }

    /// Hand the owner role to another address (owner only)
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        AccessControl::transfer_ownership(&env, &caller, &new_owner)
    }

    // ============================================
    // ASSET METADATA
    // ============================================

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Storage::get_asset_info(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Storage::get_asset_info(&env)?.symbol)
    }

    pub fn decimals(_env: Env) -> u32 {
        SHARE_DECIMALS
    }

    pub fn tail_number(env: Env) -> Result<String, Error> {
        Ok(Storage::get_asset_info(&env)?.tail_number)
    }

    pub fn manufacturer(env: Env) -> Result<String, Error> {
        Ok(Storage::get_asset_info(&env)?.manufacturer)
    }

    // ============================================
    // SHARE LEDGER
    // ============================================

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        ShareLedger::balance_of(&env, &holder)
    }

    pub fn total_supply(env: Env) -> i128 {
        ShareLedger::total_supply(&env)
    }

    /// Transfer shares; accrued dividends stay with the sender
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        ShareLedger::transfer(&env, &from, &to, amount)
    }

    // ============================================
    // SHARE SALE
    // ============================================

    pub fn set_share_price(env: Env, caller: Address, price: i128) -> Result<(), Error> {
        SaleController::set_share_price(&env, &caller, price)
    }

    pub fn set_sale_status(env: Env, caller: Address, active: bool) -> Result<(), Error> {
        SaleController::set_sale_status(&env, &caller, active)
    }

    pub fn share_price(env: Env) -> i128 {
        SaleController::sale(&env).price
    }

    pub fn sale_active(env: Env) -> bool {
        SaleController::sale(&env).active
    }

    /// Buyer payments not yet withdrawn by the owner
    pub fn sale_proceeds(env: Env) -> i128 {
        SaleController::sale(&env).proceeds
    }

    /// Buy `count` shares, paying exactly `share_price * count`
    pub fn buy_shares(env: Env, buyer: Address, count: i128, payment: i128) -> Result<(), Error> {
        SaleController::buy_shares(&env, &buyer, count, payment)
    }

    pub fn withdraw_sale_proceeds(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        SaleController::withdraw_proceeds(&env, &caller, &to, amount)
    }

    // ============================================
    // REVENUE & DIVIDENDS
    // ============================================

    /// Distribute `amount` of revenue over current holders
    pub fn deposit_revenue(env: Env, depositor: Address, amount: i128) -> Result<(), Error> {
        DividendAccumulator::deposit(&env, &depositor, amount)
    }

    pub fn withdrawable_dividend_of(env: Env, holder: Address) -> Result<i128, Error> {
        DividendAccumulator::withdrawable_dividend_of(&env, &holder)
    }

    pub fn accumulative_dividend_of(env: Env, holder: Address) -> Result<i128, Error> {
        DividendAccumulator::accumulative_dividend_of(&env, &holder)
    }

    pub fn withdrawn_dividend_of(env: Env, holder: Address) -> i128 {
        DividendAccumulator::withdrawn_dividend_of(&env, &holder)
    }

    pub fn dividend_totals(env: Env) -> DividendTotals {
        Storage::get_dividends(&env)
    }

    /// Pay the holder everything it can withdraw; returns the amount paid
    pub fn claim_dividends(env: Env, holder: Address) -> Result<i128, Error> {
        DividendAccumulator::claim(&env, &holder)
    }

    // ============================================
    // MAINTENANCE LOG
    // ============================================

    /// Append a maintenance record (owner only); returns its sequence number
    pub fn record_maintenance(
        env: Env,
        caller: Address,
        description: String,
        cost: i128,
        provider: String,
    ) -> Result<u32, Error> {
        MaintenanceLog::record(&env, &caller, description, cost, provider)
    }

    pub fn get_maintenance_count(env: Env) -> u32 {
        MaintenanceLog::count(&env)
    }

    pub fn maintenance_history(env: Env, index: u32) -> Result<MaintenanceRecord, Error> {
        MaintenanceLog::get(&env, index)
    }
}
