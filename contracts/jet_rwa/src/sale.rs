use crate::access::AccessControl;
use crate::error::Error;
use crate::events::{
    ProceedsWithdrawnEvent, SaleStatusSetEvent, SharePriceSetEvent, SharesPurchasedEvent,
};
use crate::ledger::ShareLedger;
use crate::storage::Storage;
use crate::types::SaleConfig;
use soroban_sdk::{log, token, Address, Env, Symbol};

pub struct SaleController;

impl SaleController {
    /// Set the price of one share (owner only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `PermissionDenied`: Caller is not the owner
    /// - `InvalidPrice`: price must be positive
    pub fn set_share_price(env: &Env, caller: &Address, price: i128) -> Result<(), Error> {
        AccessControl::require_owner(env, caller)?;

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let mut sale = Storage::get_sale(env);
        sale.price = price;
        Storage::set_sale(env, &sale);

        env.events().publish(
            (Symbol::new(env, "share_price_set"),),
            SharePriceSetEvent { price },
        );

        Ok(())
    }

    /// Open or pause the share sale (owner only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `PermissionDenied`: Caller is not the owner
    pub fn set_sale_status(env: &Env, caller: &Address, active: bool) -> Result<(), Error> {
        AccessControl::require_owner(env, caller)?;

        let mut sale = Storage::get_sale(env);
        sale.active = active;
        Storage::set_sale(env, &sale);

        env.events().publish(
            (Symbol::new(env, "sale_status_set"),),
            SaleStatusSetEvent { active },
        );

        Ok(())
    }

    pub fn sale(env: &Env) -> SaleConfig {
        Storage::get_sale(env)
    }

    /// Exact price of `count` shares
    pub fn quote(price: i128, count: i128) -> Result<i128, Error> {
        price.checked_mul(count).ok_or(Error::ArithmeticOverflow)
    }

    /// Buy `count` new shares for exactly `price * count` of the payment token.
    ///
    /// The payment becomes sale proceeds; it is not distributed as revenue.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: count must be positive
    /// - `SaleInactive`: Sale is paused
    /// - `InvalidPrice`: Share price not set
    /// - `InsufficientPayment`: payment differs from price × count
    /// - `ArithmeticOverflow`: Cost, balance or supply would overflow
    pub fn buy_shares(env: &Env, buyer: &Address, count: i128, payment: i128) -> Result<(), Error> {
        let payment_token = Storage::get_payment_token(env)?;

        if count <= 0 {
            return Err(Error::InvalidAmount);
        }

        buyer.require_auth();

        let mut sale = Storage::get_sale(env);
        if !sale.active {
            return Err(Error::SaleInactive);
        }
        if sale.price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let cost = Self::quote(sale.price, count)?;
        if payment != cost {
            log!(env, "payment mismatch", payment, cost);
            return Err(Error::InsufficientPayment);
        }

        let staged = ShareLedger::prepare_mint(env, buyer, count)?;
        sale.proceeds = sale
            .proceeds
            .checked_add(payment)
            .ok_or(Error::ArithmeticOverflow)?;

        token::Client::new(env, &payment_token).transfer(
            buyer,
            &env.current_contract_address(),
            &payment,
        );

        ShareLedger::commit_mint(env, buyer, staged);
        Storage::set_sale(env, &sale);

        env.events().publish(
            (Symbol::new(env, "shares_purchased"), buyer.clone()),
            SharesPurchasedEvent {
                buyer: buyer.clone(),
                count,
                price: sale.price,
                payment,
            },
        );

        Ok(())
    }

    /// Send accumulated sale proceeds to `to` (owner only).
    ///
    /// Limited to recorded proceeds, so deposited revenue is never touched.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `PermissionDenied`: Caller is not the owner
    /// - `InvalidAmount`: amount must be positive
    /// - `InsufficientProceeds`: amount exceeds recorded proceeds
    pub fn withdraw_proceeds(
        env: &Env,
        caller: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        AccessControl::require_owner(env, caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut sale = Storage::get_sale(env);
        if amount > sale.proceeds {
            return Err(Error::InsufficientProceeds);
        }

        sale.proceeds -= amount;
        Storage::set_sale(env, &sale);

        let payment_token = Storage::get_payment_token(env)?;
        token::Client::new(env, &payment_token).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );

        env.events().publish(
            (Symbol::new(env, "proceeds_withdrawn"), to.clone()),
            ProceedsWithdrawnEvent {
                to: to.clone(),
                amount,
            },
        );

        Ok(())
    }
}
