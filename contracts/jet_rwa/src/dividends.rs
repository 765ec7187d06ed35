use crate::error::Error;
use crate::events::{DividendClaimedEvent, RevenueDepositedEvent};
use crate::storage::Storage;
use crate::types::{Account, DividendTotals, ACC_SCALE};
use soroban_sdk::{log, token, Address, Env, Symbol};

/// Pull-payment dividend accounting in O(1) per operation.
///
/// A deposit raises `acc_per_share` instead of crediting each holder. A holder's
/// lifetime entitlement is then
///
/// ```text
/// accumulative = floor((balance * acc_per_share - correction) / ACC_SCALE)
/// withdrawable = max(accumulative - withdrawn, 0)
/// ```
///
/// `correction` is kept in ACC_SCALE units and absorbs `delta * acc_per_share`
/// whenever a balance moves by `delta`. A balance change is therefore neutral for
/// every past deposit: new shares earn nothing already accrued, and shares that
/// leave an account keep what they earned there.
///
/// Rounding always floors. The remainder of `amount * ACC_SCALE / total_supply`
/// and the per-holder floor stay in the contract as dust and are never paid out.
pub struct DividendAccumulator;

impl DividendAccumulator {
    // ============================================
    // ACCUMULATOR MATH
    // ============================================

    /// Totals after distributing `amount` over `total_supply` shares
    pub fn accrue(
        totals: &DividendTotals,
        total_supply: i128,
        amount: i128,
    ) -> Result<DividendTotals, Error> {
        if total_supply <= 0 {
            return Err(Error::ZeroSupplyDeposit);
        }

        let increment = amount
            .checked_mul(ACC_SCALE)
            .and_then(|v| v.checked_div(total_supply))
            .ok_or(Error::ArithmeticOverflow)?;

        Ok(DividendTotals {
            acc_per_share: totals
                .acc_per_share
                .checked_add(increment)
                .ok_or(Error::ArithmeticOverflow)?,
            total_deposited: totals
                .total_deposited
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?,
            total_withdrawn: totals.total_withdrawn,
        })
    }

    /// Everything `account` has earned so far, claimed or not
    pub fn accumulative(account: &Account, acc_per_share: i128) -> Result<i128, Error> {
        let magnified = account
            .balance
            .checked_mul(acc_per_share)
            .and_then(|v| v.checked_sub(account.correction))
            .ok_or(Error::ArithmeticOverflow)?;

        Ok((magnified / ACC_SCALE).max(0))
    }

    pub fn withdrawable(account: &Account, acc_per_share: i128) -> Result<i128, Error> {
        let accumulative = Self::accumulative(account, acc_per_share)?;
        let withdrawable = accumulative
            .checked_sub(account.withdrawn)
            .ok_or(Error::ArithmeticOverflow)?;

        Ok(withdrawable.max(0))
    }

    /// Pre-mutation hook: call before `account.balance` moves by `delta`.
    ///
    /// Positive `delta` for mints and incoming transfers, negative for outgoing.
    pub fn on_balance_change(
        account: &mut Account,
        acc_per_share: i128,
        delta: i128,
    ) -> Result<(), Error> {
        let offset = delta
            .checked_mul(acc_per_share)
            .ok_or(Error::ArithmeticOverflow)?;
        account.correction = account
            .correction
            .checked_add(offset)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(())
    }

    // ============================================
    // CONTRACT OPERATIONS
    // ============================================

    /// Take `amount` of the payment token from `depositor` and make it claimable
    /// by current holders pro rata.
    ///
    /// # Errors
    /// - `InvalidAmount`: amount must be positive
    /// - `NotInitialized`: Contract not initialized
    /// - `ZeroSupplyDeposit`: No shares exist yet
    /// - `ArithmeticOverflow`: Accumulator would overflow
    pub fn deposit(env: &Env, depositor: &Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let payment_token = Storage::get_payment_token(env)?;
        depositor.require_auth();

        let total_supply = Storage::get_total_supply(env);
        let totals = Self::accrue(&Storage::get_dividends(env), total_supply, amount)?;

        token::Client::new(env, &payment_token).transfer(
            depositor,
            &env.current_contract_address(),
            &amount,
        );

        Storage::set_dividends(env, &totals);

        log!(env, "revenue deposited", amount, totals.acc_per_share);

        env.events().publish(
            (Symbol::new(env, "revenue_deposited"), depositor.clone()),
            RevenueDepositedEvent {
                depositor: depositor.clone(),
                amount,
                acc_per_share: totals.acc_per_share,
            },
        );

        Ok(())
    }

    pub fn withdrawable_dividend_of(env: &Env, holder: &Address) -> Result<i128, Error> {
        let acc_per_share = Storage::get_dividends(env).acc_per_share;
        Self::withdrawable(&Storage::get_account(env, holder), acc_per_share)
    }

    pub fn accumulative_dividend_of(env: &Env, holder: &Address) -> Result<i128, Error> {
        let acc_per_share = Storage::get_dividends(env).acc_per_share;
        Self::accumulative(&Storage::get_account(env, holder), acc_per_share)
    }

    pub fn withdrawn_dividend_of(env: &Env, holder: &Address) -> i128 {
        Storage::get_account(env, holder).withdrawn
    }

    /// Pay out everything `holder` can withdraw.
    ///
    /// The holder's `withdrawn` and the global `total_withdrawn` are committed
    /// before the token transfer, so a re-entrant claim sees zero.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NoWithdrawableDividend`: Nothing to claim
    pub fn claim(env: &Env, holder: &Address) -> Result<i128, Error> {
        let payment_token = Storage::get_payment_token(env)?;
        holder.require_auth();

        let mut account = Storage::get_account(env, holder);
        let mut totals = Storage::get_dividends(env);

        let amount = Self::withdrawable(&account, totals.acc_per_share)?;
        if amount == 0 {
            return Err(Error::NoWithdrawableDividend);
        }

        account.withdrawn = account
            .withdrawn
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        totals.total_withdrawn = totals
            .total_withdrawn
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        Storage::set_account(env, holder, &account);
        Storage::set_dividends(env, &totals);

        token::Client::new(env, &payment_token).transfer(
            &env.current_contract_address(),
            holder,
            &amount,
        );

        log!(env, "dividend claimed", amount);

        env.events().publish(
            (Symbol::new(env, "dividend_claimed"), holder.clone()),
            DividendClaimedEvent {
                holder: holder.clone(),
                amount,
            },
        );

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: i128 = 10_000_000;

    fn holder(balance: i128) -> Account {
        Account {
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn test_sole_holder_receives_whole_deposit() {
        let totals = DividendAccumulator::accrue(&DividendTotals::default(), 10, UNIT).unwrap();

        assert_eq!(totals.acc_per_share, UNIT * ACC_SCALE / 10);
        assert_eq!(totals.total_deposited, UNIT);
        assert_eq!(
            DividendAccumulator::withdrawable(&holder(10), totals.acc_per_share).unwrap(),
            UNIT
        );
    }

    #[test]
    fn test_accrue_rejects_empty_supply() {
        let result = DividendAccumulator::accrue(&DividendTotals::default(), 0, UNIT);
        assert_eq!(result, Err(Error::ZeroSupplyDeposit));
    }

    #[test]
    fn test_accrue_overflow() {
        let result = DividendAccumulator::accrue(&DividendTotals::default(), 1, i128::MAX / 2);
        assert_eq!(result, Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn test_mint_after_deposit_earns_nothing_retroactively() {
        let totals = DividendAccumulator::accrue(&DividendTotals::default(), 10, UNIT).unwrap();
        let acc = totals.acc_per_share;

        let mut late = Account::default();
        DividendAccumulator::on_balance_change(&mut late, acc, 10).unwrap();
        late.balance = 10;

        assert_eq!(DividendAccumulator::withdrawable(&late, acc).unwrap(), 0);

        // Next deposit is split over 20 shares
        let totals = DividendAccumulator::accrue(&totals, 20, UNIT).unwrap();
        assert_eq!(
            DividendAccumulator::withdrawable(&late, totals.acc_per_share).unwrap(),
            UNIT / 2
        );
        assert_eq!(
            DividendAccumulator::withdrawable(&holder(10), totals.acc_per_share).unwrap(),
            UNIT + UNIT / 2
        );
    }

    #[test]
    fn test_outgoing_shares_keep_accrued_entitlement() {
        let totals = DividendAccumulator::accrue(&DividendTotals::default(), 4, UNIT).unwrap();
        let acc = totals.acc_per_share;

        let mut seller = holder(4);
        DividendAccumulator::on_balance_change(&mut seller, acc, -3).unwrap();
        seller.balance = 1;

        assert_eq!(DividendAccumulator::withdrawable(&seller, acc).unwrap(), UNIT);
    }

    #[test]
    fn test_withdrawn_reduces_withdrawable() {
        let totals = DividendAccumulator::accrue(&DividendTotals::default(), 2, UNIT).unwrap();
        let mut account = holder(1);
        account.withdrawn = UNIT / 2;

        assert_eq!(
            DividendAccumulator::accumulative(&account, totals.acc_per_share).unwrap(),
            UNIT / 2
        );
        assert_eq!(
            DividendAccumulator::withdrawable(&account, totals.acc_per_share).unwrap(),
            0
        );
    }

    #[test]
    fn test_rounding_floors_and_leaves_dust() {
        // 10 units over 3 shares: each share earns 3, 1 unit is dust
        let totals = DividendAccumulator::accrue(&DividendTotals::default(), 3, 10).unwrap();

        let each = DividendAccumulator::withdrawable(&holder(1), totals.acc_per_share).unwrap();
        assert_eq!(each, 3);

        let dust = totals.total_deposited - 3 * each;
        assert_eq!(dust, 1);
        assert!(dust < 3);
    }
}
