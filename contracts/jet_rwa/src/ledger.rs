use crate::dividends::DividendAccumulator;
use crate::error::Error;
use crate::events::{MintEvent, TransferEvent};
use crate::storage::Storage;
use crate::types::Account;
use soroban_sdk::{Address, Env, Symbol};

/// Result of [`ShareLedger::prepare_mint`], applied by [`ShareLedger::commit_mint`].
pub(crate) struct StagedMint {
    account: Account,
    total_supply: i128,
    amount: i128,
}

pub struct ShareLedger;

impl ShareLedger {
    pub fn balance_of(env: &Env, holder: &Address) -> i128 {
        Storage::get_account(env, holder).balance
    }

    pub fn total_supply(env: &Env) -> i128 {
        Storage::get_total_supply(env)
    }

    /// Account and supply after minting `amount` to `account`.
    ///
    /// Applies the dividend correction before the balance moves. Nothing is
    /// written, so the caller can finish its own checks first.
    pub fn stage_mint(
        account: &Account,
        total_supply: i128,
        acc_per_share: i128,
        amount: i128,
    ) -> Result<(Account, i128), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut account = account.clone();
        DividendAccumulator::on_balance_change(&mut account, acc_per_share, amount)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        let total_supply = total_supply
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        Ok((account, total_supply))
    }

    /// Stage a mint of `amount` shares to `to` without writing anything.
    pub(crate) fn prepare_mint(env: &Env, to: &Address, amount: i128) -> Result<StagedMint, Error> {
        let acc_per_share = Storage::get_dividends(env).acc_per_share;
        let (account, total_supply) = Self::stage_mint(
            &Storage::get_account(env, to),
            Storage::get_total_supply(env),
            acc_per_share,
            amount,
        )?;

        Ok(StagedMint {
            account,
            total_supply,
            amount,
        })
    }

    /// Write a staged mint. Only reachable through the sale controller.
    pub(crate) fn commit_mint(env: &Env, to: &Address, staged: StagedMint) {
        Storage::set_account(env, to, &staged.account);
        Storage::set_total_supply(env, staged.total_supply);

        env.events().publish(
            (Symbol::new(env, "mint"), to.clone()),
            MintEvent {
                to: to.clone(),
                amount: staged.amount,
            },
        );
    }

    /// Move shares between holders.
    ///
    /// Both sides get the dividend correction, so entitlement accrued before the
    /// transfer stays with `from`.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: amount must be positive
    /// - `InsufficientBalance`: `from` holds fewer than `amount` shares
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        Storage::require_initialized(env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        from.require_auth();

        let acc_per_share = Storage::get_dividends(env).acc_per_share;

        let mut sender = Storage::get_account(env, from);
        if sender.balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from == to {
            env.events().publish(
                (Symbol::new(env, "transfer"), from.clone(), to.clone()),
                TransferEvent {
                    from: from.clone(),
                    to: to.clone(),
                    amount,
                },
            );
            return Ok(());
        }

        let mut receiver = Storage::get_account(env, to);

        DividendAccumulator::on_balance_change(&mut sender, acc_per_share, -amount)?;
        sender.balance -= amount;

        DividendAccumulator::on_balance_change(&mut receiver, acc_per_share, amount)?;
        receiver.balance = receiver
            .balance
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        Storage::set_account(env, from, &sender);
        Storage::set_account(env, to, &receiver);

        env.events().publish(
            (Symbol::new(env, "transfer"), from.clone(), to.clone()),
            TransferEvent {
                from: from.clone(),
                to: to.clone(),
                amount,
            },
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ACC_SCALE;

    #[test]
    fn test_stage_mint_updates_balance_supply_and_correction() {
        let acc_per_share = 3 * ACC_SCALE;
        let (account, supply) =
            ShareLedger::stage_mint(&Account::default(), 7, acc_per_share, 5).unwrap();

        assert_eq!(account.balance, 5);
        assert_eq!(account.correction, 5 * acc_per_share);
        assert_eq!(supply, 12);
    }

    #[test]
    fn test_stage_mint_rejects_non_positive() {
        assert_eq!(
            ShareLedger::stage_mint(&Account::default(), 0, 0, 0),
            Err(Error::InvalidAmount)
        );
    }

    #[test]
    fn test_stage_mint_supply_overflow() {
        assert_eq!(
            ShareLedger::stage_mint(&Account::default(), i128::MAX, 0, 1),
            Err(Error::ArithmeticOverflow)
        );
    }
}
