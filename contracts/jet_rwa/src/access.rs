use crate::error::Error;
use crate::events::OwnershipTransferredEvent;
use crate::storage::Storage;
use soroban_sdk::{log, Address, Env, Symbol};

pub struct AccessControl;

impl AccessControl {
    /// Authenticate `caller` and check it is the stored owner.
    ///
    /// Runs before any write, so a rejected caller leaves state untouched.
    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let owner = Storage::get_owner(env)?;
        if *caller != owner {
            log!(env, "permission denied", caller.clone());
            return Err(Error::PermissionDenied);
        }
        Ok(())
    }

    pub fn owner(env: &Env) -> Result<Address, Error> {
        Storage::get_owner(env)
    }

    /// Hand the owner role to `new_owner` (owner only)
    pub fn transfer_ownership(
        env: &Env,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), Error> {
        Self::require_owner(env, caller)?;

        Storage::set_owner(env, new_owner);

        env.events().publish(
            (Symbol::new(env, "ownership_transferred"),),
            OwnershipTransferredEvent {
                previous_owner: caller.clone(),
                new_owner: new_owner.clone(),
            },
        );

        Ok(())
    }
}
