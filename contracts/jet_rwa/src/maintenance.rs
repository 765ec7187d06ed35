use crate::access::AccessControl;
use crate::error::Error;
use crate::events::MaintenanceRecordedEvent;
use crate::storage::Storage;
use crate::types::MaintenanceRecord;
use soroban_sdk::{Address, Env, String, Symbol};

/// Append-only maintenance history. Records are never edited or removed.
pub struct MaintenanceLog;

impl MaintenanceLog {
    /// Append a record stamped with the ledger time (owner only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `PermissionDenied`: Caller is not the owner
    /// - `InvalidAmount`: cost must not be negative
    /// - `ArithmeticOverflow`: Log is full
    pub fn record(
        env: &Env,
        caller: &Address,
        description: String,
        cost: i128,
        provider: String,
    ) -> Result<u32, Error> {
        AccessControl::require_owner(env, caller)?;

        if cost < 0 {
            return Err(Error::InvalidAmount);
        }

        let sequence = Storage::get_maintenance_count(env);
        let next = sequence.checked_add(1).ok_or(Error::ArithmeticOverflow)?;

        let record = MaintenanceRecord {
            description: description.clone(),
            cost,
            provider: provider.clone(),
            timestamp: env.ledger().timestamp(),
            sequence,
        };

        Storage::set_maintenance(env, &record);
        Storage::set_maintenance_count(env, next);

        env.events().publish(
            (Symbol::new(env, "maintenance_recorded"), sequence),
            MaintenanceRecordedEvent {
                sequence,
                description,
                cost,
                provider,
            },
        );

        Ok(sequence)
    }

    pub fn count(env: &Env) -> u32 {
        Storage::get_maintenance_count(env)
    }

    /// # Errors
    /// - `IndexOutOfRange`: index >= count
    pub fn get(env: &Env, index: u32) -> Result<MaintenanceRecord, Error> {
        if index >= Storage::get_maintenance_count(env) {
            return Err(Error::IndexOutOfRange);
        }

        Storage::get_maintenance(env, index).ok_or(Error::IndexOutOfRange)
    }
}
