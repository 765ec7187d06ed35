use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the owner
    PermissionDenied = 10,

    // ============================================
    // SALE ERRORS (20-29)
    // ============================================
    /// Share sale is paused
    SaleInactive = 20,
    /// Share price unset, or a zero/negative price was supplied
    InvalidPrice = 21,
    /// Payment is not exactly price × count
    InsufficientPayment = 22,
    /// Withdrawal exceeds the recorded sale proceeds
    InsufficientProceeds = 23,

    // ============================================
    // DIVIDEND ERRORS (30-39)
    // ============================================
    /// Revenue deposited while no shares exist
    ZeroSupplyDeposit = 30,
    /// Nothing left to claim for this holder
    NoWithdrawableDividend = 31,

    // ============================================
    // AMOUNT/BALANCE ERRORS (40-49)
    // ============================================
    /// Amount or count must be positive
    InvalidAmount = 40,
    /// Holder doesn't have enough shares
    InsufficientBalance = 41,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 42,

    // ============================================
    // MAINTENANCE LOG ERRORS (50-59)
    // ============================================
    /// No maintenance record at this index
    IndexOutOfRange = 50,
}
