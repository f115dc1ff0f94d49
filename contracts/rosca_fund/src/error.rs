use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // FUND / ENROLLMENT ERRORS (20-29)
    // ============================================
    /// No fund registered under this id
    FundNotFound = 20,
    /// total_terms must be positive and pot_amount a positive whole multiple of it
    InvalidConfig = 21,
    /// Fund is no longer enrolling members
    EnrollmentClosed = 22,
    /// Caller is already on the member roster
    AlreadyMember = 23,
    /// Fund is not IN_PROGRESS
    FundNotActive = 24,
    /// Caller is not on the member roster
    NotAMember = 25,

    // ============================================
    // TERM ERRORS (30-39)
    // ============================================
    /// Term index outside 1..=total_terms
    InvalidTerm = 30,
    /// Member already paid for this term
    DuplicatePayment = 31,
    /// Payment differs from the per-term contribution
    AmountMismatch = 32,
    /// Bid must be in range (0, pot_amount]
    InvalidBid = 33,
    /// Term expiry timestamp not reached yet
    TermNotMatured = 34,
    /// Not every member has paid for this term
    IncompletePayments = 35,
    /// Term payout already made
    TermAlreadySettled = 36,

    // ============================================
    // ARITHMETIC ERRORS (40-49)
    // ============================================
    ArithmeticOverflow = 40,

    // ============================================
    // OPERATIONAL ERRORS (60-69)
    // ============================================
    /// Contract is paused
    ContractPaused = 60,
}

impl Error {
    /// Human-readable rejection reason for clients decoding a failed
    /// `join` or `deposit_for_term`. Error codes are the on-chain contract;
    /// these texts are stable and may be shown to users as-is.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Already initialized",
            Error::NotInitialized => "Not initialized",
            Error::FundNotFound => "Fund not found",
            Error::InvalidConfig => "Invalid fund configuration",
            Error::EnrollmentClosed => "Sorry enrollment closed",
            Error::AlreadyMember => "Already joined",
            Error::FundNotActive => {
                "Can not accept the fund. Fund is not started yet or fund is closed."
            }
            Error::NotAMember => "Can not accept the fund. Not a member of fund.",
            Error::InvalidTerm => "Invalid term",
            Error::DuplicatePayment => "Can not accept the fund. Already paid for this term.",
            Error::AmountMismatch => {
                "Can not accept the fund. Payment doesn't match the term amount."
            }
            Error::InvalidBid => "Can not accept the fund. Invalid bid amount.",
            Error::TermNotMatured => "Current term has not matured for withdrawal",
            Error::IncompletePayments => {
                "Current term has not received payment from all the members"
            }
            Error::TermAlreadySettled => "Term already settled",
            Error::ArithmeticOverflow => "Arithmetic overflow",
            Error::ContractPaused => "Contract is paused",
        }
    }

    /// Rejection reason for a failed `withdraw_for_term`. Status and
    /// membership failures read differently there than on deposit.
    pub fn withdrawal_reason(&self) -> &'static str {
        match self {
            Error::FundNotActive => "Sorry! status of the fund must be In-Progress",
            Error::NotAMember => "Not Authorized, must be a member of the fund",
            other => other.reason(),
        }
    }
}
