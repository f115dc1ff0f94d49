use soroban_sdk::{contracttype, Address, Env, String, Vec};

// Constants
pub const MS_PER_DAY: u64 = 86_400_000;
pub const SERVICE_FEE_NUMERATOR: i128 = 5; // 0.5% of the winning bid
pub const SERVICE_FEE_DENOMINATOR: i128 = 1000;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermUnit {
    Weekly = 0,
    /// Contractually 15 days, not 14
    Biweekly = 1,
    Monthly = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundStatus {
    /// Accepting members until the roster reaches total_terms
    Enrolling = 0,
    /// Roster full, terms are being paid and settled
    InProgress = 1,
    /// Every term settled
    Closed = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fund {
    pub id: u32,
    pub name: String,
    pub term_unit: TermUnit,
    /// Number of terms, also the member capacity
    pub total_terms: u32,
    /// Pot per term in the token's smallest unit
    pub pot_amount: i128,
    /// Creation time (ms)
    pub created_at: u64,
    /// Time enrollment closed (ms), 0 while enrolling
    pub started_at: u64,
    pub manager: Address,
    pub status: FundStatus,
    /// Join order, manager first
    pub members: Vec<Address>,
    /// Lowest term index not yet settled
    pub current_term: u32,
    pub settled_terms: u32,
}

impl Fund {
    /// Per-term payment each member owes.
    pub fn contribution_amount(&self) -> i128 {
        self.pot_amount / i128::from(self.total_terms)
    }

    pub fn member_count(&self) -> u32 {
        self.members.len()
    }

    pub fn is_member(&self, address: &Address) -> bool {
        self.members.contains(address)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub member: Address,
    /// Payout the member accepts if selected
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Term {
    pub index: u32,
    /// Maturity timestamp (ms)
    pub expires_at: u64,
    /// One entry per paid member, in submission order
    pub bids: Vec<Bid>,
    pub settled: bool,
    pub winner: Option<Address>,
    pub payout: i128,
    pub fee: i128,
}

impl Term {
    pub fn new(env: &Env, index: u32, expires_at: u64) -> Self {
        Term {
            index,
            expires_at,
            bids: Vec::new(env),
            settled: false,
            winner: None,
            payout: 0,
            fee: 0,
        }
    }

    pub fn has_bid_from(&self, member: &Address) -> bool {
        self.bids.iter().any(|bid| &bid.member == member)
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Token,
    FundCounter,
    Fund(u32),      // fund_id -> Fund
    Term(u32, u32), // (fund_id, term_index) -> Term
    Initialized,
    Paused,
}
