#![no_std]

mod error;
mod events;
mod ledger;
mod registry;
mod schedule;
mod storage;
mod types;

pub use error::Error;
pub use types::{Bid, Fund, FundStatus, Term, TermUnit};

use ledger::TermLedger;
use registry::FundRegistry;
use schedule::term_expiry_timestamp;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct RoscaFund;

#[contractimpl]
impl RoscaFund {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the contract with its admin and the token funds are paid in
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        Storage::initialize(&env, &admin, &token);
        Ok(())
    }

    /// Pause contract (emergency)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn pause(env: Env) -> Result<(), Error> {
        let admin = Storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        Storage::set_paused(&env, true);
        Ok(())
    }

    /// Unpause contract
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn unpause(env: Env) -> Result<(), Error> {
        let admin = Storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        Storage::set_paused(&env, false);
        Ok(())
    }

    // ============================================
    // ENROLLMENT
    // ============================================

    /// Create a fund; the creator becomes its manager and first member
    pub fn create_fund(
        env: Env,
        creator: Address,
        name: String,
        term_unit: TermUnit,
        total_terms: u32,
        pot_amount: i128,
    ) -> Result<u32, Error> {
        Self::check_not_paused(&env)?;
        FundRegistry::create(&env, &creator, name, term_unit, total_terms, pot_amount)
    }

    /// Join a fund that is still enrolling
    pub fn join(env: Env, fund_id: u32, member: Address) -> Result<(), Error> {
        Self::check_not_paused(&env)?;
        FundRegistry::join(&env, fund_id, &member)
    }

    // ============================================
    // TERMS
    // ============================================

    /// Pay the contribution for a term and bid on its pot
    pub fn deposit_for_term(
        env: Env,
        fund_id: u32,
        term_index: u32,
        member: Address,
        bid_amount: i128,
        payment: i128,
    ) -> Result<(), Error> {
        Self::check_not_paused(&env)?;
        TermLedger::deposit_for_term(&env, fund_id, term_index, &member, bid_amount, payment)
    }

    /// Settle a term and pay its winner; returns the payout
    pub fn withdraw_for_term(
        env: Env,
        fund_id: u32,
        term_index: u32,
        caller: Address,
    ) -> Result<i128, Error> {
        Self::check_not_paused(&env)?;
        TermLedger::withdraw_for_term(&env, fund_id, term_index, &caller)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_fund(env: Env, fund_id: u32) -> Result<Fund, Error> {
        FundRegistry::load(&env, fund_id)
    }

    pub fn get_manager(env: Env, fund_id: u32) -> Result<Address, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.manager)
    }

    pub fn get_term_unit(env: Env, fund_id: u32) -> Result<TermUnit, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.term_unit)
    }

    pub fn get_status(env: Env, fund_id: u32) -> Result<FundStatus, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.status)
    }

    pub fn get_name(env: Env, fund_id: u32) -> Result<String, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.name)
    }

    pub fn get_pot_amount(env: Env, fund_id: u32) -> Result<i128, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.pot_amount)
    }

    pub fn get_total_terms(env: Env, fund_id: u32) -> Result<u32, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.total_terms)
    }

    pub fn get_member_count(env: Env, fund_id: u32) -> Result<u32, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.member_count())
    }

    pub fn get_members(env: Env, fund_id: u32) -> Result<Vec<Address>, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.members)
    }

    pub fn is_member(env: Env, fund_id: u32, address: Address) -> Result<bool, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.is_member(&address))
    }

    /// Per-term payment each member owes (pot / total_terms)
    pub fn get_contribution_amount(env: Env, fund_id: u32) -> Result<i128, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.contribution_amount())
    }

    /// Lowest term index not yet settled
    pub fn get_current_term(env: Env, fund_id: u32) -> Result<u32, Error> {
        Ok(FundRegistry::load(&env, fund_id)?.current_term)
    }

    pub fn get_term(env: Env, fund_id: u32, term_index: u32) -> Result<Term, Error> {
        let fund = FundRegistry::load(&env, fund_id)?;
        TermLedger::load_term(&env, &fund, term_index)
    }

    pub fn has_paid(env: Env, fund_id: u32, term_index: u32, member: Address) -> Result<bool, Error> {
        let fund = FundRegistry::load(&env, fund_id)?;
        Ok(TermLedger::load_term(&env, &fund, term_index)?.has_bid_from(&member))
    }

    /// Expiry (ms) of term `term_index` for a fund started at `init_timestamp` (ms)
    pub fn get_term_expiry_timestamp(
        _env: Env,
        init_timestamp: u64,
        term_unit: TermUnit,
        term_index: u32,
    ) -> u64 {
        term_expiry_timestamp(init_timestamp, term_unit, term_index)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        Storage::get_token(&env).ok_or(Error::NotInitialized)
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::is_paused(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if Storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }
}
