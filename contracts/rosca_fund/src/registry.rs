use crate::error::Error;
use crate::events::{FundClosedEvent, FundCreatedEvent, FundStartedEvent, MemberJoinedEvent};
use crate::schedule::now_millis;
use crate::storage::Storage;
use crate::types::{Fund, FundStatus, TermUnit};
use soroban_sdk::{vec, Address, Env, String, Symbol};

pub struct FundRegistry;

impl FundRegistry {
    /// Register a new fund with the creator as manager and first member
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidConfig`: total_terms is zero, the pot cannot fund a positive
    ///   contribution, or the pot is not a whole multiple of total_terms
    pub fn create(
        env: &Env,
        creator: &Address,
        name: String,
        term_unit: TermUnit,
        total_terms: u32,
        pot_amount: i128,
    ) -> Result<u32, Error> {
        if !Storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }

        if total_terms == 0 || pot_amount <= 0 {
            return Err(Error::InvalidConfig);
        }
        // A full term must collect exactly the pot, so no payout can reach
        // into another fund's deposits.
        let terms = i128::from(total_terms);
        if pot_amount / terms <= 0 || pot_amount % terms != 0 {
            return Err(Error::InvalidConfig);
        }

        creator.require_auth();

        let fund_id = Storage::get_fund_counter(env)
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        let mut fund = Fund {
            id: fund_id,
            name: name.clone(),
            term_unit,
            total_terms,
            pot_amount,
            created_at: now_millis(env),
            started_at: 0,
            manager: creator.clone(),
            status: FundStatus::Enrolling,
            members: vec![env, creator.clone()],
            current_term: 1,
            settled_terms: 0,
        };

        env.events().publish(
            (Symbol::new(env, "fund_created"), fund_id),
            FundCreatedEvent {
                fund_id,
                name,
                manager: creator.clone(),
                term_unit,
                total_terms,
                pot_amount,
            },
        );

        // A single-term fund is full with its manager alone
        Self::close_enrollment_if_full(env, &mut fund);

        Storage::set_fund(env, &fund);
        Storage::set_fund_counter(env, fund_id);

        Ok(fund_id)
    }

    /// Add the caller to the roster; the join that fills it starts the fund
    ///
    /// # Errors
    /// - `FundNotFound`: No such fund
    /// - `EnrollmentClosed`: Fund is not ENROLLING
    /// - `AlreadyMember`: Caller already joined
    pub fn join(env: &Env, fund_id: u32, member: &Address) -> Result<(), Error> {
        member.require_auth();

        let mut fund = Self::load(env, fund_id)?;

        if fund.status != FundStatus::Enrolling {
            return Err(Error::EnrollmentClosed);
        }
        if fund.is_member(member) {
            return Err(Error::AlreadyMember);
        }

        fund.members.push_back(member.clone());

        env.events().publish(
            (Symbol::new(env, "member_joined"), fund_id, member.clone()),
            MemberJoinedEvent {
                fund_id,
                member: member.clone(),
                member_count: fund.member_count(),
            },
        );

        Self::close_enrollment_if_full(env, &mut fund);
        Storage::set_fund(env, &fund);

        Ok(())
    }

    pub fn load(env: &Env, fund_id: u32) -> Result<Fund, Error> {
        Storage::get_fund(env, fund_id).ok_or(Error::FundNotFound)
    }

    // ============================================
    // STATUS TRANSITIONS
    // ============================================

    /// ENROLLING -> IN_PROGRESS once the roster reaches total_terms.
    /// Term expiries count from this moment.
    fn close_enrollment_if_full(env: &Env, fund: &mut Fund) {
        if fund.status != FundStatus::Enrolling || fund.member_count() < fund.total_terms {
            return;
        }

        fund.status = FundStatus::InProgress;
        fund.started_at = now_millis(env);

        env.events().publish(
            (Symbol::new(env, "fund_started"), fund.id),
            FundStartedEvent {
                fund_id: fund.id,
                started_at: fund.started_at,
            },
        );
    }

    /// Book a settled term: advance the current term pointer past settled
    /// terms and close the fund after the last one.
    pub fn record_settlement(env: &Env, fund: &mut Fund, term_index: u32) -> Result<(), Error> {
        fund.settled_terms = fund
            .settled_terms
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        if term_index == fund.current_term {
            let mut next = fund.current_term + 1;
            while next <= fund.total_terms && Storage::is_term_settled(env, fund.id, next) {
                next += 1;
            }
            fund.current_term = next;
        }

        if fund.settled_terms >= fund.total_terms {
            fund.status = FundStatus::Closed;

            env.events().publish(
                (Symbol::new(env, "fund_closed"), fund.id),
                FundClosedEvent { fund_id: fund.id },
            );
        }

        Ok(())
    }
}
