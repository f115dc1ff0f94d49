use crate::error::Error;
use crate::events::{BidPlacedEvent, TermSettledEvent};
use crate::registry::FundRegistry;
use crate::schedule::{now_millis, term_expiry_timestamp};
use crate::storage::Storage;
use crate::types::{
    Bid, Fund, FundStatus, Term, SERVICE_FEE_DENOMINATOR, SERVICE_FEE_NUMERATOR,
};
use soroban_sdk::{token, Address, Env, Symbol, Vec};

pub struct TermLedger;

impl TermLedger {
    /// Pay the term contribution and place a bid on the term's pot
    ///
    /// Checks run in a fixed order; the first failing one is reported.
    ///
    /// # Errors
    /// - `FundNotFound`: No such fund
    /// - `FundNotActive`: Fund not IN_PROGRESS
    /// - `NotAMember`: Caller not on the roster
    /// - `InvalidTerm`: term_index outside 1..=total_terms
    /// - `DuplicatePayment`: Caller already paid this term
    /// - `AmountMismatch`: payment != contribution amount
    /// - `InvalidBid`: bid_amount outside (0, pot_amount]
    pub fn deposit_for_term(
        env: &Env,
        fund_id: u32,
        term_index: u32,
        member: &Address,
        bid_amount: i128,
        payment: i128,
    ) -> Result<(), Error> {
        member.require_auth();

        let fund = FundRegistry::load(env, fund_id)?;

        if fund.status != FundStatus::InProgress {
            return Err(Error::FundNotActive);
        }
        if !fund.is_member(member) {
            return Err(Error::NotAMember);
        }

        let mut term = Self::load_term(env, &fund, term_index)?;

        if term.has_bid_from(member) {
            return Err(Error::DuplicatePayment);
        }
        if payment != fund.contribution_amount() {
            return Err(Error::AmountMismatch);
        }
        if bid_amount <= 0 || bid_amount > fund.pot_amount {
            return Err(Error::InvalidBid);
        }

        let token_address = Storage::get_token(env).ok_or(Error::NotInitialized)?;
        let token_client = token::Client::new(env, &token_address);
        token_client.transfer(member, &env.current_contract_address(), &payment);

        term.bids.push_back(Bid {
            member: member.clone(),
            amount: bid_amount,
        });
        Storage::set_term(env, fund_id, &term);

        env.events().publish(
            (Symbol::new(env, "bid_placed"), fund_id, term_index),
            BidPlacedEvent {
                fund_id,
                term_index,
                member: member.clone(),
                bid_amount,
                payment,
            },
        );

        Ok(())
    }

    /// Settle a matured, fully paid term: pay the lowest bidder their bid
    /// minus the service fee. Any member may trigger it.
    ///
    /// # Errors
    /// - `FundNotFound`: No such fund
    /// - `FundNotActive`: Fund not IN_PROGRESS
    /// - `NotAMember`: Caller not on the roster
    /// - `InvalidTerm`: term_index outside 1..=total_terms
    /// - `TermAlreadySettled`: Payout already made for this term
    /// - `TermNotMatured`: Term expiry not reached
    /// - `IncompletePayments`: Some member has not paid this term
    pub fn withdraw_for_term(
        env: &Env,
        fund_id: u32,
        term_index: u32,
        caller: &Address,
    ) -> Result<i128, Error> {
        caller.require_auth();

        let mut fund = FundRegistry::load(env, fund_id)?;

        if fund.status != FundStatus::InProgress {
            return Err(Error::FundNotActive);
        }
        if !fund.is_member(caller) {
            return Err(Error::NotAMember);
        }

        let mut term = Self::load_term(env, &fund, term_index)?;

        if term.settled {
            return Err(Error::TermAlreadySettled);
        }
        if now_millis(env) < term.expires_at {
            return Err(Error::TermNotMatured);
        }
        if term.bids.len() != fund.member_count() {
            return Err(Error::IncompletePayments);
        }

        let winner = select_winner(&term.bids).ok_or(Error::IncompletePayments)?;
        let fee = service_fee(winner.amount).ok_or(Error::ArithmeticOverflow)?;
        let payout = winner.amount - fee;

        let token_address = Storage::get_token(env).ok_or(Error::NotInitialized)?;
        let token_client = token::Client::new(env, &token_address);
        token_client.transfer(&env.current_contract_address(), &winner.member, &payout);

        term.settled = true;
        term.winner = Some(winner.member.clone());
        term.payout = payout;
        term.fee = fee;
        Storage::set_term(env, fund_id, &term);

        env.events().publish(
            (Symbol::new(env, "term_settled"), fund_id, term_index),
            TermSettledEvent {
                fund_id,
                term_index,
                winner: winner.member.clone(),
                winning_bid: winner.amount,
                fee,
                payout,
                settled_by: caller.clone(),
            },
        );

        FundRegistry::record_settlement(env, &mut fund, term_index)?;
        Storage::set_fund(env, &fund);

        Ok(payout)
    }

    /// Recorded term, or the empty term it would start as. Terms have no
    /// expiry before the fund starts.
    pub fn load_term(env: &Env, fund: &Fund, term_index: u32) -> Result<Term, Error> {
        if fund.status == FundStatus::Enrolling {
            return Err(Error::FundNotActive);
        }
        if term_index == 0 || term_index > fund.total_terms {
            return Err(Error::InvalidTerm);
        }

        Ok(Storage::get_term(env, fund.id, term_index).unwrap_or_else(|| {
            let expires_at = term_expiry_timestamp(fund.started_at, fund.term_unit, term_index);
            Term::new(env, term_index, expires_at)
        }))
    }
}

/// Lowest bid wins. Equal lowest bids go to the earliest submission.
pub fn select_winner(bids: &Vec<Bid>) -> Option<Bid> {
    let mut winner: Option<Bid> = None;
    for bid in bids.iter() {
        let lower = match &winner {
            Some(current) => bid.amount < current.amount,
            None => true,
        };
        if lower {
            winner = Some(bid);
        }
    }
    winner
}

/// Calculate the service fee on a winning bid
///
/// Formula: fee = bid × 5 / 1000 (truncating)
///
/// Split into quotient and remainder parts so a bid near i128::MAX cannot
/// overflow: bid / 1000 × 5 + (bid % 1000) × 5 / 1000.
///
/// Example:
/// - bid: 2.8 (28_000_000 at 7 decimals)
/// - fee: 28_000_000 × 5 / 1000 = 140_000
pub fn service_fee(bid_amount: i128) -> Option<i128> {
    let whole = bid_amount
        .checked_div(SERVICE_FEE_DENOMINATOR)?
        .checked_mul(SERVICE_FEE_NUMERATOR)?;
    let part = bid_amount
        .checked_rem(SERVICE_FEE_DENOMINATOR)?
        .checked_mul(SERVICE_FEE_NUMERATOR)?
        .checked_div(SERVICE_FEE_DENOMINATOR)?;
    whole.checked_add(part)
}
