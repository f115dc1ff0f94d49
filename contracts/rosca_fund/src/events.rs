use soroban_sdk::{contracttype, Address, String};

use crate::types::TermUnit;

#[contracttype]
#[derive(Clone, Debug)]
pub struct FundCreatedEvent {
    pub fund_id: u32,
    pub name: String,
    pub manager: Address,
    pub term_unit: TermUnit,
    pub total_terms: u32,
    pub pot_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MemberJoinedEvent {
    pub fund_id: u32,
    pub member: Address,
    pub member_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FundStartedEvent {
    pub fund_id: u32,
    pub started_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BidPlacedEvent {
    pub fund_id: u32,
    pub term_index: u32,
    pub member: Address,
    pub bid_amount: i128,
    pub payment: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TermSettledEvent {
    pub fund_id: u32,
    pub term_index: u32,
    pub winner: Address,
    pub winning_bid: i128,
    pub fee: i128,
    pub payout: i128,
    pub settled_by: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FundClosedEvent {
    pub fund_id: u32,
}
