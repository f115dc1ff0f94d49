use crate::types::{DataKey, Fund, Term};
use soroban_sdk::{Address, Env};

pub struct Storage;

impl Storage {
    // Contract configuration
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn initialize(env: &Env, admin: &Address, token: &Address) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage().instance().set(&DataKey::Token, token);
        env.storage().instance().set(&DataKey::FundCounter, &0u32);
        env.storage().instance().set(&DataKey::Paused, &false);
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn get_token(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Token)
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    // Fund id counter
    pub fn get_fund_counter(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::FundCounter)
            .unwrap_or(0)
    }

    pub fn set_fund_counter(env: &Env, counter: u32) {
        env.storage()
            .instance()
            .set(&DataKey::FundCounter, &counter);
    }

    // Funds
    pub fn get_fund(env: &Env, fund_id: u32) -> Option<Fund> {
        env.storage().persistent().get(&DataKey::Fund(fund_id))
    }

    pub fn set_fund(env: &Env, fund: &Fund) {
        env.storage()
            .persistent()
            .set(&DataKey::Fund(fund.id), fund);
    }

    // Terms
    pub fn get_term(env: &Env, fund_id: u32, term_index: u32) -> Option<Term> {
        env.storage()
            .persistent()
            .get(&DataKey::Term(fund_id, term_index))
    }

    pub fn set_term(env: &Env, fund_id: u32, term: &Term) {
        env.storage()
            .persistent()
            .set(&DataKey::Term(fund_id, term.index), term);
    }

    pub fn is_term_settled(env: &Env, fund_id: u32, term_index: u32) -> bool {
        Self::get_term(env, fund_id, term_index)
            .map(|term| term.settled)
            .unwrap_or(false)
    }
}
