use soroban_sdk::{contracttype, Address, String, Symbol};

use crate::storage_types::{CampaignId, Currency};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub referral_cap: u32,
    pub expiry_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignStatusUpdatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct RedirectUpdatedEvent {
    pub campaign_id: CampaignId,
    pub redirect_url: String,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardsUpdatedEvent {
    pub campaign_id: CampaignId,
    pub base_reward: i128,
    pub token_reward: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct OwnershipTransferredEvent {
    pub campaign_id: CampaignId,
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct ReferralSuccessfulEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub participant: Address,
    pub redirect_url: String,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub caller: Address,
    pub amount: i128,
    pub currency: Currency,
}

#[contracttype]
#[derive(Clone)]
pub struct PauseToggledEvent {
    pub admin: Address,
    pub paused: bool,
}

pub fn emit_campaign_created(env: &soroban_sdk::Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_status_updated(env: &soroban_sdk::Env, event: CampaignStatusUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_status_updated"),),
        event,
    );
}

pub fn emit_redirect_updated(env: &soroban_sdk::Env, event: RedirectUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "redirect_updated"),),
        event,
    );
}

pub fn emit_rewards_updated(env: &soroban_sdk::Env, event: RewardsUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "rewards_updated"),),
        event,
    );
}

pub fn emit_ownership_transferred(env: &soroban_sdk::Env, event: OwnershipTransferredEvent) {
    env.events().publish(
        (Symbol::new(env, "ownership_transferred"),),
        event,
    );
}

pub fn emit_referral_successful(env: &soroban_sdk::Env, event: ReferralSuccessfulEvent) {
    env.events().publish(
        (Symbol::new(env, "referral_successful"),),
        event,
    );
}

pub fn emit_funds_withdrawn(env: &soroban_sdk::Env, event: FundsWithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"),),
        event,
    );
}

pub fn emit_pause_toggled(env: &soroban_sdk::Env, event: PauseToggledEvent) {
    env.events().publish(
        (Symbol::new(env, "pause_toggled"),),
        event,
    );
}
