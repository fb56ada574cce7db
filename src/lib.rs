#![no_std]

mod events;
mod reentrancy;
mod storage_types;


use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, Env, String,
};

use reentrancy::ReentrancyGuard;
pub use storage_types::{Campaign, CampaignId, Currency, Error};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

#[contract]
pub struct ReferralContract;

#[contractimpl]
impl ReferralContract {
    /// Initialize the contract with the pause admin and the asset contract
    /// used as the base currency for campaign rewards
    pub fn initialize(env: Env, admin: Address, native_token: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        env.storage().instance().set(&DataKey::Paused, &false);

        extend_instance(&env);
    }

    /// Create a new referral campaign under a caller-supplied identifier
    pub fn create_campaign(
        env: Env,
        creator: Address,
        id: CampaignId,
        title: String,
        base_reward: i128,
        reward_token: Option<Address>,
        token_reward: i128,
        redirect_url: String,
        referral_cap: u32,
        expiry_time: u64,
    ) {
        creator.require_auth();
        require_initialized(&env);

        if env.storage().persistent().has(&PersistentKey::Campaign(id)) {
            panic_with_error!(&env, Error::CampaignAlreadyExists);
        }
        if expiry_time <= env.ledger().timestamp() {
            panic_with_error!(&env, Error::InvalidExpiry);
        }
        if base_reward < 0 || token_reward < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let campaign = Campaign {
            id,
            owner: creator.clone(),
            title,
            redirect_url,
            base_reward,
            reward_token,
            token_reward,
            referral_cap,
            expiry_time,
            is_active: true,
            created_at: env.ledger().timestamp(),
        };

        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(id), &campaign);
        env.storage()
            .persistent()
            .set(&PersistentKey::ReferralCount(id), &0u32);

        extend_persistent(&env, &PersistentKey::Campaign(id));
        extend_persistent(&env, &PersistentKey::ReferralCount(id));
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: id,
                owner: creator,
                referral_cap,
                expiry_time,
            },
        );
    }

    /// Claim a one-time referral reward on a campaign
    pub fn make_referral(env: Env, participant: Address, id: CampaignId) {
        participant.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        check_not_paused(&env);

        let campaign = match env
            .storage()
            .persistent()
            .get::<PersistentKey, Campaign>(&PersistentKey::Campaign(id))
        {
            Some(c) if c.is_active => c,
            _ => panic_with_error!(&env, Error::CampaignInactive),
        };

        if env.ledger().timestamp() > campaign.expiry_time {
            panic_with_error!(&env, Error::CampaignExpired);
        }

        let referred_key = PersistentKey::HasReferred(id, participant.clone());
        if env
            .storage()
            .persistent()
            .get(&referred_key)
            .unwrap_or(false)
        {
            panic_with_error!(&env, Error::AlreadyReferred);
        }

        let count: u32 = env
            .storage()
            .persistent()
            .get(&PersistentKey::ReferralCount(id))
            .unwrap_or(0);
        if count >= campaign.referral_cap {
            panic_with_error!(&env, Error::CapReached);
        }

        // Eligibility state is committed before any transfer leaves the
        // contract; a re-entrant call observes the flag and the counter.
        env.storage().persistent().set(&referred_key, &true);
        env.storage()
            .persistent()
            .set(&PersistentKey::ReferralCount(id), &(count + 1));

        extend_persistent(&env, &referred_key);
        extend_persistent(&env, &PersistentKey::ReferralCount(id));
        extend_instance(&env);

        if campaign.base_reward > 0 {
            let pool = token::Client::new(&env, &native_token(&env));
            if pool.balance(&env.current_contract_address()) < campaign.base_reward {
                panic_with_error!(&env, Error::InsufficientPoolFunds);
            }
            pool.transfer(
                &env.current_contract_address(),
                &participant,
                &campaign.base_reward,
            );
        }

        if campaign.token_reward > 0 {
            if let Some(reward_token) = &campaign.reward_token {
                let ledger = token::Client::new(&env, reward_token);
                if ledger.balance(&env.current_contract_address()) < campaign.token_reward {
                    panic_with_error!(&env, Error::InsufficientTokenFunds);
                }
                ledger.transfer(
                    &env.current_contract_address(),
                    &participant,
                    &campaign.token_reward,
                );
            }
        }

        events::emit_referral_successful(
            &env,
            events::ReferralSuccessfulEvent {
                campaign_id: id,
                owner: campaign.owner,
                participant,
                redirect_url: campaign.redirect_url,
            },
        );
    }

    /// Withdraw from the pooled balance of a currency. The pool is shared
    /// across all campaigns of that currency, not escrowed per campaign.
    pub fn withdraw_funds(
        env: Env,
        caller: Address,
        id: CampaignId,
        amount: i128,
        currency: Currency,
    ) {
        let _guard = ReentrancyGuard::lock(&env);

        let campaign = load_campaign(&env, id);
        require_owner(&env, &campaign, &caller);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        match &currency {
            Currency::Native => {
                let pool = token::Client::new(&env, &native_token(&env));
                if pool.balance(&env.current_contract_address()) < amount {
                    panic_with_error!(&env, Error::InsufficientPoolFunds);
                }
                pool.transfer(&env.current_contract_address(), &caller, &amount);
            }
            Currency::Token(address) => {
                let ledger = token::Client::new(&env, address);
                if ledger.balance(&env.current_contract_address()) < amount {
                    panic_with_error!(&env, Error::InsufficientTokenFunds);
                }
                ledger.transfer(&env.current_contract_address(), &caller, &amount);
            }
        }

        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                campaign_id: id,
                caller,
                amount,
                currency,
            },
        );
    }

    /// Flip a campaign's active gate
    pub fn set_campaign_status(env: Env, caller: Address, id: CampaignId, is_active: bool) {
        let mut campaign = load_campaign(&env, id);
        require_owner(&env, &campaign, &caller);

        campaign.is_active = is_active;
        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(id));

        events::emit_campaign_status_updated(
            &env,
            events::CampaignStatusUpdatedEvent {
                campaign_id: id,
                owner: caller,
                is_active,
            },
        );
    }

    /// Replace a campaign's redirect target
    pub fn update_redirect_url(env: Env, caller: Address, id: CampaignId, url: String) {
        let mut campaign = load_campaign(&env, id);
        require_owner(&env, &campaign, &caller);

        campaign.redirect_url = url.clone();
        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(id));

        events::emit_redirect_updated(
            &env,
            events::RedirectUpdatedEvent {
                campaign_id: id,
                redirect_url: url,
            },
        );
    }

    /// Replace both reward amounts. The reward token identifier is fixed at
    /// creation and is not touched here.
    pub fn update_referral_rewards(
        env: Env,
        caller: Address,
        id: CampaignId,
        base_reward: i128,
        token_reward: i128,
    ) {
        let mut campaign = load_campaign(&env, id);
        require_owner(&env, &campaign, &caller);

        if base_reward < 0 || token_reward < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        campaign.base_reward = base_reward;
        campaign.token_reward = token_reward;
        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(id));

        events::emit_rewards_updated(
            &env,
            events::RewardsUpdatedEvent {
                campaign_id: id,
                base_reward,
                token_reward,
            },
        );
    }

    /// Hand a campaign to a new owner
    pub fn transfer_ownership(env: Env, caller: Address, id: CampaignId, new_owner: Address) {
        let mut campaign = load_campaign(&env, id);
        require_owner(&env, &campaign, &caller);

        // The contract's own address can never authorize a later call.
        if new_owner == env.current_contract_address() {
            panic_with_error!(&env, Error::InvalidOwner);
        }

        campaign.owner = new_owner.clone();
        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(id));

        events::emit_ownership_transferred(
            &env,
            events::OwnershipTransferredEvent {
                campaign_id: id,
                previous_owner: caller,
                new_owner,
            },
        );
    }

    /// Suspend all referral claims. Administrative and withdrawal
    /// operations stay available while paused.
    pub fn pause(env: Env, caller: Address) {
        require_admin(&env, &caller);
        env.storage().instance().set(&DataKey::Paused, &true);

        events::emit_pause_toggled(
            &env,
            events::PauseToggledEvent {
                admin: caller,
                paused: true,
            },
        );
    }

    /// Lift the claim suspension
    pub fn unpause(env: Env, caller: Address) {
        require_admin(&env, &caller);
        env.storage().instance().set(&DataKey::Paused, &false);

        events::emit_pause_toggled(
            &env,
            events::PauseToggledEvent {
                admin: caller,
                paused: false,
            },
        );
    }

    /// View functions
    pub fn get_campaign(env: Env, id: CampaignId) -> Option<Campaign> {
        env.storage().persistent().get(&PersistentKey::Campaign(id))
    }

    pub fn get_referral_count(env: Env, id: CampaignId) -> u32 {
        env.storage()
            .persistent()
            .get(&PersistentKey::ReferralCount(id))
            .unwrap_or(0)
    }

    pub fn has_referred(env: Env, id: CampaignId, participant: Address) -> bool {
        env.storage()
            .persistent()
            .get(&PersistentKey::HasReferred(id, participant))
            .unwrap_or(false)
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    pub fn get_native_token(env: Env) -> Address {
        native_token(&env)
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn require_initialized(env: &Env) {
    if !env.storage().instance().has(&DataKey::Admin) {
        panic_with_error!(env, Error::NotInitialized);
    }
}

fn check_not_paused(env: &Env) {
    let paused: bool = env
        .storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false);
    if paused {
        panic_with_error!(env, Error::ContractPaused);
    }
}

fn native_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

fn load_campaign(env: &Env, id: CampaignId) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id))
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound))
}

// Ownership is re-read from storage on every call, never cached.
fn require_owner(env: &Env, campaign: &Campaign, caller: &Address) {
    caller.require_auth();
    if *caller != campaign.owner {
        panic_with_error!(env, Error::NotOwner);
    }
}

fn require_admin(env: &Env, caller: &Address) {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized));
    caller.require_auth();
    if *caller != admin {
        panic_with_error!(env, Error::NotOwner);
    }
}
