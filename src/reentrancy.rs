use soroban_sdk::{panic_with_error, Env};

use crate::storage_types::{DataKey, Error};

/// Scoped lock over the disbursement entry points. Nested entry while the
/// lock is held is rejected; the flag is cleared when the guard drops.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn lock(env: &'a Env) -> Self {
        let held: bool = env
            .storage()
            .instance()
            .get(&DataKey::ReentrancyLock)
            .unwrap_or(false);
        if held {
            panic_with_error!(env, Error::ReentrancyDetected);
        }
        env.storage().instance().set(&DataKey::ReentrancyLock, &true);
        ReentrancyGuard { env }
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::ReentrancyLock, &false);
    }
}
