#![no_std]

mod storage_types;


use storage_types::{
    DataKey, PersistentKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, OWNED_BUMP_AMOUNT,
    OWNED_LIFETIME_THRESHOLD,
};

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, Address, Env, String,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SoulboundError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    AlreadyOwned = 3,
}

/// A single badge kind per deployed instance. Accounts hold at most one
/// unit and there is no transfer surface at all.
#[contract]
pub struct SoulboundContract;

#[contractimpl]
impl SoulboundContract {
    pub fn initialize(e: Env, admin: Address, token_uri: String) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, SoulboundError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::TokenUri, &token_uri);
        extend_instance(&e);
    }

    /// Delegate issuance rights, typically to the charity or check-in
    /// contract address.
    pub fn grant_editor(e: Env, caller: Address, editor: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        e.storage().instance().set(&DataKey::Editor(editor.clone()), &true);
        extend_instance(&e);

        e.events()
            .publish((symbol_short!("editor"), symbol_short!("grant")), editor);
    }

    pub fn revoke_editor(e: Env, caller: Address, editor: Address) {
        caller.require_auth();
        require_admin(&e, &caller);

        e.storage().instance().remove(&DataKey::Editor(editor.clone()));

        e.events()
            .publish((symbol_short!("editor"), symbol_short!("revoke")), editor);
    }

    /// Issue the badge to `to`. The minter must be the admin or an editor.
    pub fn mint(e: Env, minter: Address, to: Address) {
        minter.require_auth();
        if !is_issuer(&e, &minter) {
            panic_with_error!(&e, SoulboundError::Unauthorized);
        }

        let key = PersistentKey::Owned(to.clone());
        if e.storage().persistent().has(&key) {
            panic_with_error!(&e, SoulboundError::AlreadyOwned);
        }

        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, OWNED_LIFETIME_THRESHOLD, OWNED_BUMP_AMOUNT);
        extend_instance(&e);

        e.events().publish((symbol_short!("mint"), minter, to), 1u32);
    }

    pub fn balance(e: Env, id: Address) -> u32 {
        if e.storage().persistent().has(&PersistentKey::Owned(id)) {
            1
        } else {
            0
        }
    }

    pub fn has_badge(e: Env, id: Address) -> bool {
        e.storage().persistent().has(&PersistentKey::Owned(id))
    }

    pub fn token_uri(e: Env) -> String {
        e.storage().instance().get(&DataKey::TokenUri).unwrap()
    }

    pub fn admin(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Admin).unwrap()
    }

    pub fn is_editor(e: Env, addr: Address) -> bool {
        e.storage().instance().has(&DataKey::Editor(addr))
    }
}

fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn require_admin(e: &Env, caller: &Address) {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    if caller != &admin {
        panic_with_error!(e, SoulboundError::Unauthorized);
    }
}

fn is_issuer(e: &Env, minter: &Address) -> bool {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    minter == &admin || e.storage().instance().has(&DataKey::Editor(minter.clone()))
}
