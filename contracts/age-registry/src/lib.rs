#![no_std]

//! Name to age registry.
//!
//! Keys are the serialized name argument and values the serialized age, both
//! encoded with `call_args::Args`. `get_age` hands the stored value back
//! without decoding it.

use call_args::{Args, Utf8Writer};
use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, panic_with_error, Bytes,
    Env,
};


// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    MissingArgument = 1,
    /// No such person's age is stored.
    NotFound = 2,
}

// ============================================================================
// Events
// ============================================================================

#[contractevent]
pub struct AgeNotice {
    pub message: Bytes,
}

// ============================================================================
// Storage
// ============================================================================

#[contracttype]
pub enum DataKey {
    Deployed,
    Person(Bytes),
}

/// Entry seeded at deployment.
pub const SEED_NAME: &str = "alice";
pub const SEED_AGE: u32 = 1;

const PERSISTENT_BUMP_LEDGERS: u32 = 518_400; // ~30 days

#[contract]
pub struct AgeRegistry;

#[contractimpl]
impl AgeRegistry {
    pub fn __constructor(env: Env, args: Bytes) {
        if let Err(e) = Self::initialize(env.clone(), args) {
            panic_with_error!(&env, e);
        }
        env.storage().instance().set(&DataKey::Deployed, &true);
    }

    /// Deployment-time setup; a no-op returning empty bytes afterwards.
    pub fn initialize(env: Env, args: Bytes) -> Result<Bytes, Error> {
        if env.storage().instance().has(&DataKey::Deployed) {
            return Ok(Bytes::new(&env));
        }
        let name = Args::from_bytes(args)
            .next_string()
            .map_err(|_| Error::MissingArgument)?;
        Self::notify(
            &env,
            Utf8Writer::new(&env)
                .push_str("Constructor called with name ")
                .push_bytes(&name)
                .finish(),
        );

        let key = Args::new(&env).add_str(SEED_NAME).serialize();
        let age = Args::new(&env).add_u32(SEED_AGE).serialize();
        Self::store_age(&env, key, &age);
        Ok(Bytes::new(&env))
    }

    /// Sets the age of the person named in `args`, creating the entry if needed.
    ///
    /// `args` holds a name followed by a `u32` age.
    pub fn change_age(env: Env, args: Bytes) -> Result<(), Error> {
        let mut args = Args::from_bytes(args);
        let name = args.next_string().map_err(|_| Error::MissingArgument)?;
        let age = args.next_u32().map_err(|_| Error::MissingArgument)?;

        let key = Args::new(&env).add_string(&name).serialize();
        let value = Args::new(&env).add_u32(age).serialize();
        Self::store_age(&env, key, &value);

        Self::notify(
            &env,
            Utf8Writer::new(&env)
                .push_str("Changed age of '")
                .push_bytes(&name)
                .push_str("' to '")
                .push_u32(age)
                .push_str("'")
                .finish(),
        );
        Ok(())
    }

    /// Returns the serialized age stored for the name in `args`.
    pub fn get_age(env: Env, args: Bytes) -> Result<Bytes, Error> {
        let name = Args::from_bytes(args)
            .next_string()
            .map_err(|_| Error::MissingArgument)?;
        let key = DataKey::Person(Args::new(&env).add_string(&name).serialize());
        env.storage().persistent().get(&key).ok_or(Error::NotFound)
    }

    // --- Internals ---
    fn store_age(env: &Env, encoded_name: Bytes, encoded_age: &Bytes) {
        let key = DataKey::Person(encoded_name);
        env.storage().persistent().set(&key, encoded_age);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
    }

    fn notify(env: &Env, message: Bytes) {
        AgeNotice { message }.publish(env);
    }
}
