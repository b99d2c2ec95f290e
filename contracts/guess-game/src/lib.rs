#![no_std]

//! Guess the number.
//!
//! `start_session` picks a secret inside a random 20-wide interval below 100
//! and gives the caller four attempts. `submit_guess` checks a guess, counts
//! down the attempts and pays the reward token to a winning caller.
//!
//! There is exactly one session for the whole contract. Every caller plays
//! the same round, and starting a new one silently replaces the old one.
//!
//! Entry points take an argument blob encoded with `call_args::Args` and
//! return the outcome message as UTF-8 bytes. The same message is published
//! as a `GameNotice` event.

use call_args::{Args, Utf8Writer};
use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, log, panic_with_error,
    token, Address, Bytes, Env,
};


pub mod entropy;
pub mod session;

use entropy::HostEntropy;
use session::Session;

// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    MissingArgument = 1,
    MissingSessionState = 2,
    ParseError = 3,
}

// ============================================================================
// Events
// ============================================================================

#[contractevent]
pub struct GameNotice {
    pub message: Bytes,
}

// ============================================================================
// Storage
// ============================================================================

#[contracttype]
pub enum DataKey {
    RewardToken,
    Deployed,
}

// ============================================================================
// Contract Implementation
// ============================================================================

/// Width of the interval the secret is drawn from.
pub const INTERVALS: u32 = 20;
/// Intervals start below `RANGE_CEILING - INTERVALS`.
pub const RANGE_CEILING: u32 = 100;
pub const ATTEMPTS: u32 = 4;
/// Paid in the reward token's smallest unit.
pub const REWARD_AMOUNT: i128 = 1_000_000_000;

const INSTANCE_BUMP_LEDGERS: u32 = 518_400; // ~30 days

#[contract]
pub struct GuessGame;

#[contractimpl]
impl GuessGame {
    pub fn __constructor(env: Env, reward_token: Address, args: Bytes) {
        env.storage()
            .instance()
            .set(&DataKey::RewardToken, &reward_token);
        if let Err(e) = Self::initialize(env.clone(), args) {
            panic_with_error!(&env, e);
        }
        env.storage().instance().set(&DataKey::Deployed, &true);
    }

    /// Deployment-time setup. Expects a name in `args`.
    ///
    /// Once the contract is deployed this does nothing and returns empty bytes,
    /// so nobody can re-run it later.
    pub fn initialize(env: Env, args: Bytes) -> Result<Bytes, Error> {
        if !Self::is_deploying(&env) {
            return Ok(Bytes::new(&env));
        }
        let name = Args::from_bytes(args)
            .next_string()
            .map_err(|_| Error::MissingArgument)?;
        let message = Utf8Writer::new(&env)
            .push_str("Constructor called with name ")
            .push_bytes(&name)
            .finish();
        Self::notify(&env, &message);
        Ok(Bytes::new(&env))
    }

    /// Starts a new session, replacing any session in progress.
    ///
    /// `_args` may carry a player name; it is not used.
    pub fn start_session(env: Env, _args: Bytes) -> Bytes {
        let mut entropy = HostEntropy::new(&env);
        let start = entropy::interval_start(&mut entropy);
        let end = start + INTERVALS;
        let secret = entropy::generate(start, &mut entropy);

        session::store(
            &env,
            &Session {
                secret,
                remaining_attempts: ATTEMPTS,
            },
        );
        Self::bump_instance(&env);

        let message = Utf8Writer::new(&env)
            .push_str("Guess the number between ")
            .push_u32(start)
            .push_str(" and ")
            .push_u32(end)
            .push_str(". You have ")
            .push_u32(ATTEMPTS)
            .push_str(" attempts!")
            .finish();
        Self::notify(&env, &message);
        message
    }

    /// Checks `player`'s guess (a `u32` in `args`) against the live session.
    ///
    /// The session is left as-is after a win, and the final miss does not
    /// write the zero attempt count back. A won session keeps accepting the
    /// same secret until the next `start_session`, and so does a lost one,
    /// whose loss message has just revealed it.
    pub fn submit_guess(env: Env, player: Address, args: Bytes) -> Result<Bytes, Error> {
        player.require_auth();
        let guess = Args::from_bytes(args)
            .next_u32()
            .map_err(|_| Error::MissingArgument)?;
        let current = session::load(&env)?;

        if guess == current.secret {
            Self::pay_reward(&env, &player);
            let message = Utf8Writer::new(&env)
                .push_str("Congrat! You have won the game!")
                .finish();
            Self::notify(&env, &message);
            return Ok(message);
        }

        let remaining = current.remaining_attempts.saturating_sub(1);
        if remaining == 0 {
            let message = Utf8Writer::new(&env)
                .push_str("Game is over! You lost the game! The correct number was ")
                .push_u32(current.secret)
                .push_str(".")
                .finish();
            Self::notify(&env, &message);
            return Ok(message);
        }

        session::store_attempts(&env, remaining);
        Self::bump_instance(&env);
        let message = Utf8Writer::new(&env)
            .push_str("Try gain! You still have ")
            .push_u32(remaining)
            .push_str(" attempts!")
            .finish();
        Self::notify(&env, &message);
        Ok(message)
    }

    pub fn reward_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::RewardToken)
            .unwrap()
    }

    // --- Internals ---
    fn is_deploying(env: &Env) -> bool {
        !env.storage().instance().has(&DataKey::Deployed)
    }

    fn pay_reward(env: &Env, player: &Address) {
        let token_addr = Self::reward_token(env.clone());
        let token = token::TokenClient::new(env, &token_addr);
        token.transfer(&env.current_contract_address(), player, &REWARD_AMOUNT);
        log!(env, "reward paid", player.clone(), REWARD_AMOUNT);
    }

    fn notify(env: &Env, message: &Bytes) {
        GameNotice {
            message: message.clone(),
        }
        .publish(env);
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_LEDGERS);
    }
}
