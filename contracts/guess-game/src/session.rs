//! The one live game session.
//!
//! Both fields live under fixed instance-storage keys as decimal strings, so
//! every caller shares the same session. `start_session` overwrites it and
//! nothing ever removes it.

use call_args::{encode_decimal, MAX_DECIMAL_DIGITS};
use soroban_sdk::{Env, String, Symbol};

use crate::Error;

pub const RANDOM_KEY: &str = "random_key";
pub const ATTEMPTS_KEY: &str = "attempts_key";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Session {
    pub secret: u32,
    pub remaining_attempts: u32,
}

pub fn load(env: &Env) -> Result<Session, Error> {
    let secret = load_field(env, RANDOM_KEY)?;
    let remaining_attempts = load_field(env, ATTEMPTS_KEY)?;
    Ok(Session {
        secret,
        remaining_attempts,
    })
}

pub fn store(env: &Env, session: &Session) {
    store_field(env, RANDOM_KEY, session.secret);
    store_attempts(env, session.remaining_attempts);
}

pub fn store_attempts(env: &Env, attempts: u32) {
    store_field(env, ATTEMPTS_KEY, attempts);
}

fn load_field(env: &Env, key: &str) -> Result<u32, Error> {
    let raw: String = env
        .storage()
        .instance()
        .get(&Symbol::new(env, key))
        .ok_or(Error::MissingSessionState)?;
    parse_decimal(&raw)
}

fn store_field(env: &Env, key: &str, value: u32) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, key), &format_decimal(env, value));
}

// ============================================================================
// Decimal codec
// ============================================================================

pub fn format_decimal(env: &Env, value: u32) -> String {
    let mut buf = [0u8; MAX_DECIMAL_DIGITS];
    String::from_bytes(env, encode_decimal(value, &mut buf))
}

/// Plain ASCII digits only: no sign, no whitespace, no empty string.
pub fn parse_decimal(value: &String) -> Result<u32, Error> {
    let len = value.len() as usize;
    if len == 0 || len > MAX_DECIMAL_DIGITS {
        return Err(Error::ParseError);
    }
    let mut buf = [0u8; MAX_DECIMAL_DIGITS];
    value.copy_into_slice(&mut buf[..len]);

    let mut out: u32 = 0;
    for &b in &buf[..len] {
        if !b.is_ascii_digit() {
            return Err(Error::ParseError);
        }
        out = out
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or(Error::ParseError)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{format_decimal, parse_decimal};
    use crate::Error;
    use soroban_sdk::{Env, String};

    #[test]
    fn decimal_format_matches_plain_digits() {
        let env = Env::default();
        assert_eq!(format_decimal(&env, 0), String::from_str(&env, "0"));
        assert_eq!(format_decimal(&env, 4), String::from_str(&env, "4"));
        assert_eq!(format_decimal(&env, 97), String::from_str(&env, "97"));
        assert_eq!(
            format_decimal(&env, u32::MAX),
            String::from_str(&env, "4294967295")
        );
    }

    #[test]
    fn decimal_parse_reads_back_stored_values() {
        let env = Env::default();
        for v in [0u32, 1, 4, 20, 99, 4_294_967_295] {
            assert_eq!(parse_decimal(&format_decimal(&env, v)), Ok(v));
        }
        assert_eq!(parse_decimal(&String::from_str(&env, "007")), Ok(7));
    }

    #[test]
    fn decimal_parse_rejects_garbage() {
        let env = Env::default();
        for bad in ["", "-1", "+1", " 3", "3 ", "1a", "4294967296", "99999999999"] {
            assert_eq!(
                parse_decimal(&String::from_str(&env, bad)),
                Err(Error::ParseError),
                "accepted {:?}",
                bad
            );
        }
    }
}
