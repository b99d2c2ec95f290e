#![cfg(test)]

use crate::{encode_decimal, Args, ArgsError, Utf8Writer, MAX_DECIMAL_DIGITS};
use soroban_sdk::{Bytes, Env};

#[test]
fn u32_is_little_endian() {
    let env = Env::default();
    let blob = Args::new(&env).add_u32(0x0102_0304).serialize();
    assert_eq!(blob, Bytes::from_slice(&env, &[0x04, 0x03, 0x02, 0x01]));
}

#[test]
fn string_is_length_prefixed() {
    let env = Env::default();
    let blob = Args::new(&env).add_str("bob").serialize();
    assert_eq!(
        blob,
        Bytes::from_slice(&env, &[3, 0, 0, 0, b'b', b'o', b'b'])
    );
}

#[test]
fn reads_fields_in_order() {
    let env = Env::default();
    let blob = Args::new(&env).add_str("alice").add_u32(31).serialize();

    let mut args = Args::from_bytes(blob);
    assert_eq!(args.next_string(), Ok(Bytes::from_slice(&env, b"alice")));
    assert_eq!(args.next_u32(), Ok(31));
    assert_eq!(args.remaining(), 0);
    assert_eq!(args.next_u32(), Err(ArgsError::OutOfRange));
}

#[test]
fn add_string_matches_add_str() {
    let env = Env::default();
    let name = Bytes::from_slice(&env, b"carol");
    assert_eq!(
        Args::new(&env).add_string(&name).serialize(),
        Args::new(&env).add_str("carol").serialize()
    );
}

#[test]
fn empty_blob_has_no_u32() {
    let env = Env::default();
    let mut args = Args::from_bytes(Bytes::new(&env));
    assert_eq!(args.next_u32(), Err(ArgsError::OutOfRange));
}

#[test]
fn short_u32_is_rejected() {
    let env = Env::default();
    let mut args = Args::from_bytes(Bytes::from_slice(&env, &[1, 2, 3]));
    assert_eq!(args.next_u32(), Err(ArgsError::OutOfRange));
    assert_eq!(args.remaining(), 3);
}

#[test]
fn truncated_string_leaves_offset_untouched() {
    let env = Env::default();
    // Declares 10 bytes but carries 2.
    let mut args = Args::from_bytes(Bytes::from_slice(&env, &[10, 0, 0, 0, b'h', b'i']));
    assert_eq!(args.next_string(), Err(ArgsError::OutOfRange));
    assert_eq!(args.remaining(), 6);
}

#[test]
fn huge_length_prefix_does_not_overflow() {
    let env = Env::default();
    let mut args = Args::from_bytes(Bytes::from_slice(&env, &[0xff, 0xff, 0xff, 0xff, 0]));
    assert_eq!(args.next_string(), Err(ArgsError::OutOfRange));
}

#[test]
fn decimal_encoding_edges() {
    let mut buf = [0u8; MAX_DECIMAL_DIGITS];
    assert_eq!(encode_decimal(0, &mut buf), b"0");
    assert_eq!(encode_decimal(7, &mut buf), b"7");
    assert_eq!(encode_decimal(1_000, &mut buf), b"1000");
    assert_eq!(encode_decimal(u32::MAX, &mut buf), b"4294967295");
}

#[test]
fn writer_concatenates_parts() {
    let env = Env::default();
    let name = Bytes::from_slice(&env, b"dave");
    let msg = Utf8Writer::new(&env)
        .push_str("Changed age of '")
        .push_bytes(&name)
        .push_str("' to '")
        .push_u32(42)
        .push_str("'")
        .finish();
    assert_eq!(msg, Bytes::from_slice(&env, b"Changed age of 'dave' to '42'"));
}
