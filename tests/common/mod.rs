#![allow(dead_code)]

use cipherforge::config::CrackConfig;
use cipherforge::key::Key;

pub const PLAINTEXT: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of light, it was the season of darkness, it was the spring of \
hope, it was the winter of despair. We had everything before us, we had nothing before us, we \
were all going direct to heaven, we were all going direct the other way. There were a king \
with a large jaw and a queen with a plain face on the throne of England.";

/// Cipher letter `i` decodes to the i-th letter of this string.
pub const SECRET_ALPHABET: &str = "qwertyuiopasdfghjklzxcvbnm";

pub fn secret_key() -> Key {
    SECRET_ALPHABET.parse().unwrap()
}

/// Enciphers `plain` so that `key.decode` gives it back.
pub fn encrypt(plain: &str, key: &Key) -> String {
    key.inverse().decode(plain)
}

pub fn ciphertext() -> String {
    encrypt(PLAINTEXT, &secret_key())
}

/// Small but complete search: few restarts, short schedule, fixed seed.
pub fn quick_config(seed: u64) -> CrackConfig {
    let mut cfg = CrackConfig::default();
    cfg.search.restarts = 3;
    cfg.search.max_iterations = 4_000;
    cfg.search.early_stall = 2_000;
    cfg.search.seed = Some(seed);
    cfg
}
