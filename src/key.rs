use crate::alphabet::{index_to_lower, index_to_upper, letter_index};
use crate::consts::ALPHABET_LEN;
use crate::error::{CfResult, CipherForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Substitution key: `mapping[c]` is the plaintext index for cipher index `c`.
///
/// Always a permutation of `0..26`. The only mutation is [`Key::swap`], and
/// `Key` is `Copy`, so a saved best key can never alias the working one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Key {
    mapping: [u8; ALPHABET_LEN],
}

impl Key {
    pub fn identity() -> Self {
        let mut mapping = [0u8; ALPHABET_LEN];
        for (i, m) in mapping.iter_mut().enumerate() {
            *m = i as u8;
        }
        Self { mapping }
    }

    pub fn from_mapping(mapping: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let key = Self { mapping };
        if !key.is_bijection() {
            return Err(CipherForgeError::Validation(format!(
                "key is not a permutation of the alphabet: {:?}",
                mapping
            )));
        }
        Ok(key)
    }

    #[inline(always)]
    pub fn plain_index(&self, cipher: u8) -> u8 {
        self.mapping[cipher as usize]
    }

    pub fn as_array(&self) -> &[u8; ALPHABET_LEN] {
        &self.mapping
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.mapping.swap(a, b);
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &p in &self.mapping {
            let p = p as usize;
            if p >= ALPHABET_LEN || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }

    /// Panics if the key stopped being a permutation. Swaps cannot cause that,
    /// so a failure here is a bug rather than bad input.
    pub fn assert_bijection(&self) {
        assert!(
            self.is_bijection(),
            "invalid key state: {:?} is not a bijection",
            self.mapping
        );
    }

    pub fn inverse(&self) -> Key {
        let mut mapping = [0u8; ALPHABET_LEN];
        for (c, &p) in self.mapping.iter().enumerate() {
            mapping[p as usize] = c as u8;
        }
        Key { mapping }
    }

    /// Maps every ASCII letter through the key, keeping its case. Anything else
    /// is copied unchanged.
    pub fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match ch {
                'a'..='z' => index_to_lower(self.mapping[(ch as u8 - b'a') as usize]),
                'A'..='Z' => index_to_upper(self.mapping[(ch as u8 - b'A') as usize]),
                _ => ch,
            })
            .collect()
    }

    /// `"a->x, b->y, ..."` in cipher-letter order.
    pub fn mapping_string(&self) -> String {
        self.mapping
            .iter()
            .enumerate()
            .map(|(c, &p)| format!("{}->{}", index_to_lower(c as u8), index_to_lower(p)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The 26 plaintext letters in cipher-letter order.
    pub fn plain_alphabet(&self) -> String {
        self.mapping.iter().map(|&p| index_to_lower(p)).collect()
    }

    fn parse_pairs(s: &str) -> CfResult<Self> {
        let mut mapping = [u8::MAX; ALPHABET_LEN];
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (lhs, rhs) = pair.split_once("->").ok_or_else(|| {
                CipherForgeError::Validation(format!("malformed key pair '{}'", pair))
            })?;
            let c = single_letter(lhs)?;
            let p = single_letter(rhs)?;
            if mapping[c as usize] != u8::MAX {
                return Err(CipherForgeError::Validation(format!(
                    "cipher letter '{}' mapped twice",
                    index_to_lower(c)
                )));
            }
            mapping[c as usize] = p;
        }
        if let Some(missing) = mapping.iter().position(|&p| p == u8::MAX) {
            return Err(CipherForgeError::Validation(format!(
                "cipher letter '{}' has no mapping",
                index_to_lower(missing as u8)
            )));
        }
        Key::from_mapping(mapping)
    }

    fn parse_alphabet(s: &str) -> CfResult<Self> {
        let letters = s
            .trim()
            .chars()
            .map(letter_index)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| {
                CipherForgeError::Validation(format!("key '{}' contains non-letters", s.trim()))
            })?;
        let mapping: [u8; ALPHABET_LEN] = letters.try_into().map_err(|v: Vec<u8>| {
            CipherForgeError::Validation(format!(
                "key must have {} letters, got {}",
                ALPHABET_LEN,
                v.len()
            ))
        })?;
        Key::from_mapping(mapping)
    }
}

fn single_letter(s: &str) -> CfResult<u8> {
    let mut chars = s.trim().chars();
    match (chars.next().and_then(letter_index), chars.next()) {
        (Some(idx), None) => Ok(idx),
        _ => Err(CipherForgeError::Validation(format!(
            "'{}' is not a single letter",
            s.trim()
        ))),
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for Key {
    type Err = CipherForgeError;

    /// Accepts either the 26-letter plain alphabet or the `a->x, ...` rendering.
    fn from_str(s: &str) -> CfResult<Self> {
        if s.contains("->") {
            Self::parse_pairs(s)
        } else {
            Self::parse_alphabet(s)
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_alphabet())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.plain_alphabet()
    }
}

impl TryFrom<String> for Key {
    type Error = CipherForgeError;

    fn try_from(s: String) -> CfResult<Self> {
        s.parse()
    }
}
