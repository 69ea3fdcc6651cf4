use crate::consts::ALPHABET_LEN;

/// Case-folded alphabet index of an ASCII letter.
#[inline(always)]
pub fn letter_index(ch: char) -> Option<u8> {
    match ch {
        'a'..='z' => Some(ch as u8 - b'a'),
        'A'..='Z' => Some(ch as u8 - b'A'),
        _ => None,
    }
}

#[inline(always)]
pub fn index_to_lower(idx: u8) -> char {
    (b'a' + idx) as char
}

#[inline(always)]
pub fn index_to_upper(idx: u8) -> char {
    (b'A' + idx) as char
}

/// The letters of a ciphertext as alphabet indices, with everything else
/// stripped. Built once per cracking attempt and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherSequence {
    symbols: Vec<u8>,
}

impl CipherSequence {
    pub fn from_text(text: &str) -> Self {
        Self {
            symbols: text.chars().filter_map(letter_index).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.symbols
    }

    pub fn letter_counts(&self) -> [usize; ALPHABET_LEN] {
        let mut counts = [0usize; ALPHABET_LEN];
        for &s in &self.symbols {
            counts[s as usize] += 1;
        }
        counts
    }
}

impl From<&str> for CipherSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_letters_and_folds_case() {
        let seq = CipherSequence::from_text("Ab, c!\n9 Z é");
        assert_eq!(seq.as_slice(), &[0, 1, 2, 25]);
    }

    #[test]
    fn counts_letters() {
        let seq = CipherSequence::from_text("aAb");
        let counts = seq.letter_counts();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }
}
