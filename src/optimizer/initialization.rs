use crate::alphabet::CipherSequence;
use crate::consts::ALPHABET_LEN;
use crate::key::Key;

/// Starting key from letter frequencies: the most common cipher letter maps to
/// the first letter of `plain_order`, the next to the second, and so on.
///
/// Ties between cipher letters go to the lower index. Once `plain_order` runs
/// out (or names a letter that is already taken) the lowest unused plaintext
/// letter is used, so the result is always a bijection.
pub fn frequency_key(seq: &CipherSequence, plain_order: &[u8]) -> Key {
    let counts = seq.letter_counts();

    let mut cipher_order: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
    cipher_order.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]).then(a.cmp(&b)));

    let mut mapping = [0u8; ALPHABET_LEN];
    let mut used = [false; ALPHABET_LEN];
    let mut preferred = plain_order.iter().copied();

    for &cipher in &cipher_order {
        let plain = preferred
            .by_ref()
            .find(|&p| (p as usize) < ALPHABET_LEN && !used[p as usize])
            .or_else(|| (0..ALPHABET_LEN as u8).find(|&p| !used[p as usize]))
            .unwrap_or(cipher);
        used[plain as usize] = true;
        mapping[cipher as usize] = plain;
    }

    let key = Key::from_mapping(mapping).unwrap_or_default();
    key.assert_bijection();
    key
}
