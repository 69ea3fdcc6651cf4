use cipherforge::alphabet::{index_to_lower, index_to_upper};
use cipherforge::consts::ALPHABET_LEN;
use cipherforge::key::Key;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Two rows of 13: cipher letters over their plaintext letters.
pub fn print_mapping(title: &str, key: &Key) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = ALPHABET_LEN / 2;
    let cipher: Vec<u8> = (0..ALPHABET_LEN as u8).collect();

    for chunk in cipher.chunks(cols) {
        let top: Vec<Cell> = chunk
            .iter()
            .map(|&c| {
                Cell::new(index_to_upper(c))
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        let bottom: Vec<Cell> = chunk
            .iter()
            .map(|&c| Cell::new(index_to_lower(key.plain_index(c))).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(top);
        table.add_row(bottom);
    }
    println!("{}", table);
}
