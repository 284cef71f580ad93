use rand::Rng;

use crate::core::time::now_utc;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// `<millis since epoch in base36>-<6 random base36 chars>`.
///
/// Uniqueness is practical, not checked against existing collections.
pub fn create_id() -> String {
    let millis = now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("{}-{}", to_base36(millis.max(0) as u128), generate_suffix(SUFFIX_LEN))
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

fn generate_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut output = String::with_capacity(len);
    for _ in 0..len {
        let index = rng.gen_range(0..ALPHABET.len());
        output.push(ALPHABET[index] as char);
    }
    output
}
