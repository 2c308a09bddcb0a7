/// The Bitcoin Base58 alphabet, ordered by digit value.
///
/// Omits `0`, `O`, `I` and `l` so that encoded values can be
/// transcribed by humans without ambiguity.
pub const ALPHABET: &[u8; 58] =
  b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marks bytes that are not part of the alphabet.
const INVALID: u8 = 0xff;

/// Reverse lookup: ASCII byte -> digit value, or [`INVALID`].
const DIGITS: [u8; 128] = {
  let mut table = [INVALID; 128];
  let mut i = 0;
  while i < ALPHABET.len() {
    table[ALPHABET[i] as usize] = i as u8;
    i += 1;
  }
  table
};

/// Returns the character for a digit in `0..58`.
pub fn symbol(digit: u8) -> char {
  ALPHABET[digit as usize] as char
}

/// Returns the digit value of `c`, or `None` if it is not in the alphabet.
pub fn digit(c: char) -> Option<u8> {
  if !c.is_ascii() {
    return None;
  }
  match DIGITS[c as usize] {
    INVALID => None,
    d => Some(d),
  }
}

#[cfg(test)]
mod test {
  use {
    super::{digit, symbol, ALPHABET},
    std::collections::BTreeSet,
  };

  #[test]
  fn alphabet_is_distinct_and_starts_with_one() {
    let unique: BTreeSet<_> = ALPHABET.iter().collect();
    assert_eq!(unique.len(), 58);
    assert_eq!(symbol(0), '1');
    assert_eq!(symbol(57), 'z');
  }

  #[test]
  fn reverse_lookup_matches_alphabet() {
    for (i, c) in ALPHABET.iter().enumerate() {
      assert_eq!(digit(*c as char), Some(i as u8));
    }

    for c in ['0', 'O', 'I', 'l', '+', '/', ' ', 'é', '\u{7f}'] {
      assert_eq!(digit(c), None, "{c:?} must be rejected");
    }
  }
}
