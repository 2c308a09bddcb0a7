use {
  super::{
    alphabet::{self, ALPHABET},
    limbs::Limbs,
    InvalidInput,
  },
  std::collections::BTreeSet,
  tracing::trace,
};

const BASE: u32 = ALPHABET.len() as u32;

/// Encodes bytes as Base58.
///
/// Every leading zero byte becomes one leading `'1'`, the rest
/// of the input is treated as a big-endian integer and written
/// out in radix 58 without any further padding.
pub fn encode(bytes: &[u8]) -> String {
  let zeros = bytes.iter().take_while(|b| **b == 0).count();

  let mut n = Limbs::from_be_bytes(&bytes[zeros..]);
  let mut digits = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
  while !n.is_zero() {
    digits.push(n.div_rem(BASE) as u8);
  }

  let mut output = String::with_capacity(zeros + digits.len());
  output.extend(std::iter::repeat(alphabet::symbol(0)).take(zeros));
  output.extend(digits.into_iter().rev().map(alphabet::symbol));

  trace!("encoded {} bytes into {} base58 chars", bytes.len(), output.len());
  output
}

/// Decodes a Base58 string into bytes.
///
/// Every leading `'1'` becomes one leading zero byte. The input
/// is rejected if it is empty or contains anything outside of the
/// alphabet, in which case all offending characters are reported.
pub fn decode(input: &str) -> Result<Vec<u8>, InvalidInput> {
  if input.is_empty() {
    return Err(InvalidInput::EmptyBase58);
  }

  let mut digits = Vec::with_capacity(input.len());
  let mut invalid = BTreeSet::new();
  for c in input.chars() {
    match alphabet::digit(c) {
      Some(d) => digits.push(d),
      None => {
        invalid.insert(c);
      }
    }
  }

  if !invalid.is_empty() {
    return Err(InvalidInput::InvalidBase58Chars(
      invalid.into_iter().collect(),
    ));
  }

  let mut n = Limbs::default();
  for d in digits.iter() {
    n.mul_add(BASE, *d as u32);
  }

  let zeros = digits.iter().take_while(|d| **d == 0).count();
  let mut output = vec![0u8; zeros];
  output.extend(n.to_be_bytes());

  trace!("decoded {} base58 chars into {} bytes", input.len(), output.len());
  Ok(output)
}
