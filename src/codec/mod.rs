mod alphabet;
mod limbs;

pub mod base58;

use {thiserror::Error, tracing::trace};

pub use alphabet::ALPHABET;

/// Input rejected before any conversion work is done.
#[derive(Debug, Error)]
pub enum InvalidInput {
  #[error("empty hex string")]
  EmptyHex,

  #[error("invalid hex string: {0}")]
  Hex(#[from] hex::FromHexError),

  #[error("empty base58 string")]
  EmptyBase58,

  #[error("invalid base58 character(s): {0}")]
  InvalidBase58Chars(String),
}

/// Converts a hex string into its Base58 encoding.
///
/// Accepts either case, an optional `0x`/`0X` prefix at the very
/// start and whitespace anywhere after it. Leading `00` bytes become
/// leading `'1'`s.
pub fn hex_to_base58(input: &str) -> Result<String, InvalidInput> {
  let normalized = normalize_hex(input);
  if normalized.is_empty() {
    return Err(InvalidInput::EmptyHex);
  }

  // hex::decode reports byte offsets, so non-ascii chars are
  // reported here with their char position instead
  if normalized.chars().count() % 2 != 0 {
    return Err(hex::FromHexError::OddLength.into());
  }
  if let Some((index, c)) =
    normalized.chars().enumerate().find(|(_, c)| !c.is_ascii())
  {
    return Err(hex::FromHexError::InvalidHexCharacter { c, index }.into());
  }

  let bytes = hex::decode(&normalized)?;
  trace!("hex input normalized to {normalized}");
  Ok(base58::encode(&bytes))
}

/// Converts a Base58 string into lowercase hex without a prefix.
///
/// Leading `'1'`s become leading `00` bytes, so the output always
/// has an even number of digits.
pub fn base58_to_hex(input: &str) -> Result<String, InvalidInput> {
  let bytes = base58::decode(input.trim())?;
  Ok(hex::encode(bytes))
}

fn normalize_hex(input: &str) -> String {
  let digits = input
    .strip_prefix("0x")
    .or_else(|| input.strip_prefix("0X"))
    .unwrap_or(input);

  digits
    .chars()
    .filter(|c| !c.is_whitespace())
    .map(|c| c.to_ascii_lowercase())
    .collect()
}
