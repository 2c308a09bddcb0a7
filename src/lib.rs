//! Hex <-> Base58 conversion using the Bitcoin alphabet, without
//! checksums or version bytes.
//!
//! Leading zero bytes are preserved across both directions: each
//! `00` byte maps to one leading `'1'` and back.

pub mod cli;
pub mod codec;

pub use codec::{
  base58,
  base58_to_hex,
  hex_to_base58,
  InvalidInput,
  ALPHABET,
};
