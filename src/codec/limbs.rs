/// An unbounded non-negative integer stored as base 2^32 limbs,
/// least significant limb first.
///
/// The limb vector never carries high zero limbs, so zero is
/// represented by an empty vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limbs(Vec<u32>);

impl Limbs {
  /// Interprets `bytes` as a big-endian unsigned integer.
  pub fn from_be_bytes(bytes: &[u8]) -> Self {
    let mut limbs: Vec<u32> = bytes
      .rchunks(4)
      .map(|chunk| {
        chunk
          .iter()
          .fold(0u32, |acc, byte| (acc << 8) | *byte as u32)
      })
      .collect();
    trim(&mut limbs);
    Self(limbs)
  }

  /// Minimal big-endian byte representation, empty for zero.
  pub fn to_be_bytes(&self) -> Vec<u8> {
    self
      .0
      .iter()
      .rev()
      .flat_map(|limb| limb.to_be_bytes())
      .skip_while(|byte| *byte == 0)
      .collect()
  }

  pub fn is_zero(&self) -> bool {
    self.0.is_empty()
  }

  /// Divides in place by `divisor` and returns the remainder.
  pub fn div_rem(&mut self, divisor: u32) -> u32 {
    debug_assert!(divisor != 0);
    let divisor = divisor as u64;
    let mut rem = 0u64;
    for limb in self.0.iter_mut().rev() {
      let acc = (rem << 32) | *limb as u64;
      *limb = (acc / divisor) as u32;
      rem = acc % divisor;
    }
    trim(&mut self.0);
    rem as u32
  }

  /// Computes `self * factor + addend` in place.
  pub fn mul_add(&mut self, factor: u32, addend: u32) {
    let mut carry = addend as u64;
    for limb in self.0.iter_mut() {
      let acc = *limb as u64 * factor as u64 + carry;
      *limb = acc as u32;
      carry = acc >> 32;
    }
    if carry != 0 {
      self.0.push(carry as u32);
    }
    trim(&mut self.0);
  }
}

fn trim(limbs: &mut Vec<u32>) {
  while limbs.last() == Some(&0) {
    limbs.pop();
  }
}

#[cfg(test)]
mod test {
  use super::Limbs;

  #[test]
  fn zero_has_no_limbs() {
    assert!(Limbs::from_be_bytes(&[]).is_zero());
    assert!(Limbs::from_be_bytes(&[0, 0, 0, 0, 0, 0]).is_zero());
    assert!(Limbs::default().to_be_bytes().is_empty());
  }

  #[test]
  fn bytes_are_minimal() {
    let n = Limbs::from_be_bytes(&[0, 0, 0x01, 0x02, 0x03, 0x04, 0x05]);
    assert_eq!(n.to_be_bytes(), vec![0x01, 0x02, 0x03, 0x04, 0x05]);
  }

  #[test]
  fn div_rem_matches_native() {
    let value: u128 = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210;
    let mut n = Limbs::from_be_bytes(&value.to_be_bytes());
    assert_eq!(n.div_rem(58) as u128, value % 58);
    assert_eq!(n.to_be_bytes(), trimmed(&(value / 58).to_be_bytes()));
  }

  #[test]
  fn mul_add_carries_into_new_limb() {
    let mut n = Limbs::from_be_bytes(&u32::MAX.to_be_bytes());
    n.mul_add(58, 57);
    let expected = u32::MAX as u64 * 58 + 57;
    assert_eq!(n.to_be_bytes(), trimmed(&expected.to_be_bytes()));
  }

  #[test]
  fn mul_add_on_zero() {
    let mut n = Limbs::default();
    n.mul_add(58, 0);
    assert!(n.is_zero());
    n.mul_add(58, 7);
    assert_eq!(n.to_be_bytes(), vec![7]);
  }

  fn trimmed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().copied().skip_while(|b| *b == 0).collect()
  }
}
