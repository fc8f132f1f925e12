//! The input domain of every classifier: a byte value or end-of-input.

use std::fmt;

use thiserror::Error;

/// Smallest accepted code, the end-of-input sentinel.
pub const EOF: i32 = -1;

/// A character code in `-1..=255`.
///
/// `-1` is the end-of-input sentinel ([`CharCode::EOF`]). Every other value is
/// a single byte, interpreted under whichever [`RuleSet`](crate::RuleSet) the
/// caller asks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharCode(i32);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("character code {code} is neither EOF (-1) nor a byte value (0..=255)")]
pub struct CodeOutOfRange {
  pub code: i32,
}

impl CharCode {
  pub const EOF: CharCode = CharCode(EOF);

  /// Wraps `code`, panicking when it lies outside `-1..=255`.
  ///
  /// An out-of-range code is a caller bug. Use [`CharCode::try_from`] to
  /// validate untrusted input first.
  #[inline]
  #[track_caller]
  pub fn new(code: i32) -> CharCode {
    match CharCode::try_from(code) {
      Ok(code) => code,
      Err(err) => panic!("{err}"),
    }
  }

  #[inline]
  pub const fn from_byte(byte: u8) -> CharCode {
    CharCode(byte as i32)
  }

  #[inline]
  pub const fn get(self) -> i32 {
    self.0
  }

  /// The byte value, or `None` for EOF.
  #[inline]
  pub const fn byte(self) -> Option<u8> {
    if self.0 == EOF { None } else { Some(self.0 as u8) }
  }

  #[inline]
  pub const fn is_eof(self) -> bool {
    self.0 == EOF
  }

  /// Every code in the domain: EOF first, then `0..=255`.
  pub fn all() -> impl Iterator<Item = CharCode> {
    std::iter::once(CharCode::EOF).chain((0..=u8::MAX).map(CharCode::from_byte))
  }
}

impl TryFrom<i32> for CharCode {
  type Error = CodeOutOfRange;

  #[inline]
  fn try_from(code: i32) -> Result<Self, Self::Error> {
    if (EOF..=i32::from(u8::MAX)).contains(&code) {
      Ok(CharCode(code))
    } else {
      Err(CodeOutOfRange { code })
    }
  }
}

impl From<u8> for CharCode {
  #[inline]
  fn from(byte: u8) -> Self {
    CharCode::from_byte(byte)
  }
}

impl From<CharCode> for i32 {
  #[inline]
  fn from(code: CharCode) -> Self {
    code.0
  }
}

impl fmt::Display for CharCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.byte() {
      Some(byte) => write!(f, "{byte:#04x}"),
      None => f.write_str("EOF"),
    }
  }
}
