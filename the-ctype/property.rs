//! Unicode property queries for windows-1252 bytes.
//!
//! The classifier never looks at Unicode data itself. For each legacy-code-page
//! byte it maps the byte to a code point and asks a [`PropertyService`]
//! whether that code point matches one of the patterns in
//! [`category::pattern`](crate::category::pattern).

use encoding_rs::WINDOWS_1252;
use once_cell::sync::Lazy;
use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

use crate::category::pattern;

/// Answers "does this code point match this property pattern".
pub trait PropertyService {
  fn test_property(&self, pattern: &str, code_point: u32) -> bool;
}

impl<T: PropertyService + ?Sized> PropertyService for &T {
  #[inline]
  fn test_property(&self, pattern: &str, code_point: u32) -> bool {
    (**self).test_property(pattern, code_point)
  }
}

impl<T: PropertyService + ?Sized> PropertyService for Box<T> {
  #[inline]
  fn test_property(&self, pattern: &str, code_point: u32) -> bool {
    (**self).test_property(pattern, code_point)
  }
}

/// Evaluates the classifier's patterns against the Unicode tables compiled
/// into this crate and into `core`.
///
/// Panics on a pattern it does not recognise.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeProperties;

impl PropertyService for UnicodeProperties {
  fn test_property(&self, pattern: &str, code_point: u32) -> bool {
    match Property::from_pattern(pattern) {
      Some(property) => property.matches(code_point),
      None => panic!("unsupported property pattern {pattern:?}"),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Property {
  Alphabetic,
  SpaceSeparator,
  Control,
  DecimalNumber,
  Graphic,
  Lowercase,
  Punctuation,
  WhiteSpace,
  Uppercase,
}

impl Property {
  fn from_pattern(text: &str) -> Option<Property> {
    let property = match text {
      pattern::ALPHABETIC => Property::Alphabetic,
      pattern::SPACE_SEPARATOR => Property::SpaceSeparator,
      pattern::CONTROL => Property::Control,
      pattern::DECIMAL_NUMBER => Property::DecimalNumber,
      pattern::GRAPHIC => Property::Graphic,
      pattern::LOWERCASE => Property::Lowercase,
      pattern::PUNCTUATION => Property::Punctuation,
      pattern::WHITE_SPACE => Property::WhiteSpace,
      pattern::UPPERCASE => Property::Uppercase,
      _ => return None,
    };
    Some(property)
  }

  fn matches(self, code_point: u32) -> bool {
    // Surrogates are not scalar values. They match none of the patterns:
    // the graphic pattern excludes them explicitly.
    let Some(ch) = char::from_u32(code_point) else {
      return false;
    };

    match self {
      Property::Alphabetic => ch.is_alphabetic(),
      Property::SpaceSeparator => {
        matches!(get_general_category(ch), GeneralCategory::SpaceSeparator)
      },
      Property::Control => matches!(get_general_category(ch), GeneralCategory::Control),
      Property::DecimalNumber => {
        matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
      },
      Property::Graphic => {
        !char_is_white_space(ch)
          && !matches!(
            get_general_category(ch),
            GeneralCategory::Control | GeneralCategory::Surrogate | GeneralCategory::Unassigned
          )
      },
      Property::Lowercase => ch.is_lowercase(),
      Property::Punctuation => char_is_punctuation_or_symbol(ch),
      Property::WhiteSpace => char_is_regex_space(ch),
      Property::Uppercase => ch.is_uppercase(),
    }
  }
}

/// The Unicode White_Space property.
#[inline]
fn char_is_white_space(ch: char) -> bool {
  ch.is_whitespace()
}

/// The `\s` class: White_Space plus the byte order mark, without NEL.
#[inline]
fn char_is_regex_space(ch: char) -> bool {
  ch == '\u{FEFF}' || (char_is_white_space(ch) && ch != '\u{85}')
}

/// Punctuation or symbol, excluding anything that is also a letter.
#[inline]
fn char_is_punctuation_or_symbol(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
      | GeneralCategory::MathSymbol
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ModifierSymbol
      | GeneralCategory::OtherSymbol
  )
}

static LEGACY_CODE_POINTS: Lazy<[u32; 256]> = Lazy::new(|| {
  let mut code_points = [0; 256];
  for (byte, slot) in (0..=u8::MAX).zip(code_points.iter_mut()) {
    let bytes = [byte];
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);
    *slot = text.chars().next().map_or(u32::from(byte), u32::from);
  }
  code_points
});

/// The Unicode code point for a windows-1252 byte.
///
/// Follows the WHATWG mapping, so the five bytes the code page leaves
/// undefined (0x81, 0x8D, 0x8F, 0x90, 0x9D) become the C1 controls with the
/// same value.
#[inline]
pub fn legacy_code_point(byte: u8) -> u32 {
  LEGACY_CODE_POINTS[usize::from(byte)]
}
