//! Resolution of a locale handle to the classification rules it selects.

use encoding_rs::{
  Encoding,
  UTF_8,
  WINDOWS_1252,
};
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

/// The closed set of classification policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleSet {
  /// The invariant POSIX ("C") locale.
  Base,
  /// A UTF-8 locale. Single bytes classify exactly as under [`RuleSet::Base`].
  Utf8,
  /// The windows-1252 single-byte code page.
  LegacyCodePage,
}

impl RuleSet {
  pub const ALL: [RuleSet; 3] = [RuleSet::Base, RuleSet::Utf8, RuleSet::LegacyCodePage];

  /// Whether bytes are classified by ASCII ranges rather than by the code page.
  #[inline]
  pub const fn is_ascii(self) -> bool {
    matches!(self, RuleSet::Base | RuleSet::Utf8)
  }
}

/// An opaque handle to a locale's LC_CTYPE settings.
///
/// Only the character encoding matters here. `None` stands for the POSIX
/// locale, which has no encoding beyond ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Locale {
  ctype: Option<&'static Encoding>,
}

impl Locale {
  pub const fn posix() -> Locale {
    Locale { ctype: None }
  }

  pub fn utf8() -> Locale {
    Locale { ctype: Some(UTF_8) }
  }

  pub fn windows_1252() -> Locale {
    Locale {
      ctype: Some(WINDOWS_1252),
    }
  }

  pub const fn with_encoding(encoding: &'static Encoding) -> Locale {
    Locale {
      ctype: Some(encoding),
    }
  }

  #[inline]
  pub const fn ctype_encoding(&self) -> Option<&'static Encoding> {
    self.ctype
  }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no character classification rules for the {encoding} encoding")]
pub struct UnsupportedLocale {
  pub encoding: &'static str,
}

impl TryFrom<&Locale> for RuleSet {
  type Error = UnsupportedLocale;

  fn try_from(locale: &Locale) -> Result<Self, Self::Error> {
    match locale.ctype {
      None => Ok(RuleSet::Base),
      Some(encoding) if encoding == UTF_8 => Ok(RuleSet::Utf8),
      Some(encoding) if encoding == WINDOWS_1252 => Ok(RuleSet::LegacyCodePage),
      Some(encoding) => Err(UnsupportedLocale {
        encoding: encoding.name(),
      }),
    }
  }
}

/// Resolves the rule set selected by `locale`.
///
/// A locale outside the three known rule sets means whatever manages the
/// active locale handed out something it never should have, so this panics.
#[track_caller]
pub fn resolve(locale: &Locale) -> RuleSet {
  match RuleSet::try_from(locale) {
    Ok(rule_set) => rule_set,
    Err(err) => {
      tracing::error!(%err, "active locale does not select a ctype rule set");
      panic!("{err}");
    },
  }
}
