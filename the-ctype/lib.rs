//! Locale-sensitive single-byte character classification and case conversion.
//!
//! Every byte (plus EOF) is classified under one of three [`RuleSet`]s: the
//! POSIX locale, a UTF-8 locale that treats single bytes exactly like POSIX,
//! and the windows-1252 code page, whose answers come from Unicode properties
//! of the byte's code point plus a few pinned exceptions.
//!
//! ```
//! use the_ctype::{RuleSet, is_punct, to_upper};
//!
//! assert!(is_punct(0xAE, RuleSet::LegacyCodePage));
//! assert!(!is_punct(0xAE, RuleSet::Utf8));
//! assert_eq!(to_upper('a' as i32, RuleSet::Base), 'A' as i32);
//! ```

pub mod case;
pub mod category;
pub mod classify;
pub mod code;
pub mod property;
pub mod rule_set;
pub mod table;

pub use case::{
  CaseTable,
  WINDOWS_1252_CASE,
  to_lower,
  to_upper,
};
pub use category::{
  Category,
  Class,
};
pub use classify::{
  Classifier,
  classify,
  is_alnum,
  is_alpha,
  is_blank,
  is_cntrl,
  is_digit,
  is_graph,
  is_lower,
  is_print,
  is_punct,
  is_space,
  is_upper,
  is_xdigit,
};
pub use code::{
  CharCode,
  CodeOutOfRange,
  EOF,
};
pub use property::{
  PropertyService,
  UnicodeProperties,
};
pub use rule_set::{
  Locale,
  RuleSet,
  UnsupportedLocale,
  resolve,
};
pub use table::CtypeTable;
