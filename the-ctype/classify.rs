//! Byte classification under each rule set.

use crate::{
  category::{
    Category,
    Class,
  },
  code::CharCode,
  property::{
    PropertyService,
    UnicodeProperties,
    legacy_code_point,
  },
  rule_set::RuleSet,
};

/// Classifies character codes, consulting `P` for legacy-code-page bytes.
#[derive(Clone, Debug, Default)]
pub struct Classifier<P = UnicodeProperties> {
  properties: P,
}

/// Generates one `is_*` method per category on [`Classifier`].
macro_rules! classifier_predicates {
  ($($(#[$attr:meta])* $name:ident => $category:ident,)*) => {
    $(
      $(#[$attr])*
      #[inline]
      pub fn $name(&self, code: CharCode, rule_set: RuleSet) -> bool {
        self.classify(code, Category::$category, rule_set)
      }
    )*
  };
}

impl<P: PropertyService> Classifier<P> {
  pub const fn new(properties: P) -> Self {
    Self { properties }
  }

  pub fn properties(&self) -> &P {
    &self.properties
  }

  /// Whether `code` belongs to `category` under `rule_set`. EOF belongs to
  /// no category.
  pub fn classify(&self, code: CharCode, category: Category, rule_set: RuleSet) -> bool {
    let Some(byte) = code.byte() else {
      return false;
    };

    match category {
      Category::Alnum => {
        self.primitive(byte, Category::Digit, rule_set)
          || self.primitive(byte, Category::Alpha, rule_set)
      },
      Category::Print if rule_set.is_ascii() => {
        byte == b' ' || self.primitive(byte, Category::Graph, rule_set)
      },
      Category::Print => {
        (self.primitive(byte, Category::Graph, rule_set)
          || self.primitive(byte, Category::Blank, rule_set))
          && !self.primitive(byte, Category::Control, rule_set)
      },
      _ => self.primitive(byte, category, rule_set),
    }
  }

  /// Every category `code` belongs to under `rule_set`.
  pub fn classes(&self, code: CharCode, rule_set: RuleSet) -> Class {
    Category::ALL
      .into_iter()
      .filter(|&category| self.classify(code, category, rule_set))
      .fold(Class::empty(), |acc, category| acc | Class::of(category))
  }

  classifier_predicates! {
    is_alnum => Alnum,
    is_alpha => Alpha,
    is_blank => Blank,
    is_cntrl => Control,
    is_digit => Digit,
    is_graph => Graph,
    is_lower => Lower,
    is_print => Print,
    is_punct => Punct,
    is_space => Space,
    is_upper => Upper,
    /// Hex digits are `0-9a-fA-F` under every rule set.
    is_xdigit => XDigit,
  }

  fn primitive(&self, byte: u8, category: Category, rule_set: RuleSet) -> bool {
    match (rule_set, category) {
      (_, Category::XDigit) => byte.is_ascii_hexdigit(),
      (RuleSet::Base | RuleSet::Utf8, _) => ascii_rule(byte, category),
      (RuleSet::LegacyCodePage, _) => self.legacy_rule(byte, category),
    }
  }

  fn legacy_rule(&self, byte: u8, category: Category) -> bool {
    if let Some(pinned) = category.legacy_override(byte) {
      return pinned;
    }
    if category == Category::Blank && byte == b'\t' {
      return true;
    }

    match category.legacy_pattern() {
      Some(pattern) => {
        self
          .properties
          .test_property(pattern, legacy_code_point(byte))
      },
      None => unreachable!("{category} has no legacy property pattern"),
    }
  }
}

/// The fixed ASCII ranges shared by the POSIX and UTF-8 rule sets. Bytes
/// above 0x7F belong to nothing.
fn ascii_rule(byte: u8, category: Category) -> bool {
  match category {
    Category::Alpha => matches!(byte, b'A'..=b'Z' | b'a'..=b'z'),
    Category::Blank => matches!(byte, b' ' | b'\t'),
    Category::Control => matches!(byte, 0x00..=0x1F | 0x7F),
    Category::Digit => byte.is_ascii_digit(),
    Category::Graph => matches!(byte, 0x21..=0x7E),
    Category::Lower => byte.is_ascii_lowercase(),
    Category::Punct => matches!(byte, 0x21..=0x2F | 0x3A..=0x40 | 0x5B..=0x60 | 0x7B..=0x7E),
    Category::Space => matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r'),
    Category::Upper => byte.is_ascii_uppercase(),
    Category::XDigit => byte.is_ascii_hexdigit(),
    Category::Alnum | Category::Print => {
      unreachable!("{category} is derived from the primitive categories")
    },
  }
}

static CLASSIFIER: Classifier<UnicodeProperties> = Classifier::new(UnicodeProperties);

/// Generates the free `is_*(code, rule_set)` functions backed by the bundled
/// [`UnicodeProperties`] service.
macro_rules! predicates {
  ($($name:ident => $category:ident,)*) => {
    $(
      #[doc = concat!(
        "Whether `code` is in the `", stringify!($category), "` category under `rule_set`.\n\n",
        "# Panics\n\nIf `code` is neither EOF nor a byte value."
      )]
      #[inline]
      #[track_caller]
      pub fn $name(code: i32, rule_set: RuleSet) -> bool {
        CLASSIFIER.classify(CharCode::new(code), Category::$category, rule_set)
      }
    )*
  };
}

predicates! {
  is_alnum => Alnum,
  is_alpha => Alpha,
  is_blank => Blank,
  is_cntrl => Control,
  is_digit => Digit,
  is_graph => Graph,
  is_lower => Lower,
  is_print => Print,
  is_punct => Punct,
  is_space => Space,
  is_upper => Upper,
  is_xdigit => XDigit,
}

/// Classifies `code` with the bundled Unicode property service.
#[track_caller]
pub fn classify(code: i32, category: Category, rule_set: RuleSet) -> bool {
  CLASSIFIER.classify(CharCode::new(code), category, rule_set)
}
