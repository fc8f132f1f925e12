//! The twelve classification categories and what each one means under the
//! legacy code page.

use std::fmt;

use bitflags::bitflags;

/// Property patterns sent to the [`PropertyService`](crate::PropertyService)
/// for windows-1252 bytes. The strings are a contract with the service and use
/// Unicode regular-expression syntax.
pub mod pattern {
  pub const ALPHABETIC: &str = r"^\p{Alphabetic}$";
  pub const SPACE_SEPARATOR: &str = r"^\p{gc=Space_Separator}$";
  pub const CONTROL: &str = r"^\p{gc=Control}$";
  pub const DECIMAL_NUMBER: &str = r"^\p{gc=Decimal_Number}$";
  pub const GRAPHIC: &str = r"^[^\p{space}\p{gc=Control}\p{gc=Surrogate}\p{gc=Unassigned}]$";
  pub const LOWERCASE: &str = r"^\p{Lowercase}$";
  pub const PUNCTUATION: &str = r"^(?:(?!\p{L})[\p{P}\p{S}])$";
  pub const WHITE_SPACE: &str = r"\s";
  pub const UPPERCASE: &str = r"^\p{Uppercase}$";

  pub const ALL: [&str; 9] = [
    ALPHABETIC,
    SPACE_SEPARATOR,
    CONTROL,
    DECIMAL_NUMBER,
    GRAPHIC,
    LOWERCASE,
    PUNCTUATION,
    WHITE_SPACE,
    UPPERCASE,
  ];
}

/// Modifier letter circumflex (U+02C6). Always alphabetic under the code page.
pub const CIRCUMFLEX: u8 = 0x88;
/// Soft hyphen (U+00AD). Never a control character under the code page.
pub const SOFT_HYPHEN: u8 = 0xAD;
/// Superscript two, three and one. Never digits under the code page.
pub const SUPERSCRIPT_DIGITS: [u8; 3] = [0xB2, 0xB3, 0xB9];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
  Alnum,
  Alpha,
  Blank,
  Control,
  Digit,
  Graph,
  Lower,
  Print,
  Punct,
  Space,
  Upper,
  XDigit,
}

impl Category {
  pub const ALL: [Category; 12] = [
    Category::Alnum,
    Category::Alpha,
    Category::Blank,
    Category::Control,
    Category::Digit,
    Category::Graph,
    Category::Lower,
    Category::Print,
    Category::Punct,
    Category::Space,
    Category::Upper,
    Category::XDigit,
  ];

  /// Categories answered directly rather than composed from others.
  pub const PRIMITIVE: [Category; 10] = [
    Category::Alpha,
    Category::Blank,
    Category::Control,
    Category::Digit,
    Category::Graph,
    Category::Lower,
    Category::Punct,
    Category::Space,
    Category::Upper,
    Category::XDigit,
  ];

  /// `Alnum` and `Print` are always computed from the primitive categories.
  #[inline]
  pub const fn is_derived(self) -> bool {
    matches!(self, Category::Alnum | Category::Print)
  }

  /// The POSIX character class name, as used in `[[:alpha:]]`.
  pub const fn name(self) -> &'static str {
    match self {
      Category::Alnum => "alnum",
      Category::Alpha => "alpha",
      Category::Blank => "blank",
      Category::Control => "cntrl",
      Category::Digit => "digit",
      Category::Graph => "graph",
      Category::Lower => "lower",
      Category::Print => "print",
      Category::Punct => "punct",
      Category::Space => "space",
      Category::Upper => "upper",
      Category::XDigit => "xdigit",
    }
  }

  /// The property pattern queried for this category under the legacy code
  /// page. `Blank` additionally accepts tab without a query. `XDigit` and the
  /// derived categories never query.
  pub const fn legacy_pattern(self) -> Option<&'static str> {
    match self {
      Category::Alpha => Some(pattern::ALPHABETIC),
      Category::Blank => Some(pattern::SPACE_SEPARATOR),
      Category::Control => Some(pattern::CONTROL),
      Category::Digit => Some(pattern::DECIMAL_NUMBER),
      Category::Graph => Some(pattern::GRAPHIC),
      Category::Lower => Some(pattern::LOWERCASE),
      Category::Punct => Some(pattern::PUNCTUATION),
      Category::Space => Some(pattern::WHITE_SPACE),
      Category::Upper => Some(pattern::UPPERCASE),
      Category::XDigit | Category::Alnum | Category::Print => None,
    }
  }

  /// A pinned answer for `byte` under the legacy code page that wins over
  /// whatever the property service says.
  ///
  /// These pin the behaviour of the reference platform the code page tables
  /// were recorded on. They are data, not a rule, and must not be widened.
  pub fn legacy_override(self, byte: u8) -> Option<bool> {
    match self {
      Category::Alpha if byte == CIRCUMFLEX => Some(true),
      Category::Control if byte == SOFT_HYPHEN => Some(false),
      Category::Digit if SUPERSCRIPT_DIGITS.contains(&byte) => Some(false),
      _ => None,
    }
  }

  pub fn from_name(name: &str) -> Option<Category> {
    Category::ALL
      .into_iter()
      .find(|category| category.name() == name)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

bitflags! {
  /// A set of categories, one bit each.
  #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
  pub struct Class: u16 {
    const ALNUM   = 1 << 0;
    const ALPHA   = 1 << 1;
    const BLANK   = 1 << 2;
    const CONTROL = 1 << 3;
    const DIGIT   = 1 << 4;
    const GRAPH   = 1 << 5;
    const LOWER   = 1 << 6;
    const PRINT   = 1 << 7;
    const PUNCT   = 1 << 8;
    const SPACE   = 1 << 9;
    const UPPER   = 1 << 10;
    const XDIGIT  = 1 << 11;
  }
}

impl Class {
  pub const fn of(category: Category) -> Class {
    match category {
      Category::Alnum => Class::ALNUM,
      Category::Alpha => Class::ALPHA,
      Category::Blank => Class::BLANK,
      Category::Control => Class::CONTROL,
      Category::Digit => Class::DIGIT,
      Category::Graph => Class::GRAPH,
      Category::Lower => Class::LOWER,
      Category::Print => Class::PRINT,
      Category::Punct => Class::PUNCT,
      Category::Space => Class::SPACE,
      Category::Upper => Class::UPPER,
      Category::XDigit => Class::XDIGIT,
    }
  }

  #[inline]
  pub fn has(self, category: Category) -> bool {
    self.contains(Class::of(category))
  }
}

impl From<Category> for Class {
  fn from(category: Category) -> Self {
    Class::of(category)
  }
}
