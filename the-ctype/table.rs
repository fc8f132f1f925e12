//! Precomputed classification and case tables, one per rule set.
//!
//! A table answers exactly what [`Classifier`] and the case functions answer,
//! with one array lookup per query.

use once_cell::sync::Lazy;

use crate::{
  category::{
    Category,
    Class,
  },
  classify::Classifier,
  code::CharCode,
  property::{
    PropertyService,
    UnicodeProperties,
  },
  rule_set::RuleSet,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtypeTable {
  rule_set: RuleSet,
  classes:  [Class; 256],
  lower:    [u8; 256],
  upper:    [u8; 256],
}

static BASE: Lazy<CtypeTable> = Lazy::new(|| build_bundled(RuleSet::Base));
static UTF8: Lazy<CtypeTable> = Lazy::new(|| build_bundled(RuleSet::Utf8));
static LEGACY: Lazy<CtypeTable> = Lazy::new(|| build_bundled(RuleSet::LegacyCodePage));

fn build_bundled(rule_set: RuleSet) -> CtypeTable {
  CtypeTable::build(&Classifier::new(UnicodeProperties), rule_set)
}

impl CtypeTable {
  /// The table for `rule_set` built from the bundled Unicode properties.
  /// Built on first use.
  pub fn get(rule_set: RuleSet) -> &'static CtypeTable {
    match rule_set {
      RuleSet::Base => &*BASE,
      RuleSet::Utf8 => &*UTF8,
      RuleSet::LegacyCodePage => &*LEGACY,
    }
  }

  pub fn build<P: PropertyService>(classifier: &Classifier<P>, rule_set: RuleSet) -> CtypeTable {
    let mut table = CtypeTable {
      rule_set,
      classes: [Class::empty(); 256],
      lower: [0; 256],
      upper: [0; 256],
    };

    for byte in 0..=u8::MAX {
      let code = CharCode::from_byte(byte);
      let index = usize::from(byte);
      table.classes[index] = classifier.classes(code, rule_set);
      table.lower[index] = byte_of(code.to_lower(rule_set));
      table.upper[index] = byte_of(code.to_upper(rule_set));
    }

    tracing::debug!(
      ?rule_set,
      alpha = table.count(Category::Alpha),
      punct = table.count(Category::Punct),
      "built ctype table"
    );
    table
  }

  #[inline]
  pub fn rule_set(&self) -> RuleSet {
    self.rule_set
  }

  #[inline]
  pub fn classes(&self, code: CharCode) -> Class {
    match code.byte() {
      Some(byte) => self.classes[usize::from(byte)],
      None => Class::empty(),
    }
  }

  #[inline]
  pub fn contains(&self, code: CharCode, category: Category) -> bool {
    self.classes(code).has(category)
  }

  #[inline]
  pub fn to_lower(&self, code: CharCode) -> CharCode {
    match code.byte() {
      Some(byte) => CharCode::from_byte(self.lower[usize::from(byte)]),
      None => code,
    }
  }

  #[inline]
  pub fn to_upper(&self, code: CharCode) -> CharCode {
    match code.byte() {
      Some(byte) => CharCode::from_byte(self.upper[usize::from(byte)]),
      None => code,
    }
  }

  /// How many bytes belong to `category`.
  pub fn count(&self, category: Category) -> usize {
    self
      .classes
      .iter()
      .filter(|class| class.has(category))
      .count()
  }
}

#[inline]
fn byte_of(code: CharCode) -> u8 {
  // Case mapping sends bytes to bytes; only EOF lacks one.
  code.byte().unwrap_or_default()
}
