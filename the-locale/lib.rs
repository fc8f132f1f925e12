//! The process-wide active locale and the classifiers that read it.
//!
//! `the-ctype` takes the rule set as an argument. This crate keeps the one
//! piece of global state, the active locale, and provides the familiar
//! locale-implicit functions on top of it: `isalpha(c)` answers under
//! whatever locale was last passed to [`set_locale`].

use parking_lot::RwLock;
use the_ctype::{
  Category,
  CharCode,
  CtypeTable,
  RuleSet,
  resolve,
};

pub use the_ctype::Locale;

// The POSIX locale is active until someone selects another one.
static LOCALE: RwLock<Locale> = RwLock::new(Locale::posix());

/// The active locale.
pub fn current_locale() -> Locale {
  *LOCALE.read()
}

/// The rule set selected by the active locale.
///
/// # Panics
///
/// If the active locale does not select a rule set.
#[track_caller]
pub fn current_rule_set() -> RuleSet {
  resolve(&LOCALE.read())
}

/// Makes `locale` the active locale and returns the previous one.
pub fn set_locale(locale: Locale) -> Locale {
  let previous = std::mem::replace(&mut *LOCALE.write(), locale);
  tracing::debug!(?previous, current = ?locale, "switched active locale");
  previous
}

/// Runs `f` with `locale` active, restoring the previous locale afterwards,
/// including when `f` panics.
pub fn with_locale<R>(locale: Locale, f: impl FnOnce() -> R) -> R {
  struct Restore(Locale);

  impl Drop for Restore {
    fn drop(&mut self) {
      set_locale(self.0);
    }
  }

  let _restore = Restore(set_locale(locale));
  f()
}

#[inline]
#[track_caller]
fn table(locale: &Locale) -> &'static CtypeTable {
  CtypeTable::get(resolve(locale))
}

/// Generates `isfoo(c)` over the active locale and `isfoo_l(c, locale)`
/// over an explicit one.
macro_rules! locale_predicates {
  ($($name:ident, $name_l:ident => $category:ident;)*) => {
    $(
      #[inline]
      #[track_caller]
      pub fn $name(c: i32) -> bool {
        $name_l(c, &current_locale())
      }

      #[inline]
      #[track_caller]
      pub fn $name_l(c: i32, locale: &Locale) -> bool {
        table(locale).contains(CharCode::new(c), Category::$category)
      }
    )*
  };
}

locale_predicates! {
  isalnum, isalnum_l => Alnum;
  isalpha, isalpha_l => Alpha;
  isblank, isblank_l => Blank;
  iscntrl, iscntrl_l => Control;
  isdigit, isdigit_l => Digit;
  isgraph, isgraph_l => Graph;
  islower, islower_l => Lower;
  isprint, isprint_l => Print;
  ispunct, ispunct_l => Punct;
  isspace, isspace_l => Space;
  isupper, isupper_l => Upper;
  isxdigit, isxdigit_l => XDigit;
}

#[inline]
#[track_caller]
pub fn tolower(c: i32) -> i32 {
  tolower_l(c, &current_locale())
}

#[inline]
#[track_caller]
pub fn toupper(c: i32) -> i32 {
  toupper_l(c, &current_locale())
}

#[inline]
#[track_caller]
pub fn tolower_l(c: i32, locale: &Locale) -> i32 {
  table(locale).to_lower(CharCode::new(c)).get()
}

#[inline]
#[track_caller]
pub fn toupper_l(c: i32, locale: &Locale) -> i32 {
  table(locale).to_upper(CharCode::new(c)).get()
}
