//! Identifier management using string interning.
//!
//! Tensor and index names are compared constantly while resolving
//! contractions, filtering loose indices, and generating formulas. The
//! [`Id`] type interns each name once so those comparisons are symbol
//! equality instead of string equality.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// Uses a `Mutex` for thread-safe access; interning happens during diagram
/// construction, resolution during formula and label rendering.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// An interned tensor or index name.
///
/// # Examples
///
/// ```
/// use tensorgram_core::identifier::Id;
///
/// let i = Id::new("i");
/// let j = Id::new("j");
/// assert_ne!(i, j);
/// assert_eq!(Id::new("i"), i);
/// assert_eq!(i.to_string(), "i");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string, interning it if it is new.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a derived identifier with `suffix` appended to this name.
    ///
    /// Used to disambiguate renamed indices during multi-way summation
    /// (`k` becomes `k0`, `k1`, ...).
    pub fn with_suffix(self, suffix: usize) -> Self {
        let name = format!("{self}{suffix}");
        Self::new(&name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get()
            .expect("Interner is initialized by any Id construction")
            .lock()
            .expect("Failed to acquire interner lock");
        let name = interner
            .resolve(self.0)
            .expect("Symbol was created by this interner");
        write!(f, "{name}")
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        *self == Id::new(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(Id::new("alpha"), Id::new("alpha"));
        assert_ne!(Id::new("alpha"), Id::new("beta"));
    }

    #[test]
    fn test_display_resolves_name() {
        let id = Id::new("sigma");
        assert_eq!(id.to_string(), "sigma");
    }

    #[test]
    fn test_str_comparison() {
        let id = Id::new("mu");
        assert_eq!(id, "mu");
    }

    #[test]
    fn test_with_suffix() {
        let id = Id::new("k");
        assert_eq!(id.with_suffix(0), "k0");
        assert_eq!(id.with_suffix(12).to_string(), "k12");
    }
}
