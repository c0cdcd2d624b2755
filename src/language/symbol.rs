use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A unique, unforgeable token. Two Symbols are equal only if one was cloned from the other,
/// regardless of their descriptions.
///
/// Cloning a Symbol shares its identity, which is also why it can't be deep cloned: there is no way
/// to produce a distinct Symbol that is equal to the original.
///
/// # Examples
/// ```
/// # use mjd_utils::language::Symbol;
/// let a = Symbol::new("token");
/// let b = Symbol::new("token");
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone)]
pub struct Symbol(Arc<SymbolInner>);

struct SymbolInner {
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: impl Into<String>) -> Symbol {
        Symbol(Arc::new(SymbolInner {
            description: Some(description.into()),
        }))
    }

    /// Creates a Symbol without a description.
    pub fn anonymous() -> Symbol {
        Symbol(Arc::new(SymbolInner { description: None }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}
