//! Progressively revealed values.

/// A value that is either still hidden or already written on the lattice.
///
/// Step snapshots use `Slot` instead of a numeric placeholder so hidden values
/// can never take part in arithmetic.
///
/// # Examples
///
/// ```
/// use lattice_core::{Digit, Slot};
///
/// let hidden: Slot<Digit> = Slot::Hidden;
/// let shown = Slot::Revealed(Digit::D4);
///
/// assert!(hidden.is_hidden());
/// assert_eq!(shown.revealed(), Some(Digit::D4));
/// assert_eq!(shown.to_string(), "4");
/// assert_eq!(hidden.to_string(), "");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Slot<T> {
    /// Not yet written.
    #[default]
    Hidden,
    /// Written with the given value.
    Revealed(T),
}

impl<T> Slot<T> {
    /// Returns the revealed value, if any.
    #[must_use]
    pub fn revealed(self) -> Option<T> {
        match self {
            Slot::Hidden => None,
            Slot::Revealed(value) => Some(value),
        }
    }

    /// Returns a reference to the revealed value, if any.
    #[must_use]
    pub fn as_revealed(&self) -> Option<&T> {
        match self {
            Slot::Hidden => None,
            Slot::Revealed(value) => Some(value),
        }
    }

    /// Maps the revealed value, keeping hidden slots hidden.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Slot::Hidden => Slot::Hidden,
            Slot::Revealed(value) => Slot::Revealed(f(value)),
        }
    }

    /// Returns `value` revealed if `shown`, hidden otherwise.
    #[must_use]
    pub fn reveal_if(shown: bool, value: T) -> Self {
        if shown {
            Slot::Revealed(value)
        } else {
            Slot::Hidden
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Slot::Hidden, Slot::Revealed)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Hidden => Ok(()),
            Slot::Revealed(value) => value.fmt(f),
        }
    }
}
