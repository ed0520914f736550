use std::num::NonZero;

/// The length of a non-empty list. An empty list has no length value at all, it is represented by
/// its own state instead.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Returns the length with one more node. Saturates rather than overflowing, a list can't
    /// actually hold `usize::MAX` nodes because each one occupies more than a byte.
    pub const fn succ(self) -> Length {
        Length(self.0.saturating_add(1))
    }

    /// Returns the length with `other` fewer nodes, or `None` if that would leave the list empty.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => Length::new(res),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn new(value: usize) -> Option<Length> {
        match NonZero::new(value) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
