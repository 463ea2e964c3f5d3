//! The absent / single / many result shape.

use serde::Serialize;

/// A parse result holding zero, one, or several items.
///
/// Element content and attribute values both use this shape: nothing parsed
/// is [`Compact::Absent`], exactly one item stands alone as
/// [`Compact::Single`], and two or more items are kept in order as
/// [`Compact::Many`]. [`Compact::from_vec`] always picks the smallest case.
///
/// `Many` normally holds at least two items. The one exception is the
/// `$specials` pseudo-attribute, which is always a sequence regardless of
/// length and is built with `Many` directly.
///
/// Serializes as `null`, the bare item, or an array respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Compact<T> {
    /// No items.
    Absent,
    /// Exactly one item.
    Single(T),
    /// An ordered sequence of items.
    Many(Vec<T>),
}

impl<T> Compact<T> {
    /// Collapse a list into its compact form.
    #[must_use]
    pub fn from_vec(mut items: Vec<T>) -> Self {
        if items.len() > 1 {
            Self::Many(items)
        } else {
            items.pop().map_or(Self::Absent, Self::Single)
        }
    }

    /// Expand back into a list: `Absent` is empty, `Single` is a singleton.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// View the items as a slice, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Absent => &[],
            Self::Single(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true for [`Compact::Absent`] (and for an empty `Many`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns true only for [`Compact::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Default for Compact<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Vec<T>> for Compact<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Compact<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Compact<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Compact<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
