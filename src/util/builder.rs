//! Building a `Vec` in order from items, sub-lists and conditional pieces
//!
//! ```
//! use common_core::util::builder::ArrayBuilder;
//!
//! let is_admin = true;
//! let avatar: Option<&str> = None;
//!
//! let widgets = ArrayBuilder::new()
//!     .item("profile")
//!     .maybe_item(avatar)
//!     .items_if(is_admin, || ["admin", "developer"])
//!     .build();
//!
//! assert_eq!(widgets, vec!["profile", "admin", "developer"]);
//! ```

/// One piece of a list being built: a single item or a run of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part<T> {
    Item(T),
    Items(Vec<T>),
}

impl<T> From<T> for Part<T> {
    fn from(item: T) -> Self {
        Part::Item(item)
    }
}

impl<T> From<Option<T>> for Part<T> {
    fn from(item: Option<T>) -> Self {
        Part::Items(item.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Part<T> {
    fn from(items: Vec<T>) -> Self {
        Part::Items(items)
    }
}

/// Flatten `parts` into a single list, in argument order.
pub fn build_array<T>(parts: impl IntoIterator<Item = Part<T>>) -> Vec<T> {
    let mut result = Vec::new();
    for part in parts {
        match part {
            Part::Item(item) => result.push(item),
            Part::Items(items) => result.extend(items),
        }
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayBuilder<T> {
    items: Vec<T>,
}

impl<T> Default for ArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayBuilder<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn item(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn maybe_item(self, item: Option<T>) -> Self {
        self.items(item)
    }

    /// Add the item produced by `make` only when `condition` holds.
    pub fn item_if(self, condition: bool, make: impl FnOnce() -> T) -> Self {
        if condition { self.item(make()) } else { self }
    }

    pub fn items_if<I>(self, condition: bool, make: impl FnOnce() -> I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        if condition { self.items(make()) } else { self }
    }

    pub fn part(self, part: impl Into<Part<T>>) -> Self {
        match part.into() {
            Part::Item(item) => self.item(item),
            Part::Items(items) => self.items(items),
        }
    }

    pub fn build(self) -> Vec<T> {
        self.items
    }

    /// Append the built items to an existing list.
    pub fn append_to(self, target: &mut Vec<T>) {
        target.extend(self.items);
    }
}
