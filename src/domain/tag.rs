//! Category tags attached to items.

use super::ids::TagId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row id of the sentinel tag given to items created without tags.
pub const UNCATEGORISED_TAG_ID: TagId = TagId::new(222);

/// Name of the sentinel tag.
pub const UNCATEGORISED_TAG_NAME: &str = "uncategorised";

/// A reusable category label, many-to-many with items.
///
/// Two tags are the same tag only if both the id and the name match, so a
/// renamed tag compares unequal to a stale copy of itself.
///
/// # Examples
///
/// ```
/// use larder::domain::{Tag, TagId};
///
/// let a = Tag::new(TagId::new(1), "frozen");
/// let b = Tag::new(TagId::new(1), "Frozen");
/// assert_ne!(a, b);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    name: String,
}

impl Tag {
    /// Creates a tag reference from its id and name.
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The sentinel "uncategorised" tag.
    pub fn uncategorised() -> Self {
        Self::new(UNCATEGORISED_TAG_ID, UNCATEGORISED_TAG_NAME)
    }

    /// Returns the tag id.
    pub fn id(&self) -> TagId {
        self.id
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for the sentinel tag id.
    pub fn is_uncategorised(&self) -> bool {
        self.id == UNCATEGORISED_TAG_ID
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({}, \"{}\")", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn uncategorised_uses_fixed_identity() {
        let tag = Tag::uncategorised();
        assert_eq!(tag.id(), TagId::new(222));
        assert_eq!(tag.name(), "uncategorised");
        assert!(tag.is_uncategorised());
    }

    #[test]
    fn equality_requires_id_and_name() {
        let base = Tag::new(TagId::new(5), "meat");
        assert_eq!(base, Tag::new(TagId::new(5), "meat"));
        assert_ne!(base, Tag::new(TagId::new(6), "meat"));
        assert_ne!(base, Tag::new(TagId::new(5), "fish"));
    }

    #[test]
    fn hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Tag::new(TagId::new(5), "meat"));
        set.insert(Tag::new(TagId::new(5), "meat"));
        set.insert(Tag::new(TagId::new(5), "Meat"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_id_and_name() {
        let json = serde_json::to_string(&Tag::new(TagId::new(3), "veg")).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"veg"}"#);
    }

    #[test]
    fn display_is_the_name() {
        assert_eq!(Tag::new(TagId::new(3), "veg").to_string(), "veg");
    }
}
