//! Set comparison over unordered tag collections.

use super::tag::Tag;
use std::collections::HashSet;

/// Returns true when both collections hold the same tags.
///
/// Order is irrelevant and duplicates collapse. Tags match on both id and
/// name. Accepts any collection of tag references, so a slice can be
/// compared with a set.
///
/// ```
/// use larder::domain::{Tag, TagId, tags_equal};
///
/// let a = vec![Tag::new(TagId::new(1), "a"), Tag::new(TagId::new(2), "b")];
/// let b = [Tag::new(TagId::new(2), "b"), Tag::new(TagId::new(1), "a")];
/// assert!(tags_equal(&a, &b));
/// ```
pub fn tags_equal<'a, A, B>(a: A, b: B) -> bool
where
    A: IntoIterator<Item = &'a Tag>,
    B: IntoIterator<Item = &'a Tag>,
{
    let a: HashSet<&Tag> = a.into_iter().collect();
    let b: HashSet<&Tag> = b.into_iter().collect();
    a == b
}

/// Removes repeated tags, keeping the first occurrence of each id.
///
/// Only ids are written as associations, so two tags with the same id and
/// different names count as one.
pub fn dedup_tags(tags: impl IntoIterator<Item = Tag>) -> Vec<Tag> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.id()))
        .collect()
}
