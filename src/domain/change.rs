//! Change detection: compares a partial update against the stored item.

use super::item::{Item, ItemField};
use super::patch::{ItemPatch, Patch};
use super::tag_set::tags_equal;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Which write path an update needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    NoChange,
    ScalarOnly,
    TagsOnly,
    Both,
}

impl ChangeKind {
    pub fn from_flags(scalar_changed: bool, tags_changed: bool) -> Self {
        match (scalar_changed, tags_changed) {
            (false, false) => ChangeKind::NoChange,
            (true, false) => ChangeKind::ScalarOnly,
            (false, true) => ChangeKind::TagsOnly,
            (true, true) => ChangeKind::Both,
        }
    }

    pub fn writes_scalars(self) -> bool {
        matches!(self, ChangeKind::ScalarOnly | ChangeKind::Both)
    }

    pub fn writes_tags(self) -> bool {
        matches!(self, ChangeKind::TagsOnly | ChangeKind::Both)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeKind::NoChange => "no change",
            ChangeKind::ScalarOnly => "fields only",
            ChangeKind::TagsOnly => "tags only",
            ChangeKind::Both => "fields and tags",
        };
        f.write_str(s)
    }
}

/// The difference between a stored item and a requested update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    fields: BTreeSet<ItemField>,
    tags_changed: bool,
}

impl ChangeSet {
    /// Scalar columns whose requested value differs from the stored one.
    pub fn changed_fields(&self) -> &BTreeSet<ItemField> {
        &self.fields
    }

    pub fn scalar_changed(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn tags_changed(&self) -> bool {
        self.tags_changed
    }

    pub fn is_empty(&self) -> bool {
        !self.scalar_changed() && !self.tags_changed
    }

    pub fn kind(&self) -> ChangeKind {
        ChangeKind::from_flags(self.scalar_changed(), self.tags_changed)
    }
}

fn required_differs<T: PartialEq>(patch: &Patch<T>, current: &T) -> bool {
    patch.as_set().is_some_and(|value| value != current)
}

fn optional_differs(patch: &Patch<String>, current: Option<&str>) -> bool {
    match patch {
        Patch::Keep => false,
        Patch::Set(value) => current != Some(value.as_str()),
        Patch::Clear => current.is_some(),
    }
}

/// Computes which scalar columns and whether the tag set would change.
///
/// Fields left as `Keep` never count as changed. Strings are compared
/// exactly. An all-`Keep` patch always yields an empty change set.
pub fn detect(current: &Item, patch: &ItemPatch) -> ChangeSet {
    let details = current.details();
    let mut fields = BTreeSet::new();

    let checks = [
        (ItemField::Name, required_differs(&patch.name, &details.name)),
        (
            ItemField::Description,
            optional_differs(&patch.description, details.description.as_deref()),
        ),
        (
            ItemField::DateStored,
            required_differs(&patch.date_stored, &details.date_stored),
        ),
        (
            ItemField::Quantity,
            required_differs(&patch.quantity, &details.quantity),
        ),
        (
            ItemField::StorageLocation,
            required_differs(&patch.storage_location, &details.storage_location),
        ),
        (
            ItemField::ItemLocation,
            required_differs(&patch.item_location, &details.item_location),
        ),
        (
            ItemField::Category,
            optional_differs(&patch.category, details.category.as_deref()),
        ),
    ];
    for (field, differs) in checks {
        if differs {
            fields.insert(field);
        }
    }

    let tags_changed = match &patch.tags {
        Patch::Keep => false,
        Patch::Set(tags) => !tags_equal(current.tags(), tags),
        Patch::Clear => !current.tags().is_empty(),
    };

    ChangeSet {
        fields,
        tags_changed,
    }
}
