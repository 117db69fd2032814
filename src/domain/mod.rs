//! Core types: Item, Tag, ids, create requests and partial updates, plus the
//! pure change-detection and merge logic behind differential updates.

mod assemble;
mod change;
mod ids;
mod item;
mod patch;
mod request;
mod tag;
mod tag_set;

pub use assemble::merge;
pub use change::{ChangeKind, ChangeSet, detect};
pub use ids::{ItemId, ParseIdError, TagId};
pub use item::{Item, ItemBuilder, ItemDetails, ItemField, NewItem};
pub use patch::{ItemPatch, Patch, PatchError};
pub use request::CreateRequest;
pub use tag::{Tag, UNCATEGORISED_TAG_ID, UNCATEGORISED_TAG_NAME};
pub use tag_set::{dedup_tags, tags_equal};
