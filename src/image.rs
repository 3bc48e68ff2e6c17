//! Flat image records as reported by a container engine.
//!
//! [`ImageNode`] mirrors one entry of the engine's image list and is the unit every
//! other module works on. The serde field names match the engine's wire format, so a
//! pre-serialized array (`[{"Id": ..., "ParentId": ..., ...}]`) deserializes directly.

use serde::{Deserialize, Deserializer, Serialize};

/// Repo tag the engine reports for images nobody named.
pub const NONE_TAG: &str = "<none>:<none>";

/// Number of id characters shown in compact output.
pub const SHORT_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageNode {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(
        default,
        rename = "ParentId",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub parent_id: String,
    #[serde(
        default,
        rename = "RepoTags",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub repo_tags: Vec<String>,
    #[serde(default, rename = "VirtualSize")]
    pub virtual_size: u64,
    #[serde(default, rename = "Size")]
    pub size: u64,
    #[serde(default, rename = "Created")]
    pub created: i64,
}

/// How an image is named, made explicit instead of peeking at `repo_tags[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label<'a> {
    /// First tag is a real `repository:tag` pair
    Tagged(&'a [String]),
    /// First tag is the `<none>:<none>` sentinel
    Untagged,
    /// No tags at all (malformed upstream data)
    Missing,
}

impl ImageNode {
    pub fn new(id: impl Into<String>, parent_id: impl Into<String>, repo_tags: &[&str]) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            repo_tags: repo_tags.iter().map(|tag| tag.to_string()).collect(),
            virtual_size: 0,
            size: 0,
            created: 0,
        }
    }

    pub fn with_sizes(mut self, virtual_size: u64, size: u64) -> Self {
        self.virtual_size = virtual_size;
        self.size = size;
        self
    }

    pub fn label(&self) -> Label<'_> {
        match self.repo_tags.first() {
            None => Label::Missing,
            Some(first) if first == NONE_TAG => Label::Untagged,
            Some(_) => Label::Tagged(&self.repo_tags),
        }
    }

    pub fn is_labelled(&self) -> bool {
        matches!(self.label(), Label::Tagged(_))
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    pub fn short_id(&self) -> &str {
        truncate_id(&self.id)
    }

    /// Full or compact id, depending on `no_trunc`.
    pub fn display_id(&self, no_trunc: bool) -> &str {
        if no_trunc {
            &self.id
        } else {
            self.short_id()
        }
    }
}

/// Compact form of an image id: its first [`SHORT_ID_LEN`] characters, taken as-is
/// (an algorithm prefix such as `sha256:` counts). Shorter ids come back whole.
pub fn truncate_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

// Engines emit `null` rather than omitting empty lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
