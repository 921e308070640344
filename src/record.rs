use serde::{Deserialize, Serialize};

/// Parent vs reply tag. The dump format nests exactly two levels deep;
/// replies never own further replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Parent,
    Reply,
}

/// One parsed comment or reply. Field names match what the sentiment and
/// export collaborators expect. `parent_id` is present on replies only and
/// holds the owning parent's `comment_url` (a foreign-key reference, not a
/// containment pointer — parents and replies are siblings in one flat
/// collection). Records are created once by the parser and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Empty when the privacy toggle suppresses usernames.
    pub username: String,
    pub profile_url: String,
    /// Stable unique identifier within a video.
    pub comment_url: String,
    /// Free-text relative timestamp ("3 days ago"), not parsed further.
    pub posted: String,
    pub edited: bool,
    pub likes: u64,
    /// Reply count the platform reports on parents; not necessarily equal
    /// to the number of replies actually captured.
    pub replies: u64,
    /// Multi-line body, newlines preserved, leading/trailing blanks stripped.
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl CommentRecord {
    pub fn kind(&self) -> RecordKind {
        if self.parent_id.is_some() {
            RecordKind::Reply
        } else {
            RecordKind::Parent
        }
    }

    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}
