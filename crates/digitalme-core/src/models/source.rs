use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Where a writing sample came from. Determines its fixed quality prior.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Text,
    Gmail,
    Github,
    Blog,
    Conversation,
}

impl SourceType {
    pub const COUNT: usize = 5;

    pub const ALL: [SourceType; Self::COUNT] = [
        Self::Text,
        Self::Gmail,
        Self::Github,
        Self::Blog,
        Self::Conversation,
    ];

    /// Rank used to break weight ties: gmail > text = conversation > github > blog.
    pub fn tie_break_rank(self) -> u8 {
        match self {
            Self::Gmail => 3,
            Self::Text | Self::Conversation => 2,
            Self::Github => 1,
            Self::Blog => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Gmail => "gmail",
            Self::Github => "github",
            Self::Blog => "blog",
            Self::Conversation => "conversation",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
