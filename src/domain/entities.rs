//! Domain entities. Pure data structures for outgoing messages.
//!
//! No bot-framework types here; the sending layer maps these to its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elevated-permission context attached to a command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Authority {
    User,
    Admin,
    Owner,
}

impl Authority {
    pub const ALL: [Authority; 3] = [Authority::User, Authority::Admin, Authority::Owner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::User => "USER",
            Authority::Admin => "ADMIN",
            Authority::Owner => "OWNER",
        }
    }

    /// Case-insensitive lookup by textual name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Plain { text: String },
    /// Image already uploaded to the host; `id` is the host's handle.
    Image { id: String },
    /// Mention of a contact by numeric id.
    At { target: i64 },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain { text: text.into() }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Plain { text } => f.write_str(text),
            Segment::Image { id } => write!(f, "[image:{}]", id),
            Segment::At { target } => write!(f, "@{}", target),
        }
    }
}

/// Ordered sequence of segments, sent as a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageChain {
    segments: Vec<Segment>,
}

impl MessageChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends another chain after this one.
    pub fn plus(mut self, other: impl Into<MessageChain>) -> Self {
        self.segments.extend(other.into().segments);
        self
    }

    /// Rendered text of every segment, concatenated.
    pub fn content_to_string(&self) -> String {
        self.segments.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<Segment>> for MessageChain {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl From<Segment> for MessageChain {
    fn from(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl From<&str> for MessageChain {
    fn from(text: &str) -> Self {
        as_message_chain(text)
    }
}

impl From<String> for MessageChain {
    fn from(text: String) -> Self {
        Segment::Plain { text }.into()
    }
}

impl FromIterator<Segment> for MessageChain {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

/// Wraps `text` as a single plain segment chain.
pub fn as_message_chain(text: &str) -> MessageChain {
    Segment::plain(text).into()
}

/// `text` as a one-element list of chains, for APIs that send batches.
pub fn as_single_chain_list(text: &str) -> Vec<MessageChain> {
    vec![as_message_chain(text)]
}

/// Prepends `text` as a plain segment in front of `content`.
pub fn followed_by(text: &str, content: MessageChain) -> MessageChain {
    as_message_chain(text).plus(content)
}

/// Mutable accumulator for a [`MessageChain`].
#[derive(Debug, Default)]
pub struct MessageChainBuilder {
    segments: Vec<Segment>,
}

impl MessageChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add(Segment::plain(text))
    }

    /// Adds `segment` followed by a line break segment.
    pub fn add_line(&mut self, segment: Segment) -> &mut Self {
        self.add(segment).add_text("\n")
    }

    /// Adds `text` with a trailing newline as one plain segment.
    pub fn add_text_line(&mut self, text: &str) -> &mut Self {
        self.add_text(format!("{}\n", text))
    }

    pub fn build(self) -> MessageChain {
        self.segments.into()
    }
}
