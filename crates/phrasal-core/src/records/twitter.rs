use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp::Timestamp;
use super::Record;

/// A tweet as returned by the v2 API, with its author's profile flattened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    pub text: String,
    pub author_id: u64,
    pub conversation_id: u64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub in_reply_to_user_id: Option<u64>,
    pub lang: String,
    pub is_reply: bool,
    pub is_retweet: bool,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_username: Option<String>,
    #[serde(default)]
    pub author_verified: Option<bool>,
    #[serde(default)]
    pub author_created_at: Option<Timestamp>,
    #[serde(default)]
    pub author_location: Option<String>,
    #[serde(default)]
    pub author_description: Option<String>,
    /// Fields without a dedicated member, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tweet {
    /// A standalone original tweet; conversation defaults to the tweet itself.
    #[must_use]
    pub fn new(
        id: u64,
        text: impl Into<String>,
        author_id: u64,
        created_at: impl Into<Timestamp>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author_id,
            conversation_id: id,
            created_at: created_at.into(),
            in_reply_to_user_id: None,
            lang: lang.into(),
            is_reply: false,
            is_retweet: false,
            author_name: None,
            author_username: None,
            author_verified: None,
            author_created_at: None,
            author_location: None,
            author_description: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_reply(mut self, conversation_id: u64, in_reply_to_user_id: u64) -> Self {
        self.conversation_id = conversation_id;
        self.in_reply_to_user_id = Some(in_reply_to_user_id);
        self.is_reply = true;
        self
    }

    #[must_use]
    pub fn with_retweet(mut self, is_retweet: bool) -> Self {
        self.is_retweet = is_retweet;
        self
    }

    /// Copies the author's profile fields onto the tweet.
    #[must_use]
    pub fn with_author(mut self, author: &TwitterUser) -> Self {
        self.author_id = author.id;
        self.author_name = Some(author.name.clone());
        self.author_username = Some(author.username.clone());
        self.author_verified = Some(author.verified);
        self.author_created_at = Some(author.created_at);
        self.author_location.clone_from(&author.location);
        self.author_description.clone_from(&author.description);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Record for Tweet {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterUser {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub verified: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Profile fields without a dedicated member, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TwitterUser {
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        username: impl Into<String>,
        verified: bool,
        created_at: impl Into<Timestamp>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            verified,
            created_at: created_at.into(),
            location: None,
            description: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Record for TwitterUser {}
