use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeChannel {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl YouTubeChannel {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at: None,
            description: None,
            lang: None,
            country: None,
        }
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<Timestamp>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_locale(mut self, lang: impl Into<String>, country: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self.country = Some(country.into());
        self
    }
}

impl Record for YouTubeChannel {}

/// Counters observed for a video at `collected_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeVideoStats {
    pub video_id: String,
    pub collected_at: Timestamp,
    pub num_views: u64,
    pub num_likes: u64,
    pub num_comments: u64,
    /// No longer published by the API
    #[serde(default)]
    pub num_dislikes: Option<u64>,
}

impl YouTubeVideoStats {
    #[must_use]
    pub fn new(
        video_id: impl Into<String>,
        collected_at: impl Into<Timestamp>,
        num_views: u64,
        num_likes: u64,
        num_comments: u64,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            collected_at: collected_at.into(),
            num_views,
            num_likes,
            num_comments,
            num_dislikes: None,
        }
    }

    #[must_use]
    pub fn with_dislikes(mut self, num_dislikes: u64) -> Self {
        self.num_dislikes = Some(num_dislikes);
        self
    }
}

impl Record for YouTubeVideoStats {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeVideo {
    pub id: String,
    pub channel_id: String,
    pub created_at: Timestamp,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub channel: Option<YouTubeChannel>,
    #[serde(default)]
    pub stats: Option<Vec<YouTubeVideoStats>>,
}

impl YouTubeVideo {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        created_at: impl Into<Timestamp>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            created_at: created_at.into(),
            title: title.into(),
            description: description.into(),
            channel: None,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: YouTubeChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Vec<YouTubeVideoStats>) -> Self {
        self.stats = Some(stats);
        self
    }
}

impl Record for YouTubeVideo {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeCommentStats {
    pub comment_id: String,
    pub collected_at: Timestamp,
    pub num_likes: u64,
    pub num_replies: u64,
}

impl YouTubeCommentStats {
    #[must_use]
    pub fn new(
        comment_id: impl Into<String>,
        collected_at: impl Into<Timestamp>,
        num_likes: u64,
        num_replies: u64,
    ) -> Self {
        Self {
            comment_id: comment_id.into(),
            collected_at: collected_at.into(),
            num_likes,
            num_replies,
        }
    }
}

impl Record for YouTubeCommentStats {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeComment {
    pub id: String,
    pub video_id: String,
    pub author_channel_id: String,
    pub comment_thread_id: String,
    pub created_at: Timestamp,
    pub text: String,
    #[serde(default)]
    pub replied_to_comment_id: Option<String>,
    #[serde(default)]
    pub channel: Option<YouTubeChannel>,
    #[serde(default)]
    pub video: Option<YouTubeVideo>,
    #[serde(default)]
    pub stats: Option<Vec<YouTubeCommentStats>>,
}

impl YouTubeComment {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        video_id: impl Into<String>,
        author_channel_id: impl Into<String>,
        comment_thread_id: impl Into<String>,
        created_at: impl Into<Timestamp>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            video_id: video_id.into(),
            author_channel_id: author_channel_id.into(),
            comment_thread_id: comment_thread_id.into(),
            created_at: created_at.into(),
            text: text.into(),
            replied_to_comment_id: None,
            channel: None,
            video: None,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_reply_to(mut self, comment_id: impl Into<String>) -> Self {
        self.replied_to_comment_id = Some(comment_id.into());
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: YouTubeChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    #[must_use]
    pub fn with_video(mut self, video: YouTubeVideo) -> Self {
        self.video = Some(video);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Vec<YouTubeCommentStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn is_reply(&self) -> bool {
        self.replied_to_comment_id.is_some()
    }
}

impl Record for YouTubeComment {}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{json, Map, Value};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
            .into()
    }

    #[test]
    fn test_channel_named_fields_and_key_values() {
        let channel = YouTubeChannel::new("123", "test channel").with_created_at(at(2021, 11, 1, 0, 0, 0));

        assert_eq!(channel.id, "123");
        assert_eq!(channel.title, "test channel");

        let map = channel.to_map().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        for key in ["id", "title", "created_at", "description", "lang", "country"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(map["created_at"], json!("2021-11-01 00:00:00"));
    }

    #[test]
    fn test_channel_json_formats_datetime() {
        let channel = YouTubeChannel::new("1", "1").with_created_at(at(2021, 11, 11, 12, 12, 12));

        let json = channel.to_json().unwrap();

        assert!(json.contains("2021-11-11 12:12:12"));
        assert!(serde_json::from_str::<Value>(&json).is_ok());
    }

    #[test]
    fn test_channel_from_keyword_fields() {
        let mut map = Map::new();
        map.insert("id".into(), json!("UC1"));
        map.insert("title".into(), json!("Daily"));
        map.insert("created_at".into(), json!("2021-11-11T12:12:12"));

        let channel = YouTubeChannel::from_map(map).unwrap();

        assert_eq!(channel.created_at, Some(at(2021, 11, 11, 12, 12, 12)));
        assert_eq!(channel.country, None);
        assert_eq!(channel.get("title"), Some(json!("Daily")));
    }

    #[test]
    fn test_channel_date_only() {
        let channel = YouTubeChannel::new("1", "1")
            .with_created_at(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());

        assert!(channel.to_json().unwrap().contains("\"2020-02-29\""));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut map = Map::new();
        map.insert("id".into(), json!("UC1"));

        assert!(YouTubeChannel::from_map(map).is_err());
    }

    #[test]
    fn test_comment_serializes_nested_records() {
        let channel = YouTubeChannel::new("UC1", "Daily");
        let video = YouTubeVideo::new("v1", "UC1", at(2021, 1, 2, 3, 4, 5), "Title", "Desc")
            .with_channel(channel.clone())
            .with_stats(vec![
                YouTubeVideoStats::new("v1", at(2021, 1, 3, 0, 0, 0), 10, 2, 1).with_dislikes(0),
            ]);
        let comment = YouTubeComment::new("c1", "v1", "UC9", "t1", at(2021, 1, 2, 4, 0, 0), "nice")
            .with_reply_to("c0")
            .with_video(video)
            .with_channel(channel)
            .with_stats(vec![YouTubeCommentStats::new("c1", at(2021, 1, 3, 0, 0, 0), 5, 0)]);

        let json = comment.to_json().unwrap();
        assert!(json.contains("\"collected_at\":\"2021-01-03 00:00:00\""));
        assert!(json.contains("\"created_at\":\"2021-01-02 03:04:05\""));

        let restored = YouTubeComment::from_json(&json).unwrap();
        assert_eq!(restored, comment);
        assert!(restored.is_reply());
        assert_eq!(restored.video.unwrap().stats.unwrap()[0].num_dislikes, Some(0));
    }
}
