//! View models for the memo list and the inline editor.
//!
//! Components render these as text nodes and attribute values, so user text
//! never passes through markup.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::{join_tags, Memo, MemoId, MemoPayload, ValidationError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One rendered memo card.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoCard {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    pub tag_text: String,
    pub updated_label: String,
}

impl MemoCard {
    pub fn new<Tz>(memo: &Memo, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: memo.id.clone(),
            title: memo.title.clone(),
            content: memo.content.clone(),
            tag_text: format!("#{}", join_tags(&memo.tags)),
            updated_label: format_timestamp(&memo.updated_at, tz),
        }
    }

    pub fn meta_line(&self) -> String {
        format!("{} · Updated: {}", self.tag_text, self.updated_label)
    }
}

/// Cards in fetch order.
pub fn cards<Tz>(memos: &[Memo], tz: &Tz) -> Vec<MemoCard>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    memos.iter().map(|memo| MemoCard::new(memo, tz)).collect()
}

/// Renders `raw` in `tz`, or returns it unchanged when it does not parse.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(instant) => instant.format(TIMESTAMP_FORMAT).to_string(),
        None => raw.to_owned(),
    }
}

/// RFC 3339 is converted into `tz`. A naive ISO-8601 date-time is wall-clock
/// time in `tz`; of an ambiguous pair the earlier instant wins.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(tz));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

/// Contents of the inline edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    /// Comma-joined, as shown in the tags input.
    pub tags: String,
}

impl EditDraft {
    pub fn from_memo(memo: &Memo) -> Self {
        Self {
            id: memo.id.clone(),
            title: memo.title.clone(),
            content: memo.content.clone(),
            tags: join_tags(&memo.tags),
        }
    }

    pub fn to_payload(&self) -> Result<MemoPayload, ValidationError> {
        MemoPayload::from_text(&self.title, &self.content, &self.tags)
    }
}
