use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned memo identifier.
///
/// The backend decides the representation; numbers and strings are both
/// accepted and written back into URLs through [`std::fmt::Display`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MemoId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for MemoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoId::Number(id) => write!(f, "{id}"),
            MemoId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Memo {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "nullable_tags")]
    pub tags: Vec<String>,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn nullable_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of `POST /memos` and `PUT /memos/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MemoPayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title and content must not be empty")]
    MissingTitleOrContent,
}

/// Raw text of the create form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoForm {
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl MemoPayload {
    pub fn from_form(form: &MemoForm) -> Result<Self, ValidationError> {
        Self::from_text(&form.title, &form.content, &form.tags)
    }

    /// Trims title and content, splits tags, and rejects blank fields.
    pub fn from_text(title: &str, content: &str, tags: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ValidationError::MissingTitleOrContent);
        }
        Ok(Self {
            title: title.to_owned(),
            content: content.to_owned(),
            tags: parse_tags(tags),
        })
    }
}

/// Splits a comma-separated tag string. Order and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
