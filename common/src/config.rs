/// Backend used when no base URL is configured at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `MEMO_API_BASE` as seen at compile time, else [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("MEMO_API_BASE"))
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_override(None).base_url, DEFAULT_API_BASE);
        assert_eq!(ApiConfig::from_override(Some("  ")).base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn override_is_trimmed() {
        let config = ApiConfig::from_override(Some(" https://memo.example.com/api "));
        assert_eq!(config.base_url, "https://memo.example.com/api");
    }
}
