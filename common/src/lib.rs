pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod http;
mod memo;
pub mod view;
pub mod workflow;

pub use api::ApiClient;
pub use board::Board;
pub use config::ApiConfig;
pub use error::{ClientError, RequestError};
pub use memo::{join_tags, parse_tags, Memo, MemoForm, MemoId, MemoPayload, ValidationError};
pub use view::{EditDraft, MemoCard};
