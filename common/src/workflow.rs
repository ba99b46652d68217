//! User actions as mutate-then-refetch sequences.
//!
//! Every successful mutation is followed by exactly one unfiltered list
//! fetch. A failed step ends the sequence and no refetch happens.

use crate::api::ApiClient;
use crate::error::Result;
use crate::http::Transport;
use crate::view::EditDraft;
use crate::{Memo, MemoForm, MemoId, MemoPayload};

pub async fn reload<T: Transport>(
    client: &ApiClient<T>,
    search: Option<&str>,
) -> Result<Vec<Memo>> {
    client.list(search).await
}

/// A create the backend accepted, with the refetch that followed it.
///
/// `memos` fails on its own when only the refetch did; the memo exists either
/// way.
#[derive(Debug)]
pub struct Created {
    pub memo: Memo,
    pub memos: Result<Vec<Memo>>,
}

/// Validates the create form before any request is made.
pub async fn submit_create<T: Transport>(
    client: &ApiClient<T>,
    form: &MemoForm,
) -> Result<Created> {
    let payload = MemoPayload::from_form(form)?;
    let memo = client.create(&payload).await?;
    log::info!("created memo {}", memo.id);
    let memos = client.list(None).await;
    Ok(Created { memo, memos })
}

pub async fn submit_edit<T: Transport>(
    client: &ApiClient<T>,
    draft: &EditDraft,
) -> Result<Vec<Memo>> {
    let payload = draft.to_payload()?;
    let updated = client.update(&draft.id, &payload).await?;
    log::info!("updated memo {}", updated.id);
    client.list(None).await
}

/// Confirmation is the caller's job.
pub async fn delete_then_reload<T: Transport>(
    client: &ApiClient<T>,
    id: &MemoId,
) -> Result<Vec<Memo>> {
    client.delete(id).await?;
    log::info!("deleted memo {id}");
    client.list(None).await
}
