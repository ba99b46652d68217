use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use common::http::{HttpRequest, HttpResponse, Method, Transport};
use common::{workflow, ClientError, EditDraft, Memo, MemoForm, MemoId};

use super::{Action, App, MemoClient, Msg};

/// Browser `fetch`, one attempt per request.
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = match request.method {
            Method::Get => reqwasm::http::Request::get(&request.url),
            Method::Post => reqwasm::http::Request::post(&request.url),
            Method::Put => reqwasm::http::Request::put(&request.url),
            Method::Delete => reqwasm::http::Request::delete(&request.url),
        }
        .header("content-type", "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| ClientError::Network(error.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ClientError::Network(error.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

fn dispatch<F>(
    ctx: &yew::Context<App>,
    action: Action,
    task: F,
    on_success: fn(Vec<Memo>) -> Msg,
) where
    F: Future<Output = Result<Vec<Memo>, ClientError>> + 'static,
{
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        match task.await {
            Ok(memos) => {
                link.send_message(on_success(memos));
            }
            Err(error) => {
                link.send_message(Msg::OnError(action, error));
            }
        }
    });
}

pub(crate) fn get_memos(
    ctx: &yew::Context<App>,
    client: Rc<MemoClient>,
    search: Option<String>,
    action: Action,
) {
    dispatch(
        ctx,
        action,
        async move { workflow::reload(&client, search.as_deref()).await },
        Msg::OnMemosFetched,
    );
}

/// Reports the create before the refetch so the form clears even when only
/// the refetch fails.
pub(crate) fn create_memo(ctx: &yew::Context<App>, client: Rc<MemoClient>, form: MemoForm) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        match workflow::submit_create(&client, &form).await {
            Ok(created) => {
                link.send_message(Msg::OnMemoCreated(created.memo));
                match created.memos {
                    Ok(memos) => {
                        link.send_message(Msg::OnMemosFetched(memos));
                    }
                    Err(error) => {
                        link.send_message(Msg::OnError(Action::Create, error));
                    }
                }
            }
            Err(error) => {
                link.send_message(Msg::OnError(Action::Create, error));
            }
        }
    });
}

pub(crate) fn update_memo(ctx: &yew::Context<App>, client: Rc<MemoClient>, draft: EditDraft) {
    dispatch(
        ctx,
        Action::Save,
        async move { workflow::submit_edit(&client, &draft).await },
        Msg::OnMemosFetched,
    );
}

pub(crate) fn delete_memo(ctx: &yew::Context<App>, client: Rc<MemoClient>, id: MemoId) {
    dispatch(
        ctx,
        Action::Delete,
        async move { workflow::delete_then_reload(&client, &id).await },
        Msg::OnMemosFetched,
    );
}
