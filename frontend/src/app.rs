mod editor;
mod fetch;
mod searcher;
mod viewer;
mod writer;

use std::rc::Rc;

use common::{ApiClient, ApiConfig, Board, ClientError, EditDraft, Memo, MemoForm, MemoId};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub(crate) type MemoClient = ApiClient<fetch::FetchTransport>;

pub(crate) struct App {
    client: Option<Rc<MemoClient>>,
    board: Board,
    created: u32,
}

/// Which handler a request was started from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
    InitialLoad,
    Search,
    Create,
    Save,
    Delete,
}

pub(crate) enum Msg {
    Search(String),
    ResetSearch,
    Create(MemoForm),
    Edit(MemoId),
    CancelEdit,
    Save(EditDraft),
    Delete(MemoId),
    OnMemosFetched(Vec<Memo>),
    OnMemoCreated(Memo),
    OnError(Action, ClientError),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_build_env();
        let client = match ApiClient::new(&config, fetch::FetchTransport) {
            Ok(client) => {
                let client = Rc::new(client);
                fetch::get_memos(ctx, client.clone(), None, Action::InitialLoad);
                Some(client)
            }
            Err(error) => {
                log::error!("{error}");
                alert(&format!("Invalid API base URL: {}", config.base_url));
                None
            }
        };
        Self {
            client,
            board: Board::default(),
            created: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(id) => self.board.begin_edit(&id).is_some(),
            Msg::CancelEdit => self.board.cancel_edit().is_some(),
            Msg::OnMemosFetched(memos) => {
                self.board.replace(memos);
                true
            }
            Msg::OnMemoCreated(memo) => {
                log::debug!("memo {} created, clearing the form", memo.id);
                self.created = self.created.wrapping_add(1);
                true
            }
            Msg::OnError(action, error) => {
                log::error!("{action:?} failed: {error}");
                match (action, &error) {
                    (_, ClientError::Validation(_)) => alert("Title and content must not be empty"),
                    (Action::InitialLoad, _) => {
                        let base = self
                            .client
                            .as_ref()
                            .map(|client| client.base_url().to_string())
                            .unwrap_or_default();
                        alert(&format!(
                            "Unable to load memos, make sure the API is running: {base}"
                        ));
                    }
                    _ => {}
                }
                false
            }
            request => {
                let Some(client) = self.client.clone() else {
                    log::warn!("no API client, ignoring request");
                    return false;
                };
                match request {
                    Msg::Search(query) => {
                        fetch::get_memos(ctx, client, Some(query), Action::Search);
                    }
                    Msg::ResetSearch => {
                        fetch::get_memos(ctx, client, None, Action::Search);
                    }
                    Msg::Create(form) => {
                        fetch::create_memo(ctx, client, form);
                    }
                    Msg::Save(draft) => {
                        fetch::update_memo(ctx, client, draft);
                    }
                    Msg::Delete(id) => {
                        if confirm("Delete this memo?") {
                            fetch::delete_memo(ctx, client, id);
                        }
                    }
                    _ => {}
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="container">
                <h1>{ "Memos" }</h1>
                <writer::Writer created={self.created} on_submit={link.callback(Msg::Create)}/>
                <searcher::Searcher
                    on_search={link.callback(Msg::Search)}
                    on_reset={link.callback(|_| Msg::ResetSearch)}
                />
                <div class="memo-list">
                    { for self.board.cards(&chrono::Local).into_iter().map(|card| {
                        let draft = self.board.draft_for(&card.id).cloned();
                        let key = card.id.to_string();
                        html! {
                            <viewer::Viewer
                                key={key}
                                card={card}
                                draft={draft}
                                on_edit={link.callback(Msg::Edit)}
                                on_delete={link.callback(Msg::Delete)}
                                on_save={link.callback(Msg::Save)}
                                on_cancel={link.callback(|_| Msg::CancelEdit)}
                            />
                        }
                    })}
                </div>
            </div>
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(error) = window.alert_with_message(message) {
            log::warn!("alert failed: {error:?}");
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|h| h.value())
        .unwrap_or_default()
}

pub(crate) fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|h| h.value())
        .unwrap_or_default()
}
