use common::{EditDraft, MemoCard, MemoId};
use yew::prelude::*;

use super::editor::Editor;

pub(crate) struct Viewer;

pub(crate) enum Msg {
    Edit,
    Delete,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) card: MemoCard,
    /// Set while this card's inline editor is open.
    pub(crate) draft: Option<EditDraft>,
    pub(crate) on_edit: Callback<MemoId>,
    pub(crate) on_delete: Callback<MemoId>,
    pub(crate) on_save: Callback<EditDraft>,
    pub(crate) on_cancel: Callback<()>,
}

impl Component for Viewer {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Edit => {
                props.on_edit.emit(props.card.id.clone());
                false
            }
            Msg::Delete => {
                props.on_delete.emit(props.card.id.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        html! {
            <div class="memo">
                <h3>{ &props.card.title }</h3>
                <p>{ &props.card.content }</p>
                <div class="meta">{ props.card.meta_line() }</div>
                <div class="actions">
                    <button class="secondary" onclick={link.callback(|_| Msg::Edit)}>{ "Edit" }</button>
                    <button class="danger" onclick={link.callback(|_| Msg::Delete)}>{ "Delete" }</button>
                </div>
                { for props.draft.iter().map(|draft| html! {
                    <Editor
                        draft={draft.clone()}
                        on_save={props.on_save.clone()}
                        on_cancel={props.on_cancel.clone()}
                    />
                })}
            </div>
        }
    }
}
