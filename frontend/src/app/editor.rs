use common::EditDraft;
use yew::prelude::*;

use super::{input_value, textarea_value};

/// Inline edit form, pre-filled from the draft it was opened with.
pub(crate) struct Editor {
    title_ref: NodeRef,
    content_ref: NodeRef,
    tags_ref: NodeRef,
}

pub(crate) enum Msg {
    Save,
    Cancel,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) draft: EditDraft,
    pub(crate) on_save: Callback<EditDraft>,
    pub(crate) on_cancel: Callback<()>,
}

impl Component for Editor {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_ref: Default::default(),
            content_ref: Default::default(),
            tags_ref: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Save => {
                let draft = EditDraft {
                    id: props.draft.id.clone(),
                    title: input_value(&self.title_ref),
                    content: textarea_value(&self.content_ref),
                    tags: input_value(&self.tags_ref),
                };
                props.on_save.emit(draft);
                false
            }
            Msg::Cancel => {
                props.on_cancel.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = &ctx.props().draft;
        html! {
            <div class="memo-edit">
                <input
                    type="text"
                    class="edit-title"
                    ref={self.title_ref.clone()}
                    value={draft.title.clone()}
                />
                <textarea
                    class="edit-content"
                    rows="3"
                    ref={self.content_ref.clone()}
                    value={draft.content.clone()}
                />
                <input
                    type="text"
                    class="edit-tags"
                    ref={self.tags_ref.clone()}
                    value={draft.tags.clone()}
                />
                <div class="actions">
                    <button class="secondary" onclick={link.callback(|_| Msg::Save)}>{ "Save" }</button>
                    <button class="danger" onclick={link.callback(|_| Msg::Cancel)}>{ "Cancel" }</button>
                </div>
            </div>
        }
    }
}
