use common::MemoForm;
use web_sys::{FocusEvent, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{input_value, textarea_value};

pub(crate) struct Writer {
    title_ref: NodeRef,
    content_ref: NodeRef,
    tags_ref: NodeRef,
    created: u32,
}

pub(crate) enum Msg {
    Submit,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    /// Bumped by the parent after each successful create; clears the inputs.
    pub(crate) created: u32,
    pub(crate) on_submit: Callback<MemoForm>,
}

impl Writer {
    fn clear(&self) {
        for input in [&self.title_ref, &self.tags_ref] {
            if let Some(input) = input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
        if let Some(content) = self.content_ref.cast::<HtmlTextAreaElement>() {
            content.set_value("");
        }
    }
}

impl Component for Writer {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            title_ref: Default::default(),
            content_ref: Default::default(),
            tags_ref: Default::default(),
            created: ctx.props().created,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                let form = MemoForm {
                    title: input_value(&self.title_ref),
                    content: textarea_value(&self.content_ref),
                    tags: input_value(&self.tags_ref),
                };
                ctx.props().on_submit.emit(form);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        let created = ctx.props().created;
        if created != self.created {
            self.created = created;
            self.clear();
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <form class="memo-create" onsubmit={link.callback(|e: FocusEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{ "New Memo" }</h2>
                <input type="text" placeholder="Title" ref={self.title_ref.clone()}/>
                <textarea rows="3" placeholder="Content" ref={self.content_ref.clone()}/>
                <input type="text" placeholder="Tags, comma separated" ref={self.tags_ref.clone()}/>
                <button type="submit">{ "Create" }</button>
            </form>
        }
    }
}
