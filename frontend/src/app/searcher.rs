use web_sys::{FocusEvent, HtmlInputElement};
use yew::prelude::*;

use super::input_value;

pub(crate) struct Searcher {
    input_ref: NodeRef,
}

pub(crate) enum Msg {
    Search,
    Reset,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) on_search: Callback<String>,
    pub(crate) on_reset: Callback<()>,
}

impl Component for Searcher {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input_ref: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Search => {
                ctx.props().on_search.emit(input_value(&self.input_ref));
                false
            }
            Msg::Reset => {
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                ctx.props().on_reset.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <form class="memo-search" onsubmit={link.callback(|e: FocusEvent| {
                e.prevent_default();
                Msg::Search
            })}>
                <input type="search" placeholder="Search title or content" ref={self.input_ref.clone()}/>
                <button type="submit" class="secondary">{ "Search" }</button>
                <button type="button" class="secondary" onclick={link.callback(|_| Msg::Reset)}>{ "Reset" }</button>
            </form>
        }
    }
}
