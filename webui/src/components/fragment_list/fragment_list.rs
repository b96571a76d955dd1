use crate::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FragmentListProps {
    pub fragments: Vec<Fragment>,
    pub onremove: Callback<FragmentId>,
}

pub struct FragmentList {}

impl Component for FragmentList {
    type Message = ();
    type Properties = FragmentListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FragmentList {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().fragments.is_empty() {
            return html! {};
        }

        html! {
            <div>
                <label>{"追加された要素:"}</label>
                <div class="fragments">
                    { for ctx.props().fragments.iter().map(|fragment| {
                        let id = fragment.id();
                        let onclick = ctx.props().onremove.reform(move |_: MouseEvent| id);
                        html! {
                            <span class="badge" key={id.to_string()}>
                                { format!("{}: {}", fragment.kind(), fragment.value()) }
                                <button {onclick}>{"×"}</button>
                            </span>
                        }
                    }) }
                </div>
            </div>
        }
    }
}
