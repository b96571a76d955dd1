use crate::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QueryInputProps {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Receives the raw value, only when it isn't blank
    pub onadd: Callback<String>,
}

pub enum QueryInputMsg {
    Input(String),
    Add,
}

pub struct QueryInput {
    value: String,
}

impl Component for QueryInput {
    type Message = QueryInputMsg;
    type Properties = QueryInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        QueryInput {
            value: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QueryInputMsg::Input(value) => {
                self.value = value;
                false
            }
            QueryInputMsg::Add => {
                if self.value.trim().is_empty() {
                    return false;
                }
                let value = std::mem::take(&mut self.value);
                ctx.props().onadd.emit(value);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QueryInputMsg::Input(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(QueryInputMsg::Add)
        });

        html! {
            <div>
                <label>{ ctx.props().label }</label>
                <div class="query-input-row">
                    <input
                        type="text"
                        value={self.value.clone()}
                        placeholder={ctx.props().placeholder}
                        {oninput}
                        {onkeypress} />
                    <button onclick={ctx.link().callback(|_| QueryInputMsg::Add)}>{"＋"}</button>
                </div>
            </div>
        }
    }
}
