use crate::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommandSectionProps {
    pub title: &'static str,
    pub commands: &'static [OperatorDescriptor],
}

pub struct CommandSection {}

fn status_class(status: OperatorStatus) -> &'static str {
    match status {
        OperatorStatus::Active => "active",
        OperatorStatus::Limited => "limited",
        OperatorStatus::Deprecated => "deprecated",
    }
}

impl Component for CommandSection {
    type Message = ();
    type Properties = CommandSectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CommandSection {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="card">
                <h3>{ ctx.props().title }</h3>
                { for ctx.props().commands.iter().map(|command| html! {
                    <div class="command" key={command.command}>
                        <div class="command-header">
                            <div>
                                <code>{ command.command }</code>
                                {" "}
                                <strong>{ command.name }</strong>
                            </div>
                            <span class={classes!("badge", status_class(command.status))}>{ command.status.label() }</span>
                        </div>
                        <p class="description">{ command.description }</p>
                        <code class="example">{ command.example }</code>
                    </div>
                }) }
            </section>
        }
    }
}
