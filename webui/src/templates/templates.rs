use crate::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TemplatesPanelProps {
    pub groups: &'static [TemplateGroup],
    /// Receives the query of the chosen template
    pub onapply: Callback<&'static str>,
}

pub struct TemplatesPanel {}

fn icon(icon: TemplateIcon) -> &'static str {
    match icon {
        TemplateIcon::Target => "🎯",
        TemplateIcon::FileText => "📄",
        TemplateIcon::Globe => "🌐",
    }
}

impl Component for TemplatesPanel {
    type Message = ();
    type Properties = TemplatesPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TemplatesPanel {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                { for ctx.props().groups.iter().map(|group| html! {
                    <section class="card" key={group.category}>
                        <h3>{ format!("{} {}", icon(group.icon), group.category) }</h3>
                        { for group.templates.iter().map(|template| {
                            let query = template.query;
                            let onclick = ctx.props().onapply.reform(move |_: MouseEvent| query);
                            html! {
                                <div class="template" key={template.name}>
                                    <div class="template-header">
                                        <h4>{ template.name }</h4>
                                        <button {onclick}>{"適用"}</button>
                                    </div>
                                    <p class="description">{ template.description }</p>
                                    <code class="block">{ template.query }</code>
                                </div>
                            }
                        }) }
                    </section>
                }) }
            </div>
        }
    }
}
