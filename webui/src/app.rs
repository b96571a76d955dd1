use crate::prelude::*;

/// A text input that adds fragments of one kind.
pub struct InputSpec {
    pub kind: FragmentKind,
    pub label: &'static str,
    pub placeholder: &'static str,
}

const BASIC_INPUTS: &[InputSpec] = &[
    InputSpec { kind: FragmentKind::Keyword, label: "キーワード", placeholder: "例: React チュートリアル" },
    InputSpec { kind: FragmentKind::Exact, label: "完全一致", placeholder: "例: React Hooks" },
    InputSpec { kind: FragmentKind::Exclude, label: "除外", placeholder: "例: 古い" },
];

const SITE_FILE_INPUTS: &[InputSpec] = &[
    InputSpec { kind: FragmentKind::Site, label: "サイト内検索", placeholder: "例: github.com" },
    InputSpec { kind: FragmentKind::Filetype, label: "ファイル形式", placeholder: "例: pdf" },
];

const TARGET_INPUTS: &[InputSpec] = &[
    InputSpec { kind: FragmentKind::Intitle, label: "タイトル内検索", placeholder: "例: チュートリアル" },
    InputSpec { kind: FragmentKind::Inurl, label: "URL内検索", placeholder: "例: blog" },
    InputSpec { kind: FragmentKind::Intext, label: "テキスト内検索", placeholder: "例: API設計" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuilderTab {
    Basic,
    SiteFile,
    Target,
    Templates,
}

impl BuilderTab {
    pub const ALL: [BuilderTab; 4] = [BuilderTab::Basic, BuilderTab::SiteFile, BuilderTab::Target, BuilderTab::Templates];

    pub fn label(&self) -> &'static str {
        match self {
            BuilderTab::Basic => "基本",
            BuilderTab::SiteFile => "サイト・ファイル",
            BuilderTab::Target => "対象指定",
            BuilderTab::Templates => "テンプレート",
        }
    }

    /// Empty for the templates tab
    pub fn inputs(&self) -> &'static [InputSpec] {
        match self {
            BuilderTab::Basic => BASIC_INPUTS,
            BuilderTab::SiteFile => SITE_FILE_INPUTS,
            BuilderTab::Target => TARGET_INPUTS,
            BuilderTab::Templates => &[],
        }
    }
}

pub enum AppMsg {
    AddFragment(FragmentKind, String),
    RemoveFragment(FragmentId),
    EditQuery(String),
    ApplyTemplate(&'static str),
    ChangeTab(BuilderTab),
    CopyQuery,
    LaunchSearch,
    /// Sent by the assembler subscription after every change
    QueryChanged,
}

pub struct App {
    assembler: QueryAssembler,
    tab: BuilderTab,
    action_error: Option<ActionError>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut assembler = QueryAssembler::new(BuilderConfig::default());
        let link: AppLink = ctx.link().clone();
        assembler.subscribe(move |change: &Change| {
            debug!("Assembler change: {change:?}");
            link.send_message(AppMsg::QueryChanged);
        });

        Self {
            assembler,
            tab: BuilderTab::Basic,
            action_error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::AddFragment(kind, value) => {
                self.assembler.add_fragment(kind, &value);
                false
            }
            AppMsg::RemoveFragment(id) => {
                self.assembler.remove_fragment(id);
                false
            }
            AppMsg::EditQuery(text) => {
                self.assembler.set_query_directly(text);
                false
            }
            AppMsg::ApplyTemplate(query) => {
                self.assembler.apply_template(query);
                false
            }
            AppMsg::ChangeTab(tab) => {
                self.tab = tab;
                true
            }
            AppMsg::CopyQuery => {
                self.action_error = self.assembler.copy_current_query(&BrowserClipboard).err();
                true
            }
            AppMsg::LaunchSearch => {
                self.action_error = self.assembler.dispatch_search(&BrowserNavigator).err();
                true
            }
            AppMsg::QueryChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            AppMsg::EditQuery(textarea.value())
        });

        let tab_content = match self.tab {
            BuilderTab::Templates => html! {
                <TemplatesPanel groups={list_template_groups()} onapply={link.callback(AppMsg::ApplyTemplate)} />
            },
            tab => html! {
                <div class="inputs">
                    { for tab.inputs().iter().map(|input| {
                        let kind = input.kind;
                        html! {
                            <QueryInput
                                key={kind.name()}
                                label={input.label}
                                placeholder={input.placeholder}
                                onadd={link.callback(move |value: String| AppMsg::AddFragment(kind, value))} />
                        }
                    }) }
                </div>
            },
        };

        html! {
            <>
                <header>
                    <h1>{"🔍 Google検索クエリビルダー"}</h1>
                    <p>{"仕事で使える高品質な検索コマンド作成ツール"}</p>
                </header>
                <main>
                    <section class="card">
                        <h2>{"💡 インタラクティブ・クエリビルダー"}</h2>
                        <p class="description">{"以下のツールを使って、検索コマンドを組み合わせたカスタムクエリを作成しましょう。"}</p>

                        <label for="query-builder-output">{"作成中のクエリ:"}</label>
                        <div class="query-area">
                            <textarea
                                id="query-builder-output"
                                rows="3"
                                placeholder="ここに検索クエリが表示されます..."
                                value={self.assembler.query().to_string()}
                                {oninput} />
                            <div class="query-actions">
                                <button onclick={link.callback(|_| AppMsg::CopyQuery)}>{"📋 コピー"}</button>
                                <button class="primary" onclick={link.callback(|_| AppMsg::LaunchSearch)}>{"↗ 検索"}</button>
                            </div>
                        </div>
                        if let Some(error) = &self.action_error {
                            <p class="description">{ error.to_string() }</p>
                        }

                        <FragmentList fragments={self.assembler.fragments().to_vec()} onremove={link.callback(AppMsg::RemoveFragment)} />

                        <div class="tabs">
                            { for BuilderTab::ALL.into_iter().map(|tab| html! {
                                <button
                                    key={tab.label()}
                                    class={classes!((tab == self.tab).then_some("selected"))}
                                    onclick={link.callback(move |_| AppMsg::ChangeTab(tab))}>
                                    { tab.label() }
                                </button>
                            }) }
                        </div>
                        { tab_content }
                    </section>

                    <div class="reference">
                        { for OperatorCategory::ALL.into_iter().map(|category| html! {
                            <CommandSection key={category.title()} title={category.title()} commands={list_operators(category)} />
                        }) }
                    </div>
                </main>
            </>
        }
    }
}

#[test]
fn every_kind_has_one_input() {
    let kinds = BuilderTab::ALL.iter().flat_map(|tab| tab.inputs()).map(|input| input.kind).collect::<Vec<_>>();
    assert_eq!(kinds.len(), FragmentKind::ALL.len());
    for kind in FragmentKind::ALL {
        assert!(kinds.contains(&kind), "no input for {kind}");
    }
}
