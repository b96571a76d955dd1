pub use crate::{app::*, platform::*, util::*, templates::*, query_input::*, fragment_list::*, command_section::*};
pub use js_sys::{Function, Promise, Reflect::get};
pub use wasm_bindgen::{JsCast, JsValue};
pub use wasm_bindgen_futures::{spawn_local, JsFuture};
pub use yew::{html::Scope, prelude::*};
pub use web_sys::{HtmlInputElement, HtmlTextAreaElement};
pub use log::{debug, error, Level};
pub use query_builder::prelude::{
    list_operators, list_template_groups, ActionError, BuilderConfig, Change, Clipboard, Fragment, FragmentId,
    FragmentKind, Navigator, OperatorCategory, OperatorDescriptor, OperatorStatus, QueryAssembler, TemplateGroup,
    TemplateIcon,
};

pub type AppLink = Scope<App>;
