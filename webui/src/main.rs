mod app;
mod platform;
mod prelude;
mod util;

#[path = "templates/templates.rs"]
mod templates;
#[path = "components/query_input/query_input.rs"]
mod query_input;
#[path = "components/fragment_list/fragment_list.rs"]
mod fragment_list;
#[path = "components/command_section/command_section.rs"]
mod command_section;

use crate::prelude::*;

fn main() {
    let level = match cfg!(debug_assertions) {
        true => Level::Debug,
        false => Level::Info,
    };
    ConsoleLogger::new(level).activate();
    yew::Renderer::<App>::new().render();
}
