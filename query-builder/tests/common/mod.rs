#![allow(dead_code)]

mod logger;
mod doubles;
pub use logger::*;
pub use doubles::*;

pub use query_builder::prelude::*;
pub use log::*;
pub use std::{cell::RefCell, rc::Rc};
