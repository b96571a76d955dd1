//! Query assembly for the search query builder.
//!
//! A [`QueryAssembler`](assembler::QueryAssembler) holds the fragments added by the user
//! and the query string shown to them. The [`catalog`] module exposes the static operator
//! reference and query templates.

pub mod actions;
pub mod assembler;
pub mod catalog;
pub mod config;
pub mod fragment;
pub mod prelude;
