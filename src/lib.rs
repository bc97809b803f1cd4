extern crate colored;
extern crate serde;
extern crate serde_json;

mod rolodex;

pub mod command;
pub mod config;
pub mod contact;
pub mod fmt;
pub mod history;
pub mod index;
pub mod model;
pub mod parser;
pub mod predicate;
pub mod storage;
pub mod tag;
pub mod viewer;

#[cfg(test)]
mod testutil;

pub use rolodex::*;
