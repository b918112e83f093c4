#![doc = include_str!("../README.md")]

pub mod compiler;
mod config;
pub mod content;
pub mod date;
mod permalink;
pub mod route;
mod site;
pub mod storage;
pub mod taxonomy;

pub use compiler::{compile_routes, CompileError, RouteCompiler};
pub use config::*;
pub use permalink::*;
pub use site::*;
