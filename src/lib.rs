pub mod banner;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod consts;
pub mod events;
pub mod filter;
pub mod indicator;
pub mod render;
pub mod responder;
pub mod session;
