mod bot;
mod commands;
mod embeds;
mod handler;

pub use bot::{Data, create_framework};
