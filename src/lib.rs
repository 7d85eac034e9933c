pub mod admin;
pub mod api;
pub mod calendar;
pub mod chat;
pub mod cli;
pub mod client;
pub mod core;
pub mod jobs;
pub mod membership;
pub mod relay;
pub mod tickets;
pub mod visit;
