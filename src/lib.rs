pub mod ai;
pub mod api;
pub mod cli;
pub mod client;
pub mod core;
pub mod google;
pub mod perplexity;
pub mod youtube;
