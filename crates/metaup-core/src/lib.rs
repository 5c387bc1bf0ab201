pub mod config;
pub mod logging;

pub mod html;
pub mod injector;
pub mod manifest;
pub mod match_pattern;
