pub mod config;
pub mod logging;

pub mod checks;
pub mod evaluate;
pub mod export;
pub mod history;
pub mod link;
pub mod probe;
pub mod render;
pub mod rules;
pub mod score;
