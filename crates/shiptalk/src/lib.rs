pub mod chart;
pub mod errors;
pub mod handler;
pub mod models;
pub mod prompt;
pub mod prompt_template;
pub mod providers;
pub mod reference;
pub mod registry;
pub mod shape;
pub mod tool;
pub mod tools;
