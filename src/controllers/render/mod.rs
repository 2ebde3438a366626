pub mod evaluation_strategy;
pub mod render_controller;
