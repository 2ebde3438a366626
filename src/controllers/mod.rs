pub mod ports;
pub mod render;
