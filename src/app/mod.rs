pub mod controller;
pub mod presenter;
pub mod render;
