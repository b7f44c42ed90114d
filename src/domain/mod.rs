// Domain layer: API records, view state and ports. No network code here.

pub mod model;
pub mod ports;
