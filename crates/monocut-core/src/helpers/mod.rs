pub mod fixed;
pub mod size;
pub mod time;
