pub mod frame;
pub mod index;
