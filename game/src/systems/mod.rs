pub mod input;
pub mod movement;
pub mod sync;
