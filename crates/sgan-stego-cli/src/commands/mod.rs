pub mod bits;
pub mod demo;
pub mod key;
pub mod score;
