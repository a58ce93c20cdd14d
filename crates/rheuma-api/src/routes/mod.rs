pub mod health;
pub mod indices;
