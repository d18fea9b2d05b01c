pub mod health;
pub mod migration;
