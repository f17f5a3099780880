pub mod events;
pub mod health;
pub mod schedule;
pub mod team;
