//! API route handlers

pub mod charts;
pub mod countries;
pub mod health;
pub mod page;
pub mod theme;
