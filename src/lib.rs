//! Admin API backend with a JWT bearer-token gate, plus the route-guard
//! decision the admin front end runs before rendering protected views.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;
