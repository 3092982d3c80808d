//! Terminal music browser: a result history paired with presentation pages,
//! driven by short commands and key bindings.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;

#[cfg(test)]
mod testing;
