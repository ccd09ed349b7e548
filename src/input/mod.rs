//! Input adapters for the render service.
//!
//! This module contains adapters that receive input from the outside world
//! (process arguments, HTTP requests) and translate them into render
//! configurations for the controllers.

pub mod cli;
pub mod http;
