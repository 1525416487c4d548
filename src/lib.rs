//! persona-api - an in-memory REST service for personas
//!
//! Modules, leaf first:
//! - `model`: the persona entity and its validation rules
//! - `store`: the in-memory record set and id allocation
//! - `rest_api`: envelope, error translation, CRUD handlers, routes
//! - `http_server`: transport layers and the listener
//! - `observability`: logging setup
//! - `cli`: configuration loading and commands

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod store;
