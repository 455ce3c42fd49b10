//! Toleno Network MCP server.
//!
//! Tools are declared per API domain in [`tools`], validated into a [`Registry`] at startup and
//! executed by the [`Dispatcher`], which turns every outcome (including unknown tools and
//! missing credentials) into a single [`ResponseEnvelope`]. [`TolenoServer`] exposes the
//! dispatcher over MCP stdio.

pub mod cli;
pub mod config;
pub mod content;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod registry;
pub mod semantics;
pub mod server;
pub mod setup;
pub mod tools;

pub use config::ServerConfig;
pub use dispatcher::Dispatcher;
pub use envelope::{ResponseEnvelope, ToolOutput};
pub use error::{ConfigError, DispatchError, ToolError};
pub use registry::{Access, Registry, ToolId};
pub use server::TolenoServer;
