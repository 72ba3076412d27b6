//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes key generation and translation file editing to AI coding agents
//! over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TranskeyMcpServer, run_server};
