//! MacroCal Tools module
//!
//! MCP tool implementations for the macro calculation service.

pub mod calculate;
pub mod status;
