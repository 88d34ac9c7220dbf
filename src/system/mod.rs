//! # System Interaction Layer
//!
//! The boundary between the client and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: Spawns the external tool, captures its combined output and
//!   maps process failures into errors that carry that output.

pub mod executor;
