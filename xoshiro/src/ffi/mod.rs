//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Integers, floats, lists and JSON strings at the boundary
//! 3. **Safe errors**: Rust errors become Python `ValueError`

pub mod generator;
