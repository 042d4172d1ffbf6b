//! WebAssembly bindings for the 6502 core.
//!
//! This module exposes a JavaScript-callable wrapper around a CPU with flat 64KB memory,
//! so a browser page can load a program and drive the processor pulse by pulse.

pub mod api;

pub use api::Emulator6502;
