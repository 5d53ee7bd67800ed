//! Hands Go and C++ sources to the external toolchains which compile them to WebAssembly.
//!
//! `.go` files are built with TinyGo, `.cpp` files with Emscripten's `emcc`.
//! Nothing is compiled in-process: the selected program runs with the caller's
//! stdout and stderr and its exit status decides the result.

mod dispatcher;
mod error;
mod toolchain;

pub use dispatcher::*;
pub use error::*;
pub use toolchain::*;
