//! Library wrapper around the `launchgen` binary.
//!
//! Compiling the binary crate root as a module lets `cargo test -p launchgen-cli --lib`
//! typecheck and unit-test the CLI code without building the integration tests.

#[allow(dead_code)]
#[path = "main.rs"]
mod main_bin;
