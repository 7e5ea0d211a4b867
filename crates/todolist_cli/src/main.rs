//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the RPC server runtime setup.
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());
}
