//! `goexpose` — expose a code directory inside a Go workspace.
//!
//! Resolves a GOPATH-style workspace root, derives a project name from the
//! code path (or takes an explicit one), and creates a symbolic link under
//! `<workspace>/src` so the code can be imported by its conventional path.

pub mod cli;
pub mod core;
