//! Core logic for `goexpose`: workspace resolution, path handling, project
//! name inference, and the symlink operation itself.

pub mod config;
pub mod error;
pub mod expose;
pub mod paths;
pub mod workspace;
