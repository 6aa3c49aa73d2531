//! Porcelain commands
//!
//! ## Commands
//!
//! - `init`: Create the `.git` skeleton Git needs to recognise a repository

pub mod init;
