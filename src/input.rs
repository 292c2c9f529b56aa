//! Translation documents as they come off disk.

pub mod translation;
