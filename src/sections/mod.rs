//! Main module for postcraft library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod response;
pub mod testing;
