pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod sequence;
pub mod slice_utils;
