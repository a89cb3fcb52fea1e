//! biopassport-cli: command line entry point for rendering the benchmark figures.
pub mod cli;
pub mod input;
pub mod run;
