//! biopassport-figures: publication figures for BioPassport benchmark runs.
//!
//! This crate loads the benchmark report (JSON) and the chain-size scaling
//! table (CSV) written by the benchmark harness, turns them into plain chart
//! series, and draws six fixed figures to a vector (SVG) and a raster (PNG)
//! file each.
//!
//! Series extraction lives next to the drawing code of each chart but is kept
//! free of any drawing backend so it can be tested without fonts or files.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod render;
pub mod report;
