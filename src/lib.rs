//! evalgraph-rs: chess evaluation-graph engine.
//!
//! This crate provides the layout, scaling and hit-testing core of a chess
//! GUI's evaluation strip-chart: one data column per half-move, rendered as a
//! bar histogram or as a condensed two-polyline diagram depending on the
//! available width, plus the exact pixel-to-ply inverse used for click
//! navigation. Drawing backends stay behind the [`render::Renderer`]
//! contract.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{EvalGraph, EvalGraphConfig, GraphSnapshot};
pub use error::{GraphError, GraphResult};
