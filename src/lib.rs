//! Easeplot renders a fixed set of named easing functions as small PNG line
//! graphs, one file per easing.
//!
//! The pipeline is deliberately flat:
//!
//! 1. **Ease**: a closed enum of easing curves ([`Ease`])
//! 2. **Graph**: sample one curve across the fixed 200x200 canvas and stroke
//!    it over the border guide-lines ([`render_graph`] -> [`ImageRGBA`])
//! 3. **Encode**: serialize the raster as PNG and write it out
//!    ([`write_png`])
//!
//! Every render is a pure function of (easing, fixed constants), so repeated
//! renders of the same easing produce byte-identical PNG output.
#![forbid(unsafe_code)]

pub mod ease;
pub mod encode;
pub mod error;
pub mod graph;

pub use ease::Ease;
pub use encode::{encode_png, write_png};
pub use error::{PlotError, PlotResult};
pub use graph::{ImageRGBA, render_graph};
