// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D protein folding animation.
//!
//! foldscope generates a 20-residue alpha helix, scatters its atoms to
//! random unfolded positions, and animates them back onto the helix while
//! the user orbits the camera and switches representations.
//!
//! # Key entry points
//!
//! - [`engine::FoldingEngine`] - one interactive session (structure,
//!   animation, camera, scene)
//! - [`scene::Scene`] - the spheres, lines, and tube to draw this frame
//! - [`options::Options`] - runtime configuration (camera, animation,
//!   display, geometry, lighting, keybindings)
//! - `Viewer` - native winit window (feature `viewer`)
//! - `web::FoldingSession` - wasm-bindgen bridge (feature `web`)
//!
//! # Architecture
//!
//! Everything runs on one thread. The host feeds pointer events and
//! commands to the engine and calls [`engine::FoldingEngine::update`] once
//! per frame; the engine advances the animation, rebuilds the scene when
//! the fold moved, and bumps the scene generation so the host uploads only
//! when something changed.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod structure;
pub mod util;

#[cfg(feature = "viewer")]
pub mod gpu;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use engine::command::FoldCommand;
pub use engine::FoldingEngine;
pub use error::FoldError;
pub use input::InputEvent;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
