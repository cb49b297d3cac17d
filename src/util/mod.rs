//! Shared utilities for the hosts.

/// Frame delta and smoothed FPS for host render loops.
pub mod frame_timing;
