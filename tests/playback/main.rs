//! Integration tests for Layer 2: Playback
//!
//! Tests cursor saturation and the player against real traces.

mod cursor;
mod player;
