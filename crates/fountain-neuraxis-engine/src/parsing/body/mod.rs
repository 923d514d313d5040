//! # Body Parsing
//!
//! Turns the screenplay body (everything after the title page) into elements.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): `FountainLineClassifier` decides
//!    what a single line is, given the line, its successor and a small
//!    [`ScanContext`] (scan mode and blank-line run). The rules form one
//!    ordered chain; earlier rules shadow later ones.
//!
//! 2. **Element Construction** (`builder`): `ElementBuilder` applies each
//!    decision, appending elements, merging adjacent lines into the previous
//!    element and flipping dual dialogue on an earlier cue.
//!
//! ## Modules
//!
//! - **`kinds`**: sigil knowledge per element family (boneyard, notes,
//!   sections, scene headings, transitions, dialogue)
//! - **`classify`**: `LineClass` decisions
//! - **`builder`**: the scan state machine
//!
//! ## Key Invariants
//!
//! - Boneyard and dialogue block are exclusive scan modes, never both
//! - Elements are appended in source order and never removed
//! - Every line that reaches a character-indexing rule is non-empty

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::ElementBuilder;
pub use classify::{FountainLineClassifier, LineClass, Mode, ScanContext};
