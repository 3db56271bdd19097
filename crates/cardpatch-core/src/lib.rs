//! # cardpatch-core
//!
//! Text transforms and persistence for patching a team-themed stylesheet.
//!
//! Two concerns, two modules:
//! - [`transform`]: pure regex substitutions over the stylesheet text
//!   (selector join + theme-header alias injection)
//! - [`patcher`]: read / compare / backup-then-overwrite protocol
//!
//! The transforms operate on raw text, not a parsed CSS tree; both rewrites
//! are non-overlapping pattern replacements over a known input shape.

pub mod error;
pub mod patcher;
pub mod transform;

pub use error::PatchError;
pub use patcher::{PatchOutcome, patch_file};
pub use transform::patch_stylesheet;
