//! Testing utilities
//!
//!     Tests in this workspace follow two rules, borrowed from how the rest of the toolchain
//!     is tested:
//!
//!         1. Prefer the verified documents under `samples/` (via [Samples]) over ad-hoc
//!            strings. A sample that round-trips is known good; a one-off string in a test
//!            is easy to get subtly wrong and then the reader gets tuned to the mistake.
//!         2. Check trees with [assert_tree], which walks the structure and reports the path
//!            of the first mismatch, instead of comparing counts.
//!
//!     Small inline strings are still fine for edge cases no sample covers (odd indentation,
//!     CRLF, malformed lines).
//!
//!     ```rust,ignore
//!     use yamlet_parser::testing::{assert_tree, Samples};
//!
//!     let root = Samples::decode("hero");
//!     assert_tree(&root).child_count(2).child(1, |stats| {
//!         stats.name("stats").attribute("type", "int").child_count(1);
//!     });
//!     ```

pub mod assertions;
pub mod samples;

pub use assertions::{assert_tree, assert_trees_match, NodeAssertion};
pub use samples::Samples;
