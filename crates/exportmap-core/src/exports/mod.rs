//! Package.json exports normalization.
//!
//! Turns a conditional `exports` declaration into a flat `subpath -> target`
//! map:
//! - Root shorthand (`"exports": "./index.js"` or a root conditions object)
//! - Subpath exports (`"./feature": ...`)
//! - Conditional exports, matched in declaration order
//! - Fallback arrays, with `[]`/`null` as explicit exclusions
//! - Pattern exports with a single `*`, expanded against files on disk

mod collect;
mod conditions;
mod expand;
mod fs;
mod matcher;
mod node;
mod normalize;
mod pattern;
mod validate;

pub use collect::{collect_candidates, Candidate, CandidateExports};
pub use conditions::{ConditionSet, DEFAULT_CONDITIONS};
pub use expand::{expand_wildcards, FlatExports};
pub use fs::{FileSystem, MemoryFs, OsFs, WalkedEntry};
pub use matcher::{match_node, Match};
pub use node::{is_subpath_key, Exports, ExportsNode};
pub use normalize::{normalize_exports, ExportsResolver, NormalizeOptions};
pub use validate::validate_exports;
