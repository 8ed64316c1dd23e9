#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod error;
pub mod exports;
pub mod manifest;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use exports::{
    normalize_exports, Candidate, CandidateExports, ConditionSet, Exports, ExportsNode,
    ExportsResolver, FileSystem, FlatExports, Match, MemoryFs, NormalizeOptions, OsFs,
    DEFAULT_CONDITIONS,
};
pub use manifest::{exports_field, read_package_json};
pub use version::VERSION;
