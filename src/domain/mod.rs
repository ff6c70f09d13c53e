//! Domain logic - parsing, comparing and bumping versions
//!
//! Everything here is pure: no file system, environment or git access, and
//! no logging. Errors are returned to the caller untouched.

pub mod build_metadata;
pub mod bump;
pub mod compare;
pub mod number;
pub mod parser;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use build_metadata::BuildMetadata;
pub use bump::{bump_str, BumpDirective};
pub use compare::{compare, compare_str, compare_strict, compare_with, CompareMode, Precedence};
pub use number::VersionNumber;
pub use prerelease::{Identifier, Prerelease};
pub use tag::TagPattern;
pub use version::Version;
