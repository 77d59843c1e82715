//! Case-mapping strategies between configuration keys and struct field names.
//!
//! Configuration sources rarely spell their keys the way struct fields are spelled: a `kebab-case`
//! file binds to `PascalCase` fields, environment variables scream, and a handful of names never
//! fit any rule at all. This crate packages that tedium as strategy objects a configuration
//! library plugs in during unmarshalling:
//! - [`Format`]: the registry of the twelve supported notations.
//! - [`Matcher`]: a `(key, field)` predicate with manual exceptions and an optional trace sink.
//! - [`MapperPair`]: one name mapper per direction of a configuration round trip, built from a
//!   single validated rename table.
//!
//! The consuming library is responsible for discovering field names and enumerating configuration
//! keys; everything here is a pure computation over the strings it supplies.

mod error;
mod format;
mod mapper;
mod matcher;
mod overrides;

pub use error::Error;
pub use format::Format;
pub use mapper::{Mapper, MapperPair, MapperPairBuilder};
pub use matcher::{Matcher, MatcherBuilder};
