////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

//! A Vulkan dispatch table generator. It turns a registry of API commands into the
//! C++ glue that declares one function pointer per command and resolves each pointer
//! at the earliest loading tier where its dispatchable handle exists.
//!
//! # Example
//!
//! ```no_run
//! use vk_dispatch_gen::{generators::HeaderGenerator, table};
//! use std::fs::File;
//!
//! fn main() -> Result<(), vk_dispatch_gen::Error> {
//!     let mut file = File::create("vk_dispatch_table.h")?;
//!     table::VULKAN.write_bindings(HeaderGenerator::new("vk_dispatch_table.h"), &mut file)
//! }
//! ```
//!
//! The registry embedded in [`table`] is hand-maintained; [`scan`] reconstructs it
//! from a `vulkan.h` so the table can be refreshed when the headers move.

use std::io;

pub mod generators;
pub mod scan;
pub mod table;

mod registry;

pub use generators::{Generator, HeaderGenerator, SourceGenerator};
pub use registry::*;

/// Errors surfaced while emitting bindings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The registry has no command with the given name, but generated code would
    /// have to call it to resolve other pointers.
    #[error("dispatch accessor vk{0} is missing from the registry")]
    MissingAccessor(&'static str),
}
