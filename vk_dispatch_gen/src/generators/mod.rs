////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use crate::registry::{Command, Registry};
use crate::Error;
use std::io;

mod header_gen;
mod source_gen;

pub use header_gen::HeaderGenerator;
pub use source_gen::SourceGenerator;

/// Trait for a bindings generator.
pub trait Generator {
    /// Builds the dispatch table bindings.
    fn write<W>(&self, registry: &Registry, dest: &mut W) -> Result<(), Error>
    where W: io::Write;
}

/// Generates the native symbol name of a `Command`.
///
/// Example results: `"vkCreateInstance"`, `"vkQueuePresentKHR"`, etc.
pub fn gen_symbol_name(cmd: &str) -> String {
    format!("vk{}", cmd)
}

/// Generates the function pointer type name of a `Command`.
pub fn gen_pfn_name(cmd: &str) -> String {
    format!("PFN_vk{}", cmd)
}

/// Writes one resolution statement, `#ifdef`-wrapped if the command's extension
/// carries a compile guard. Device handles resolve through `GetDeviceProcAddr`,
/// everything else through `GetInstanceProcAddr`.
pub(crate) fn write_resolve<W>(
    dest: &mut W,
    dispatchable: &str,
    cmd: &Command,
    guard: Option<&str>,
) -> io::Result<()>
where W: io::Write {
    let accessor = if dispatchable == "dev" { "GetDeviceProcAddr" } else { "GetInstanceProcAddr" };

    if let Some(guard) = guard {
        writeln!(dest, "#ifdef {}", guard)?;
    }
    writeln!(
        dest,
        "    {name} = reinterpret_cast<{pfn}>({accessor}({dispatchable}, \"{symbol}\"));",
        name = cmd.name,
        pfn = gen_pfn_name(&cmd.name),
        accessor = accessor,
        dispatchable = dispatchable,
        symbol = gen_symbol_name(&cmd.name),
    )?;
    if guard.is_some() {
        writeln!(dest, "#endif")?;
    }

    Ok(())
}
