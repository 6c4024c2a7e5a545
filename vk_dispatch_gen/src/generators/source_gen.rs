////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::{io, ptr};

use crate::generators::{gen_pfn_name, write_resolve};
use crate::registry::Registry;
use crate::Error;

/// Emits the definitions file: the function pointer storage plus the three tiered
/// initialization routines.
///
/// `init_dispatch_table_top` resolves every loader command through the bootstrap
/// accessor with a null handle. `init_dispatch_table_middle` resolves the instance
/// tier, and behind its `include_bottom` switch also resolves the device tier
/// through the instance accessor. Those pointers are instance-trampolined
/// stand-ins, valid per the Vulkan spec but one indirection slower, which is why
/// `init_dispatch_table_bottom` re-resolves the whole device tier device-direct
/// once a `VkDevice` exists.
#[allow(missing_copy_implementations)]
pub struct SourceGenerator {
    header_name: String,
}

impl SourceGenerator {
    /// `header_name` is the declarations header the emitted file includes.
    pub fn new(header_name: &str) -> SourceGenerator {
        SourceGenerator { header_name: header_name.to_owned() }
    }
}

impl super::Generator for SourceGenerator {
    fn write<W>(&self, registry: &Registry, dest: &mut W) -> Result<(), Error>
    where W: io::Write {
        // fail fast before anything is written, the routines below call these
        let get_instance_proc_addr = registry
            .find_command("GetInstanceProcAddr")
            .ok_or(Error::MissingAccessor("GetInstanceProcAddr"))?;
        let get_device_proc_addr = registry
            .find_command("GetDeviceProcAddr")
            .ok_or(Error::MissingAccessor("GetDeviceProcAddr"))?;

        let buckets = registry.commands_by_tier();

        writeln!(dest, "// This file is generated.")?;
        writeln!(dest, "#include \"{}\"", self.header_name)?;
        writeln!(dest)?;
        writeln!(dest, "namespace vk {{")?;
        writeln!(dest)?;

        for ext in &registry.extensions {
            if let Some(guard) = &ext.guard {
                writeln!(dest, "#ifdef {}", guard)?;
            }

            for cmd in &ext.commands {
                writeln!(dest, "{} {};", gen_pfn_name(&cmd.name), cmd.name)?;
            }

            if ext.guard.is_some() {
                writeln!(dest, "#endif")?;
            }
        }
        writeln!(dest)?;

        writeln!(dest, "void init_dispatch_table_top(PFN_vkGetInstanceProcAddr get_instance_proc_addr)")?;
        writeln!(dest, "{{")?;
        writeln!(dest, "    GetInstanceProcAddr = get_instance_proc_addr;")?;
        writeln!(dest)?;
        for (cmd, guard) in &buckets.loader {
            write_resolve(dest, "VK_NULL_HANDLE", cmd, *guard)?;
        }
        writeln!(dest, "}}")?;
        writeln!(dest)?;

        writeln!(dest, "void init_dispatch_table_middle(VkInstance instance, bool include_bottom)")?;
        writeln!(dest, "{{")?;
        write_resolve(dest, "instance", get_instance_proc_addr, None)?;
        writeln!(dest)?;
        for (cmd, guard) in &buckets.instance {
            if ptr::eq(*cmd, get_instance_proc_addr) {
                continue;
            }
            write_resolve(dest, "instance", cmd, *guard)?;
        }
        writeln!(dest)?;
        writeln!(dest, "    if (!include_bottom)")?;
        writeln!(dest, "        return;")?;
        writeln!(dest)?;
        // no device handle exists yet, so these go through the instance accessor
        for (cmd, guard) in &buckets.device {
            write_resolve(dest, "instance", cmd, *guard)?;
        }
        writeln!(dest, "}}")?;
        writeln!(dest)?;

        writeln!(dest, "void init_dispatch_table_bottom(VkInstance instance, VkDevice dev)")?;
        writeln!(dest, "{{")?;
        write_resolve(dest, "instance", get_device_proc_addr, None)?;
        write_resolve(dest, "dev", get_device_proc_addr, None)?;
        writeln!(dest)?;
        for (cmd, guard) in &buckets.device {
            if ptr::eq(*cmd, get_device_proc_addr) {
                continue;
            }
            write_resolve(dest, "dev", cmd, *guard)?;
        }
        writeln!(dest, "}}")?;

        writeln!(dest)?;
        writeln!(dest, "}} // namespace vk")?;

        Ok(())
    }
}
