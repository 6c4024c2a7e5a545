////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::io;

use crate::generators::gen_pfn_name;
use crate::registry::Registry;
use crate::Error;

/// Emits the declarations header: one `extern` function pointer per command plus
/// the prototypes of the three initialization routines.
#[allow(missing_copy_implementations)]
pub struct HeaderGenerator {
    include_guard: String,
}

impl HeaderGenerator {
    /// The inclusion guard is derived from the output file name, so the same
    /// registry written to a differently named header stays self-consistent.
    pub fn new(filename: &str) -> HeaderGenerator {
        HeaderGenerator { include_guard: filename.replace('.', "_").to_uppercase() }
    }
}

impl super::Generator for HeaderGenerator {
    fn write<W>(&self, registry: &Registry, dest: &mut W) -> Result<(), Error>
    where W: io::Write {
        writeln!(dest, "// This file is generated.")?;
        writeln!(dest, "#ifndef {}", self.include_guard)?;
        writeln!(dest, "#define {}", self.include_guard)?;
        writeln!(dest)?;
        writeln!(dest, "#include <vulkan_interfaces.h>")?;
        writeln!(dest)?;
        writeln!(dest, "namespace vk {{")?;
        writeln!(dest)?;

        for ext in &registry.extensions {
            if let Some(guard) = &ext.guard {
                writeln!(dest, "#ifdef {}", guard)?;
            }

            writeln!(dest, "// {}", ext.name)?;
            for cmd in &ext.commands {
                writeln!(dest, "extern {} {};", gen_pfn_name(&cmd.name), cmd.name)?;
            }

            if ext.guard.is_some() {
                writeln!(dest, "#endif")?;
            }
            writeln!(dest)?;
        }

        writeln!(dest, "void init_dispatch_table_top(PFN_vkGetInstanceProcAddr get_instance_proc_addr);")?;
        writeln!(dest, "void init_dispatch_table_middle(VkInstance instance, bool include_bottom);")?;
        writeln!(dest, "void init_dispatch_table_bottom(VkInstance instance, VkDevice dev);")?;
        writeln!(dest)?;
        writeln!(dest, "}} // namespace vk")?;
        writeln!(dest)?;
        writeln!(dest, "#endif // {}", self.include_guard)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Command, Extension};
    use indoc::indoc;

    fn small_registry() -> Registry {
        Registry::new(vec![
            Extension::new(
                "VK_core",
                0,
                None,
                vec![
                    Command::new("CreateInstance", None),
                    Command::new("DestroyInstance", Some("VkInstance")),
                ],
            ),
            Extension::new(
                "VK_KHR_xlib_surface",
                6,
                Some("VK_USE_PLATFORM_XLIB_KHR"),
                vec![Command::new("CreateXlibSurfaceKHR", Some("VkInstance"))],
            ),
        ])
    }

    #[test]
    fn declarations_header() {
        let mut out = Vec::new();
        small_registry().write_bindings(HeaderGenerator::new("vk_dispatch_table.h"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            indoc! {r#"
                // This file is generated.
                #ifndef VK_DISPATCH_TABLE_H
                #define VK_DISPATCH_TABLE_H

                #include <vulkan_interfaces.h>

                namespace vk {

                // VK_core
                extern PFN_vkCreateInstance CreateInstance;
                extern PFN_vkDestroyInstance DestroyInstance;

                #ifdef VK_USE_PLATFORM_XLIB_KHR
                // VK_KHR_xlib_surface
                extern PFN_vkCreateXlibSurfaceKHR CreateXlibSurfaceKHR;
                #endif

                void init_dispatch_table_top(PFN_vkGetInstanceProcAddr get_instance_proc_addr);
                void init_dispatch_table_middle(VkInstance instance, bool include_bottom);
                void init_dispatch_table_bottom(VkInstance instance, VkDevice dev);

                } // namespace vk

                #endif // VK_DISPATCH_TABLE_H
            "#}
        );
    }

    #[test]
    fn header_emission_is_deterministic() {
        let registry = small_registry();

        let mut first = Vec::new();
        registry.write_bindings(HeaderGenerator::new("t.h"), &mut first).unwrap();
        let mut second = Vec::new();
        registry.write_bindings(HeaderGenerator::new("t.h"), &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_names_are_not_deduplicated() {
        let registry = Registry::new(vec![
            Extension::new("VK_core", 0, None, vec![Command::new("CreateInstance", None)]),
            Extension::new("VK_other", 1, None, vec![Command::new("CreateInstance", None)]),
        ]);

        let mut out = Vec::new();
        registry.write_bindings(HeaderGenerator::new("t.h"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("extern PFN_vkCreateInstance CreateInstance;").count(), 2);
    }
}
