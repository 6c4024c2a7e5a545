////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

//! Best-effort reconstruction of the command registry from a `vulkan.h`.
//!
//! Single forward pass over the header, one line at a time. Lines that do not
//! match any of the recognized declaration shapes are skipped without complaint,
//! this is a maintenance aid and not a validator. Only one platform guard is
//! tracked at a time, so nested `#ifdef VK_USE_PLATFORM_*` blocks would be
//! misattributed.

use std::io;

use log::debug;

use crate::registry::{Command, Extension, Registry};

/// Parses function-pointer typedefs, extension macros and platform guards out of
/// the header text, producing extensions in declaration order.
pub fn parse_header(src: &str) -> Registry {
    let mut extensions: Vec<Extension> = Vec::new();
    let mut ext_guard: Option<String> = None;
    let mut spec_version: u32 = 0;

    for raw in src.lines() {
        let line = raw.trim();

        if line.starts_with("#define VK_API_VERSION") {
            match api_version_minor(line) {
                Some(minor) => {
                    spec_version = minor;
                    extensions.push(Extension::new("VK_core", minor, None, Vec::new()));
                }
                None => debug!("unparseable API version macro: {}", line),
            }
        } else if is_command_typedef(line) {
            match extensions.last_mut() {
                Some(ext) => {
                    if let Some(cmd) = command_from_typedef(line) {
                        ext.commands.push(cmd);
                    } else {
                        debug!("unparseable command typedef: {}", line);
                    }
                }
                None => debug!("command typedef before any version macro: {}", line),
            }
        } else if line.starts_with("#ifdef VK_USE_PLATFORM") {
            ext_guard = line.split_once(' ').map(|(_, guard)| guard.to_owned());
        } else if line.starts_with("#define") && line.contains("SPEC_VERSION ") {
            match line.rsplit(' ').next().and_then(|tok| tok.parse().ok()) {
                Some(version) => spec_version = version,
                None => debug!("unparseable spec version macro: {}", line),
            }
        } else if line.starts_with("#define") && line.contains("EXTENSION_NAME ") {
            match quoted_value(line) {
                Some(name) => {
                    // spec_version was set by the preceding SPEC_VERSION macro,
                    // or carries over the running value when the header omits one
                    extensions.push(Extension::new(name, spec_version, ext_guard.as_deref(), Vec::new()));
                }
                None => debug!("unparseable extension name macro: {}", line),
            }
        } else if line.starts_with("#endif")
            && ext_guard.as_deref().map_or(false, |guard| line.contains(guard))
        {
            ext_guard = None;
        }
    }

    Registry::new(extensions)
}

/// Writes the registry as construction-expression literals, one binding per
/// extension followed by the catalog-order list. The output is pasted into
/// `table.rs` when the table is refreshed.
pub fn write_literals<W>(registry: &Registry, dest: &mut W) -> io::Result<()>
where W: io::Write {
    for ext in &registry.extensions {
        writeln!(dest, "let {} = {};", ext.name.to_lowercase(), ext)?;
        writeln!(dest)?;
    }

    writeln!(dest, "vec![")?;
    for ext in &registry.extensions {
        writeln!(dest, "    {},", ext.name.to_lowercase())?;
    }
    writeln!(dest, "]")
}

/// A line shaped like `typedef <ret> (VKAPI_PTR *PFN_vkName)(FirstParam ...);`.
/// The generic `PFN_vkVoidFunction` typedef matches that shape but names no
/// command, so it is excluded.
fn is_command_typedef(line: &str) -> bool {
    line.starts_with("typedef") && line.ends_with(");") && !line.contains("*PFN_vkVoidFunction")
}

fn command_from_typedef(line: &str) -> Option<Command> {
    let name_begin = line.find("*PFN_vk")? + "*PFN_vk".len();
    let name_end = line[name_begin..].find(")(")? + name_begin;
    let name = &line[name_begin..name_end];

    let dispatch_begin = name_end + 2;
    let dispatch_end = line[dispatch_begin..].find(' ')? + dispatch_begin;
    let dispatch = &line[dispatch_begin..dispatch_end];

    // only the first parameter is inspected; a non-handle first parameter means
    // the command dispatches without one
    Some(Command::new(name, dispatch.starts_with("Vk").then_some(dispatch)))
}

/// The minor version is the second-to-last comma-delimited field of
/// `#define VK_API_VERSION VK_MAKE_VERSION(major, minor, patch)`.
fn api_version_minor(line: &str) -> Option<u32> {
    let minor_end = line.rfind(',')?;
    let minor_begin = line[..minor_end].rfind(',')? + 1;
    line[minor_begin..minor_end].trim().parse().ok()
}

fn quoted_value(line: &str) -> Option<&str> {
    let value_end = line.rfind('"')?;
    let value_begin = line[..value_end].rfind('"')? + 1;
    Some(&line[value_begin..value_end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Tier;
    use indoc::indoc;

    const HEADER: &str = indoc! {r#"
        #ifndef VULKAN_H_
        #define VULKAN_H_ 1

        #define VK_API_VERSION VK_MAKE_VERSION(1, 0, 0)

        typedef void (VKAPI_PTR *PFN_vkVoidFunction)(void);
        typedef VkResult (VKAPI_PTR *PFN_vkCreateInstance)(const VkInstanceCreateInfo* pCreateInfo, const VkAllocationCallbacks* pAllocator, VkInstance* pInstance);
        typedef void (VKAPI_PTR *PFN_vkDestroyInstance)(VkInstance instance, const VkAllocationCallbacks* pAllocator);
        typedef void (VKAPI_PTR *PFN_vkDestroyDevice)(VkDevice device, const VkAllocationCallbacks* pAllocator);

        #define VK_KHR_surface 1
        #define VK_KHR_SURFACE_SPEC_VERSION 25
        #define VK_KHR_SURFACE_EXTENSION_NAME "VK_KHR_surface"
        typedef void (VKAPI_PTR *PFN_vkDestroySurfaceKHR)(VkInstance instance, VkSurfaceKHR surface, const VkAllocationCallbacks* pAllocator);

        #ifdef VK_USE_PLATFORM_XCB_KHR
        #define VK_KHR_XCB_SURFACE_SPEC_VERSION 6
        #define VK_KHR_XCB_SURFACE_EXTENSION_NAME "VK_KHR_xcb_surface"
        typedef VkResult (VKAPI_PTR *PFN_vkCreateXcbSurfaceKHR)(VkInstance instance, const VkXcbSurfaceCreateInfoKHR* pCreateInfo, const VkAllocationCallbacks* pAllocator, VkSurfaceKHR* pSurface);
        #endif /* VK_USE_PLATFORM_XCB_KHR */

        #define VK_EXT_headless_surface 1
        #define VK_EXT_HEADLESS_SURFACE_SPEC_VERSION 1
        #define VK_EXT_HEADLESS_SURFACE_EXTENSION_NAME "VK_EXT_headless_surface"
        typedef VkResult (VKAPI_PTR *PFN_vkCreateHeadlessSurfaceEXT)(VkInstance instance, const VkHeadlessSurfaceCreateInfoEXT* pCreateInfo, const VkAllocationCallbacks* pAllocator, VkSurfaceKHR* pSurface);

        #endif
    "#};

    #[test]
    fn reconstructs_groups_in_declaration_order() {
        let registry = parse_header(HEADER);

        let names: Vec<&str> = registry.extensions.iter().map(|ext| ext.name.as_str()).collect();
        assert_eq!(names, ["VK_core", "VK_KHR_surface", "VK_KHR_xcb_surface", "VK_EXT_headless_surface"]);

        let core = &registry.extensions[0];
        assert_eq!(core.version, 0);
        assert_eq!(core.guard, None);
        assert_eq!(core.commands.len(), 3);
        assert_eq!(core.commands[0].name, "CreateInstance");
        assert_eq!(core.commands[0].dispatch, None);
        assert_eq!(core.commands[1].dispatch.as_deref(), Some("VkInstance"));
        assert_eq!(core.commands[2].dispatch.as_deref(), Some("VkDevice"));
        assert_eq!(core.commands[2].tier, Tier::Device);
    }

    #[test]
    fn void_function_typedef_is_excluded() {
        let registry = parse_header(HEADER);
        assert!(registry.find_command("VoidFunction").is_none());
    }

    #[test]
    fn platform_guard_attaches_and_clears() {
        let registry = parse_header(HEADER);

        let xcb = &registry.extensions[2];
        assert_eq!(xcb.guard.as_deref(), Some("VK_USE_PLATFORM_XCB_KHR"));
        assert_eq!(xcb.version, 6);
        assert_eq!(xcb.commands.len(), 1);

        // the closing #endif mentioned the guard, so the next group is unguarded
        let headless = &registry.extensions[3];
        assert_eq!(headless.guard, None);
    }

    #[test]
    fn non_handle_first_parameter_means_no_dispatch() {
        let line = "typedef VkResult (VKAPI_PTR *PFN_vkEnumerateInstanceVersion)(uint32_t* pApiVersion);";
        let cmd = command_from_typedef(line).unwrap();
        assert_eq!(cmd.name, "EnumerateInstanceVersion");
        assert_eq!(cmd.dispatch, None);
        assert_eq!(cmd.tier, Tier::Loader);
    }

    #[test]
    fn typedef_before_any_group_is_skipped() {
        let registry = parse_header(
            "typedef void (VKAPI_PTR *PFN_vkDestroyInstance)(VkInstance instance, const VkAllocationCallbacks* pAllocator);\n",
        );
        assert!(registry.extensions.is_empty());
    }

    #[test]
    fn spec_version_carries_over_when_missing() {
        let src = indoc! {r#"
            #define VK_KHR_A_SPEC_VERSION 7
            #define VK_KHR_A_EXTENSION_NAME "VK_KHR_a"
            #define VK_KHR_B_EXTENSION_NAME "VK_KHR_b"
        "#};

        let registry = parse_header(src);
        assert_eq!(registry.extensions[0].version, 7);
        // the running value is not reset between groups
        assert_eq!(registry.extensions[1].version, 7);
    }

    #[test]
    fn literal_output_round_trips_into_table_syntax() {
        let registry = Registry::new(vec![
            Extension::new("VK_core", 0, None, vec![Command::new("CreateInstance", None)]),
            Extension::new(
                "VK_KHR_xcb_surface",
                6,
                Some("VK_USE_PLATFORM_XCB_KHR"),
                vec![Command::new("CreateXcbSurfaceKHR", Some("VkInstance"))],
            ),
        ]);

        let mut out = Vec::new();
        write_literals(&registry, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            indoc! {r#"
                let vk_core = Extension::new("VK_core", 0, None, vec![
                    Command::new("CreateInstance", None),
                ]);

                let vk_khr_xcb_surface = Extension::new("VK_KHR_xcb_surface", 6, Some("VK_USE_PLATFORM_XCB_KHR"), vec![
                    Command::new("CreateXcbSurfaceKHR", Some("VkInstance")),
                ]);

                vec![
                    vk_core,
                    vk_khr_xcb_surface,
                ]
            "#}
        );
    }
}
