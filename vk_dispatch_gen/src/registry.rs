////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::fmt;

use crate::{generators::Generator, Error};
use std::io;

/// Dispatchable handle types whose commands can only be resolved once a logical
/// device exists.
pub const DEVICE_DISPATCH_HANDLES: [&str; 3] = ["VkDevice", "VkQueue", "VkCommandBuffer"];

/// The loading tier of a command, i.e. which `init_dispatch_table_*` routine is
/// able to resolve its pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The bootstrap accessor handed in by the caller, before anything is loaded.
    Platform,
    /// Resolvable with `VK_NULL_HANDLE`, no instance required.
    Loader,
    /// Requires a `VkInstance` (or anything dispatched through one).
    Instance,
    /// Requires a `VkDevice`, `VkQueue` or `VkCommandBuffer`.
    Device,
}

impl Tier {
    /// Classifies a command by its dispatchable handle. Pure function of the
    /// arguments, commands never change tier after construction.
    pub fn classify(name: &str, dispatch: Option<&str>) -> Tier {
        match dispatch {
            Some(handle) if DEVICE_DISPATCH_HANDLES.contains(&handle) => Tier::Device,
            Some(_) => Tier::Instance,
            None if name == "GetInstanceProcAddr" => Tier::Platform,
            None => Tier::Loader,
        }
    }
}

/// A single API entry point, named without the `vk` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    /// Handle type of the first parameter, `None` for global commands.
    pub dispatch: Option<String>,
    pub tier: Tier,
}

impl Command {
    pub fn new(name: &str, dispatch: Option<&str>) -> Command {
        Command {
            name: name.to_owned(),
            dispatch: dispatch.map(str::to_owned),
            tier: Tier::classify(name, dispatch),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dispatch {
            Some(handle) => write!(f, "Command::new(\"{}\", Some(\"{}\"))", self.name, handle),
            None => write!(f, "Command::new(\"{}\", None)", self.name),
        }
    }
}

/// A versioned group of commands, either the `VK_core` sentinel or a named
/// extension. `guard` is a preprocessor symbol wrapped around every emitted
/// reference to the group's commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,
    pub version: u32,
    pub guard: Option<String>,
    pub commands: Vec<Command>,
}

impl Extension {
    pub fn new(name: &str, version: u32, guard: Option<&str>, commands: Vec<Command>) -> Extension {
        Extension {
            name: name.to_owned(),
            version,
            guard: guard.map(str::to_owned),
            commands,
        }
    }
}

/// Prints the construction expression for the extension, ready to be pasted into
/// the static table in `table.rs`.
impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Extension::new(\"{}\", {}, {}, vec![",
            self.name,
            self.version,
            match &self.guard {
                Some(guard) => format!("Some(\"{}\")", guard),
                None => "None".to_owned(),
            },
        )?;

        for cmd in &self.commands {
            writeln!(f, "    {},", cmd)?;
        }

        write!(f, "])")
    }
}

/// A command together with the compile guard of its originating extension.
pub type GuardedCommand<'a> = (&'a Command, Option<&'a str>);

/// Commands bucketed by loading tier, catalog order preserved within each bucket.
#[derive(Debug, Default)]
pub struct TierBuckets<'a> {
    pub platform: Vec<GuardedCommand<'a>>,
    pub loader: Vec<GuardedCommand<'a>>,
    pub instance: Vec<GuardedCommand<'a>>,
    pub device: Vec<GuardedCommand<'a>>,
}

/// The ordered set of extensions making up an API surface. Built once, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub extensions: Vec<Extension>,
}

impl Registry {
    pub fn new(extensions: Vec<Extension>) -> Registry {
        Registry { extensions }
    }

    /// Builds the dispatch table bindings.
    pub fn write_bindings<G, W>(&self, generator: G, dest: &mut W) -> Result<(), Error>
    where
        G: Generator,
        W: io::Write,
    {
        generator.write(self, dest)
    }

    /// Iterates every command in catalog order, paired with its extension's guard.
    pub fn guarded_commands(&self) -> impl Iterator<Item = GuardedCommand<'_>> {
        self.extensions
            .iter()
            .flat_map(|ext| ext.commands.iter().map(move |cmd| (cmd, ext.guard.as_deref())))
    }

    /// Splits the catalog into the four loading tiers in one pass.
    pub fn commands_by_tier(&self) -> TierBuckets<'_> {
        let mut buckets = TierBuckets::default();

        for (cmd, guard) in self.guarded_commands() {
            match cmd.tier {
                Tier::Platform => buckets.platform.push((cmd, guard)),
                Tier::Loader => buckets.loader.push((cmd, guard)),
                Tier::Instance => buckets.instance.push((cmd, guard)),
                Tier::Device => buckets.device.push((cmd, guard)),
            }
        }

        buckets
    }

    /// The last command with the given name, matching how a duplicated name would
    /// shadow an earlier one during emission.
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.extensions
            .iter()
            .flat_map(|ext| ext.commands.iter())
            .filter(|cmd| cmd.name == name)
            .last()
    }

    /// Fail-fast check that the two proc-address accessors exist. Without them the
    /// generated initialization routines would call undefined symbols, so source
    /// emission refuses to run on a registry that fails this.
    pub fn validate(&self) -> Result<(), Error> {
        for accessor in ["GetInstanceProcAddr", "GetDeviceProcAddr"] {
            if self.find_command(accessor).is_none() {
                return Err(Error::MissingAccessor(accessor));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn classification_by_dispatch_handle() {
        assert_eq!(Tier::classify("DestroyDevice", Some("VkDevice")), Tier::Device);
        assert_eq!(Tier::classify("QueueSubmit", Some("VkQueue")), Tier::Device);
        assert_eq!(Tier::classify("CmdDraw", Some("VkCommandBuffer")), Tier::Device);
        assert_eq!(Tier::classify("DestroyInstance", Some("VkInstance")), Tier::Instance);
        assert_eq!(
            Tier::classify("GetPhysicalDeviceProperties", Some("VkPhysicalDevice")),
            Tier::Instance
        );
        assert_eq!(Tier::classify("GetInstanceProcAddr", None), Tier::Platform);
        assert_eq!(Tier::classify("CreateInstance", None), Tier::Loader);
        assert_eq!(Tier::classify("EnumerateInstanceLayerProperties", None), Tier::Loader);
    }

    #[test]
    fn classification_is_stable() {
        for _ in 0..3 {
            assert_eq!(Tier::classify("GetDeviceQueue", Some("VkDevice")), Tier::Device);
        }
    }

    #[test]
    fn create_and_destroy_instance_scenario() {
        let ext = Extension::new(
            "VK_core",
            0,
            None,
            vec![
                Command::new("CreateInstance", None),
                Command::new("DestroyInstance", Some("VkInstance")),
            ],
        );

        assert_eq!(ext.commands[0].tier, Tier::Loader);
        assert_eq!(ext.commands[1].tier, Tier::Instance);

        let registry = Registry::new(vec![ext]);
        let buckets = registry.commands_by_tier();
        assert_eq!(buckets.loader.len(), 1);
        assert_eq!(buckets.loader[0].0.name, "CreateInstance");
        assert_eq!(buckets.instance.len(), 1);
        assert_eq!(buckets.instance[0].0.name, "DestroyInstance");
        assert!(buckets.platform.is_empty());
        assert!(buckets.device.is_empty());
    }

    #[test]
    fn buckets_carry_extension_guards() {
        let registry = Registry::new(vec![
            Extension::new("VK_core", 0, None, vec![Command::new("DestroyDevice", Some("VkDevice"))]),
            Extension::new(
                "VK_KHR_swapchain",
                67,
                Some("FEATURE_X"),
                vec![Command::new("CreateSwapchainKHR", Some("VkDevice"))],
            ),
        ]);

        let buckets = registry.commands_by_tier();
        assert_eq!(buckets.device.len(), 2);
        assert_eq!(buckets.device[0], (registry.find_command("DestroyDevice").unwrap(), None));
        assert_eq!(
            buckets.device[1],
            (registry.find_command("CreateSwapchainKHR").unwrap(), Some("FEATURE_X"))
        );
    }

    #[test]
    fn empty_registry_is_rejected() {
        let registry = Registry::new(vec![]);
        match registry.validate() {
            Err(Error::MissingAccessor(name)) => assert_eq!(name, "GetInstanceProcAddr"),
            other => panic!("expected MissingAccessor, got {:?}", other),
        }
    }

    #[test]
    fn missing_device_accessor_is_rejected() {
        let registry = Registry::new(vec![Extension::new(
            "VK_core",
            0,
            None,
            vec![Command::new("GetInstanceProcAddr", Some("VkInstance"))],
        )]);
        match registry.validate() {
            Err(Error::MissingAccessor(name)) => assert_eq!(name, "GetDeviceProcAddr"),
            other => panic!("expected MissingAccessor, got {:?}", other),
        }
    }

    #[test]
    fn extension_displays_as_construction_literal() {
        let ext = Extension::new(
            "VK_KHR_xcb_surface",
            6,
            Some("VK_USE_PLATFORM_XCB_KHR"),
            vec![
                Command::new("CreateXcbSurfaceKHR", Some("VkInstance")),
                Command::new("EnumerateInstanceVersion", None),
            ],
        );

        assert_eq!(
            ext.to_string(),
            indoc! {r#"
                Extension::new("VK_KHR_xcb_surface", 6, Some("VK_USE_PLATFORM_XCB_KHR"), vec![
                    Command::new("CreateXcbSurfaceKHR", Some("VkInstance")),
                    Command::new("EnumerateInstanceVersion", None),
                ])"#}
        );
    }
}
