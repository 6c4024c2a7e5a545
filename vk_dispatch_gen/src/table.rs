////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

//! The hand-maintained command registry the generator runs from. Refreshed by
//! pasting the output of `vkdt scan vulkan.h` over `vulkan_extensions`.

use lazy_static::lazy_static;

use crate::registry::{Command, Extension, Registry};

lazy_static! {
    /// The embedded Vulkan registry, constructed once per process.
    pub static ref VULKAN: Registry = Registry::new(vulkan_extensions());
}

// generated by "vkdt scan vulkan.h"
fn vulkan_extensions() -> Vec<Extension> {
    let vk_core = Extension::new("VK_core", 0, None, vec![
        Command::new("CreateInstance", None),
        Command::new("DestroyInstance", Some("VkInstance")),
        Command::new("EnumeratePhysicalDevices", Some("VkInstance")),
        Command::new("GetPhysicalDeviceFeatures", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceFormatProperties", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceImageFormatProperties", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceProperties", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceQueueFamilyProperties", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceMemoryProperties", Some("VkPhysicalDevice")),
        Command::new("GetInstanceProcAddr", Some("VkInstance")),
        Command::new("GetDeviceProcAddr", Some("VkDevice")),
        Command::new("CreateDevice", Some("VkPhysicalDevice")),
        Command::new("DestroyDevice", Some("VkDevice")),
        Command::new("EnumerateInstanceExtensionProperties", None),
        Command::new("EnumerateDeviceExtensionProperties", Some("VkPhysicalDevice")),
        Command::new("EnumerateInstanceLayerProperties", None),
        Command::new("GetDeviceQueue", Some("VkDevice")),
        Command::new("QueueSubmit", Some("VkQueue")),
        Command::new("QueueWaitIdle", Some("VkQueue")),
        Command::new("DeviceWaitIdle", Some("VkDevice")),
        Command::new("AllocateMemory", Some("VkDevice")),
        Command::new("FreeMemory", Some("VkDevice")),
        Command::new("MapMemory", Some("VkDevice")),
        Command::new("UnmapMemory", Some("VkDevice")),
        Command::new("FlushMappedMemoryRanges", Some("VkDevice")),
        Command::new("InvalidateMappedMemoryRanges", Some("VkDevice")),
        Command::new("GetDeviceMemoryCommitment", Some("VkDevice")),
        Command::new("BindBufferMemory", Some("VkDevice")),
        Command::new("BindImageMemory", Some("VkDevice")),
        Command::new("GetBufferMemoryRequirements", Some("VkDevice")),
        Command::new("GetImageMemoryRequirements", Some("VkDevice")),
        Command::new("GetImageSparseMemoryRequirements", Some("VkDevice")),
        Command::new("GetPhysicalDeviceSparseImageFormatProperties", Some("VkPhysicalDevice")),
        Command::new("QueueBindSparse", Some("VkQueue")),
        Command::new("CreateFence", Some("VkDevice")),
        Command::new("DestroyFence", Some("VkDevice")),
        Command::new("ResetFences", Some("VkDevice")),
        Command::new("GetFenceStatus", Some("VkDevice")),
        Command::new("WaitForFences", Some("VkDevice")),
        Command::new("CreateSemaphore", Some("VkDevice")),
        Command::new("DestroySemaphore", Some("VkDevice")),
        Command::new("CreateEvent", Some("VkDevice")),
        Command::new("DestroyEvent", Some("VkDevice")),
        Command::new("GetEventStatus", Some("VkDevice")),
        Command::new("SetEvent", Some("VkDevice")),
        Command::new("ResetEvent", Some("VkDevice")),
        Command::new("CreateQueryPool", Some("VkDevice")),
        Command::new("DestroyQueryPool", Some("VkDevice")),
        Command::new("GetQueryPoolResults", Some("VkDevice")),
        Command::new("CreateBuffer", Some("VkDevice")),
        Command::new("DestroyBuffer", Some("VkDevice")),
        Command::new("CreateBufferView", Some("VkDevice")),
        Command::new("DestroyBufferView", Some("VkDevice")),
        Command::new("CreateImage", Some("VkDevice")),
        Command::new("DestroyImage", Some("VkDevice")),
        Command::new("GetImageSubresourceLayout", Some("VkDevice")),
        Command::new("CreateImageView", Some("VkDevice")),
        Command::new("DestroyImageView", Some("VkDevice")),
        Command::new("CreateShaderModule", Some("VkDevice")),
        Command::new("DestroyShaderModule", Some("VkDevice")),
        Command::new("CreatePipelineCache", Some("VkDevice")),
        Command::new("DestroyPipelineCache", Some("VkDevice")),
        Command::new("GetPipelineCacheData", Some("VkDevice")),
        Command::new("MergePipelineCaches", Some("VkDevice")),
        Command::new("CreateGraphicsPipelines", Some("VkDevice")),
        Command::new("CreateComputePipelines", Some("VkDevice")),
        Command::new("DestroyPipeline", Some("VkDevice")),
        Command::new("CreatePipelineLayout", Some("VkDevice")),
        Command::new("DestroyPipelineLayout", Some("VkDevice")),
        Command::new("CreateSampler", Some("VkDevice")),
        Command::new("DestroySampler", Some("VkDevice")),
        Command::new("CreateDescriptorSetLayout", Some("VkDevice")),
        Command::new("DestroyDescriptorSetLayout", Some("VkDevice")),
        Command::new("CreateDescriptorPool", Some("VkDevice")),
        Command::new("DestroyDescriptorPool", Some("VkDevice")),
        Command::new("ResetDescriptorPool", Some("VkDevice")),
        Command::new("AllocateDescriptorSets", Some("VkDevice")),
        Command::new("FreeDescriptorSets", Some("VkDevice")),
        Command::new("UpdateDescriptorSets", Some("VkDevice")),
        Command::new("CreateFramebuffer", Some("VkDevice")),
        Command::new("DestroyFramebuffer", Some("VkDevice")),
        Command::new("CreateRenderPass", Some("VkDevice")),
        Command::new("DestroyRenderPass", Some("VkDevice")),
        Command::new("GetRenderAreaGranularity", Some("VkDevice")),
        Command::new("CreateCommandPool", Some("VkDevice")),
        Command::new("DestroyCommandPool", Some("VkDevice")),
        Command::new("ResetCommandPool", Some("VkDevice")),
        Command::new("AllocateCommandBuffers", Some("VkDevice")),
        Command::new("FreeCommandBuffers", Some("VkDevice")),
        Command::new("BeginCommandBuffer", Some("VkCommandBuffer")),
        Command::new("EndCommandBuffer", Some("VkCommandBuffer")),
        Command::new("ResetCommandBuffer", Some("VkCommandBuffer")),
        Command::new("CmdBindPipeline", Some("VkCommandBuffer")),
        Command::new("CmdSetViewport", Some("VkCommandBuffer")),
        Command::new("CmdSetScissor", Some("VkCommandBuffer")),
        Command::new("CmdSetLineWidth", Some("VkCommandBuffer")),
        Command::new("CmdSetDepthBias", Some("VkCommandBuffer")),
        Command::new("CmdSetBlendConstants", Some("VkCommandBuffer")),
        Command::new("CmdSetDepthBounds", Some("VkCommandBuffer")),
        Command::new("CmdSetStencilCompareMask", Some("VkCommandBuffer")),
        Command::new("CmdSetStencilWriteMask", Some("VkCommandBuffer")),
        Command::new("CmdSetStencilReference", Some("VkCommandBuffer")),
        Command::new("CmdBindDescriptorSets", Some("VkCommandBuffer")),
        Command::new("CmdBindIndexBuffer", Some("VkCommandBuffer")),
        Command::new("CmdBindVertexBuffers", Some("VkCommandBuffer")),
        Command::new("CmdDraw", Some("VkCommandBuffer")),
        Command::new("CmdDrawIndexed", Some("VkCommandBuffer")),
        Command::new("CmdDrawIndirect", Some("VkCommandBuffer")),
        Command::new("CmdDrawIndexedIndirect", Some("VkCommandBuffer")),
        Command::new("CmdDispatch", Some("VkCommandBuffer")),
        Command::new("CmdDispatchIndirect", Some("VkCommandBuffer")),
        Command::new("CmdCopyBuffer", Some("VkCommandBuffer")),
        Command::new("CmdCopyImage", Some("VkCommandBuffer")),
        Command::new("CmdBlitImage", Some("VkCommandBuffer")),
        Command::new("CmdCopyBufferToImage", Some("VkCommandBuffer")),
        Command::new("CmdCopyImageToBuffer", Some("VkCommandBuffer")),
        Command::new("CmdUpdateBuffer", Some("VkCommandBuffer")),
        Command::new("CmdFillBuffer", Some("VkCommandBuffer")),
        Command::new("CmdClearColorImage", Some("VkCommandBuffer")),
        Command::new("CmdClearDepthStencilImage", Some("VkCommandBuffer")),
        Command::new("CmdClearAttachments", Some("VkCommandBuffer")),
        Command::new("CmdResolveImage", Some("VkCommandBuffer")),
        Command::new("CmdSetEvent", Some("VkCommandBuffer")),
        Command::new("CmdResetEvent", Some("VkCommandBuffer")),
        Command::new("CmdWaitEvents", Some("VkCommandBuffer")),
        Command::new("CmdPipelineBarrier", Some("VkCommandBuffer")),
        Command::new("CmdBeginQuery", Some("VkCommandBuffer")),
        Command::new("CmdEndQuery", Some("VkCommandBuffer")),
        Command::new("CmdResetQueryPool", Some("VkCommandBuffer")),
        Command::new("CmdWriteTimestamp", Some("VkCommandBuffer")),
        Command::new("CmdCopyQueryPoolResults", Some("VkCommandBuffer")),
        Command::new("CmdPushConstants", Some("VkCommandBuffer")),
        Command::new("CmdBeginRenderPass", Some("VkCommandBuffer")),
        Command::new("CmdNextSubpass", Some("VkCommandBuffer")),
        Command::new("CmdEndRenderPass", Some("VkCommandBuffer")),
        Command::new("CmdExecuteCommands", Some("VkCommandBuffer")),
        Command::new("EnumerateInstanceVersion", None),
        Command::new("BindBufferMemory2", Some("VkDevice")),
        Command::new("BindImageMemory2", Some("VkDevice")),
        Command::new("GetDeviceGroupPeerMemoryFeatures", Some("VkDevice")),
        Command::new("CmdSetDeviceMask", Some("VkCommandBuffer")),
        Command::new("CmdDispatchBase", Some("VkCommandBuffer")),
        Command::new("EnumeratePhysicalDeviceGroups", Some("VkInstance")),
        Command::new("GetImageMemoryRequirements2", Some("VkDevice")),
        Command::new("GetBufferMemoryRequirements2", Some("VkDevice")),
        Command::new("GetImageSparseMemoryRequirements2", Some("VkDevice")),
        Command::new("GetPhysicalDeviceFeatures2", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceProperties2", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceFormatProperties2", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceImageFormatProperties2", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceQueueFamilyProperties2", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceMemoryProperties2", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceSparseImageFormatProperties2", Some("VkPhysicalDevice")),
        Command::new("TrimCommandPool", Some("VkDevice")),
        Command::new("GetDeviceQueue2", Some("VkDevice")),
        Command::new("CreateSamplerYcbcrConversion", Some("VkDevice")),
        Command::new("DestroySamplerYcbcrConversion", Some("VkDevice")),
        Command::new("CreateDescriptorUpdateTemplate", Some("VkDevice")),
        Command::new("DestroyDescriptorUpdateTemplate", Some("VkDevice")),
        Command::new("UpdateDescriptorSetWithTemplate", Some("VkDevice")),
        Command::new("GetPhysicalDeviceExternalBufferProperties", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceExternalFenceProperties", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceExternalSemaphoreProperties", Some("VkPhysicalDevice")),
        Command::new("GetDescriptorSetLayoutSupport", Some("VkDevice")),
    ]);

    let vk_khr_external_memory_fd = Extension::new("VK_KHR_external_memory_fd", 1, None, vec![
        Command::new("GetMemoryFdKHR", Some("VkDevice")),
    ]);

    let vk_khr_external_fence_fd = Extension::new("VK_KHR_external_fence_fd", 1, None, vec![
        Command::new("GetFenceFdKHR", Some("VkDevice")),
    ]);

    let vk_khr_surface = Extension::new("VK_KHR_surface", 25, None, vec![
        Command::new("DestroySurfaceKHR", Some("VkInstance")),
        Command::new("GetPhysicalDeviceSurfaceSupportKHR", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceSurfaceCapabilitiesKHR", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceSurfaceFormatsKHR", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceSurfacePresentModesKHR", Some("VkPhysicalDevice")),
    ]);

    let vk_khr_swapchain = Extension::new("VK_KHR_swapchain", 67, None, vec![
        Command::new("CreateSwapchainKHR", Some("VkDevice")),
        Command::new("DestroySwapchainKHR", Some("VkDevice")),
        Command::new("GetSwapchainImagesKHR", Some("VkDevice")),
        Command::new("AcquireNextImageKHR", Some("VkDevice")),
        Command::new("QueuePresentKHR", Some("VkQueue")),
    ]);

    let vk_khr_display = Extension::new("VK_KHR_display", 21, None, vec![
        Command::new("GetPhysicalDeviceDisplayPropertiesKHR", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceDisplayPlanePropertiesKHR", Some("VkPhysicalDevice")),
        Command::new("GetDisplayPlaneSupportedDisplaysKHR", Some("VkPhysicalDevice")),
        Command::new("GetDisplayModePropertiesKHR", Some("VkPhysicalDevice")),
        Command::new("CreateDisplayModeKHR", Some("VkPhysicalDevice")),
        Command::new("GetDisplayPlaneCapabilitiesKHR", Some("VkPhysicalDevice")),
        Command::new("CreateDisplayPlaneSurfaceKHR", Some("VkInstance")),
        // Command::new("AcquireXlibDisplayEXT", Some("VkInstance")),
        Command::new("DisplayPowerControlEXT", Some("VkDevice")),
    ]);

    let vk_khr_display_swapchain = Extension::new("VK_KHR_display_swapchain", 9, None, vec![
        Command::new("CreateSharedSwapchainsKHR", Some("VkDevice")),
    ]);

    let vk_khr_xlib_surface = Extension::new("VK_KHR_xlib_surface", 6, Some("VK_USE_PLATFORM_XLIB_KHR"), vec![
        Command::new("CreateXlibSurfaceKHR", Some("VkInstance")),
        Command::new("GetPhysicalDeviceXlibPresentationSupportKHR", Some("VkPhysicalDevice")),
    ]);

    let vk_khr_xcb_surface = Extension::new("VK_KHR_xcb_surface", 6, Some("VK_USE_PLATFORM_XCB_KHR"), vec![
        Command::new("CreateXcbSurfaceKHR", Some("VkInstance")),
        Command::new("GetPhysicalDeviceXcbPresentationSupportKHR", Some("VkPhysicalDevice")),
    ]);

    let vk_khr_wayland_surface = Extension::new("VK_KHR_wayland_surface", 5, Some("VK_USE_PLATFORM_WAYLAND_KHR"), vec![
        Command::new("CreateWaylandSurfaceKHR", Some("VkInstance")),
        Command::new("GetPhysicalDeviceWaylandPresentationSupportKHR", Some("VkPhysicalDevice")),
    ]);

    let vk_khr_mir_surface = Extension::new("VK_KHR_mir_surface", 4, Some("VK_USE_PLATFORM_MIR_KHR"), vec![
        Command::new("CreateMirSurfaceKHR", Some("VkInstance")),
        Command::new("GetPhysicalDeviceMirPresentationSupportKHR", Some("VkPhysicalDevice")),
    ]);

    let vk_khr_android_surface = Extension::new("VK_KHR_android_surface", 6, Some("VK_USE_PLATFORM_ANDROID_KHR"), vec![
        Command::new("CreateAndroidSurfaceKHR", Some("VkInstance")),
    ]);

    let vk_khr_win32_surface = Extension::new("VK_KHR_win32_surface", 5, Some("VK_USE_PLATFORM_WIN32_KHR"), vec![
        Command::new("CreateWin32SurfaceKHR", Some("VkInstance")),
        Command::new("GetPhysicalDeviceWin32PresentationSupportKHR", Some("VkPhysicalDevice")),
    ]);

    let vk_ext_debug_report = Extension::new("VK_EXT_debug_report", 1, None, vec![
        Command::new("CreateDebugReportCallbackEXT", Some("VkInstance")),
        Command::new("DestroyDebugReportCallbackEXT", Some("VkInstance")),
        Command::new("DebugReportMessageEXT", Some("VkInstance")),
    ]);

    let vk_mvk_ios_surface = Extension::new("VK_MVK_ios_surface", 1, Some("VK_USE_PLATFORM_IOS_MVK"), vec![
        Command::new("CreateIOSSurfaceMVK", Some("VkInstance")),
    ]);

    let vk_mvk_macos_surface = Extension::new("VK_MVK_macos_surface", 1, Some("VK_USE_PLATFORM_MACOS_MVK"), vec![
        Command::new("CreateMacOSSurfaceMVK", Some("VkInstance")),
    ]);

    let vk_khr_video_queue = Extension::new("VK_KHR_video_queue", 1, Some("VK_USE_VIDEO_QUEUE"), vec![
        Command::new("GetPhysicalDeviceVideoFormatPropertiesKHR", Some("VkPhysicalDevice")),
        Command::new("GetPhysicalDeviceVideoCapabilitiesKHR", Some("VkPhysicalDevice")),
        Command::new("CreateVideoSessionKHR", Some("VkDevice")),
        Command::new("DestroyVideoSessionKHR", Some("VkDevice")),
        Command::new("GetVideoSessionMemoryRequirementsKHR", Some("VkDevice")),
        Command::new("BindVideoSessionMemoryKHR", Some("VkDevice")),
        Command::new("CmdBeginVideoCodingKHR", Some("VkCommandBuffer")),
        Command::new("CmdEndVideoCodingKHR", Some("VkCommandBuffer")),
        Command::new("CmdControlVideoCodingKHR", Some("VkCommandBuffer")),
    ]);

    let vk_nv_video_queue = Extension::new("VK_NV_video_queue", 1, Some("VK_USE_VIDEO_QUEUE"), vec![
        Command::new("GetPhysicalDeviceVideoCodecProfilesNV", Some("VkPhysicalDevice")),
    ]);

    let vk_khr_video_decode_queue = Extension::new("VK_KHR_video_decode_queue", 1, Some("VK_USE_VIDEO_DECODE_QUEUE"), vec![
        Command::new("CmdDecodeVideoKHR", Some("VkCommandBuffer")),
    ]);

    let vk_khr_synchronization2 = Extension::new("VK_KHR_synchronization2", 1, Some("VK_USE_VIDEO_DECODE_QUEUE"), vec![
        Command::new("CmdSetEvent2KHR", Some("VkCommandBuffer")),
        Command::new("CmdResetEvent2KHR", Some("VkCommandBuffer")),
        Command::new("CmdWaitEvents2KHR", Some("VkCommandBuffer")),
        Command::new("CmdPipelineBarrier2KHR", Some("VkCommandBuffer")),
        Command::new("CmdWriteTimestamp2KHR", Some("VkCommandBuffer")),
        Command::new("QueueSubmit2KHR", Some("VkQueue")),
    ]);

    vec![
        vk_core,
        vk_khr_external_memory_fd,
        vk_khr_external_fence_fd,
        vk_khr_surface,
        vk_khr_swapchain,
        vk_khr_display,
        vk_khr_display_swapchain,
        vk_khr_xlib_surface,
        vk_khr_xcb_surface,
        vk_khr_wayland_surface,
        vk_khr_mir_surface,
        vk_khr_android_surface,
        vk_khr_win32_surface,
        vk_ext_debug_report,
        vk_mvk_ios_surface,
        vk_mvk_macos_surface,
        vk_khr_video_queue,
        vk_nv_video_queue,
        vk_khr_video_decode_queue,
        vk_khr_synchronization2,
    ]
}
