//! Typed builders for QEMU command-line arguments.
//!
//! This crate turns structured descriptions of QEMU options into the exact
//! token sequence the emulator expects: a dashed flag, an optional bare name,
//! and comma-joined `key=value` properties, with booleans spelled `on`/`off`.
//!
//! # Features
//!
//! - **Core model**: the generic [`QemuOption`]/[`Property`] pair every
//!   catalog builds on, preserving property insertion order
//! - **Domain catalogs**: typed constructors for accelerators, block devices,
//!   character devices, displays, VNC, NUMA topology, audio backends, boot
//!   configuration, and debug flags
//! - **Invocation**: [`QemuInvocation`] flattens options into argv and runs
//!   the external `qemu-system-*` binary with a single blocking call
//!
//! # Example
//!
//! ```no_run
//! use qemu_cmdline::{
//!     AccelKind, Accelerator, CacheMode, Drive, DriveInterface, QemuInvocation,
//! };
//!
//! # fn main() -> color_eyre::Result<()> {
//! let vm = QemuInvocation::system(qemu_cmdline::Arch::X86_64)
//!     .option(Accelerator::new(AccelKind::Kvm))
//!     .option(
//!         Drive::file("disk.img")
//!             .interface(DriveInterface::Virtio)
//!             .cache(CacheMode::Writeback),
//!     );
//!
//! vm.run()?;
//! # Ok(())
//! # }
//! ```

pub mod accel;
pub mod audio;
pub mod blockdev;
pub mod boot;
pub mod chardev;
mod cmdline;
pub mod debug;
pub mod display;
pub mod launch;
pub mod numa;

pub use accel::{AccelKind, Accelerator, KernelIrqchip, ThreadMode};
pub use audio::{AudioDriver, Audiodev};
pub use blockdev::{CacheMode, DiskFormat, Drive, DriveInterface, Media, ThrottleOp};
pub use boot::{Boot, BootDevice};
pub use chardev::Chardev;
pub use cmdline::{Property, PropertyValue, QemuOption};
pub use display::{Display, DisplayKind, SharePolicy, Vnc};
pub use launch::{Arch, QemuInvocation};
pub use numa::{Hierarchy, HmatLb, NumaNode};
