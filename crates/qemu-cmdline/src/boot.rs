//! Boot configuration (`-boot`).

use camino::Utf8Path;
use color_eyre::eyre::bail;
use color_eyre::Result;

use crate::cmdline::QemuOption;

/// A bootable device, identified by its BIOS boot-order letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootDevice {
    /// First floppy drive (`a`).
    FloppyA,
    /// Second floppy drive (`b`).
    FloppyB,
    /// First hard disk (`c`).
    Disk,
    /// First CD-ROM drive (`d`).
    Cdrom,
    /// First network adapter (`n`).
    Network1,
    /// Second network adapter (`o`).
    Network2,
    /// Third network adapter (`p`).
    Network3,
}

impl BootDevice {
    fn letter(&self) -> char {
        match self {
            BootDevice::FloppyA => 'a',
            BootDevice::FloppyB => 'b',
            BootDevice::Disk => 'c',
            BootDevice::Cdrom => 'd',
            BootDevice::Network1 => 'n',
            BootDevice::Network2 => 'o',
            BootDevice::Network3 => 'p',
        }
    }
}

/// Device letters concatenated without separator, per QEMU's boot syntax
/// (`cd` means disk then CD-ROM).
fn letters(devices: &[BootDevice]) -> Result<String> {
    if devices.is_empty() {
        bail!("a boot order needs at least one device");
    }
    Ok(devices.iter().map(BootDevice::letter).collect())
}

/// Builder for one `-boot` option.
#[derive(Debug, Clone)]
pub struct Boot {
    opt: QemuOption,
}

impl Boot {
    /// Start an empty `-boot` option.
    pub fn new() -> Self {
        Self {
            opt: QemuOption::new("boot"),
        }
    }

    /// Boot from the given devices in order.
    pub fn order(devices: &[BootDevice]) -> Result<Self> {
        Ok(Self::new().with_property("order", letters(devices)?))
    }

    /// Use this order for the next boot only.
    pub fn once(mut self, devices: &[BootDevice]) -> Result<Self> {
        self.opt = self.opt.property("once", letters(devices)?);
        Ok(self)
    }

    /// Show the interactive boot menu.
    pub fn menu(self, menu: bool) -> Self {
        self.with_property("menu", menu)
    }

    /// Firmware splash picture shown during boot.
    pub fn splash(self, path: impl AsRef<Utf8Path>) -> Self {
        self.with_property("splash", path.as_ref())
    }

    /// How long the splash picture stays up, in milliseconds.
    pub fn splash_time(self, ms: u64) -> Self {
        self.with_property("splash-time", ms)
    }

    /// Delay before rebooting when no boot device is found, in milliseconds;
    /// `-1` disables the reboot.
    pub fn reboot_timeout(self, ms: i64) -> Self {
        self.with_property("reboot-timeout", ms)
    }

    /// Only attempt devices listed in the boot order.
    pub fn strict(self, strict: bool) -> Self {
        self.with_property("strict", strict)
    }

    fn with_property(
        mut self,
        key: &str,
        value: impl Into<crate::cmdline::PropertyValue>,
    ) -> Self {
        self.opt = self.opt.property(key, value);
        self
    }
}

impl Default for Boot {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Boot> for QemuOption {
    fn from(b: Boot) -> Self {
        b.opt
    }
}
