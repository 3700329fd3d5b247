//! Block device configuration (`-drive`).
//!
//! Covers the legacy-but-ubiquitous `-drive` syntax: backing file, guest
//! interface, host cache mode, and I/O throttling.

use camino::Utf8Path;

use crate::cmdline::QemuOption;

/// Guest bus the drive is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DriveInterface {
    /// IDE bus.
    Ide,
    /// SCSI bus.
    Scsi,
    /// SD card slot.
    Sd,
    /// MTD flash.
    Mtd,
    /// Floppy controller.
    Floppy,
    /// Parallel flash (firmware images).
    Pflash,
    /// VirtIO block device.
    Virtio,
    /// No automatic attachment; pair with an explicit `-device`.
    None,
}

/// On-disk image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DiskFormat {
    /// Raw image.
    Raw,
    /// QEMU copy-on-write v2.
    Qcow2,
    /// QEMU enhanced disk.
    Qed,
    /// VirtualBox disk image.
    Vdi,
    /// VMware disk image.
    Vmdk,
    /// VirtualPC disk image.
    Vpc,
}

/// Host page-cache access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CacheMode {
    /// Report completion once data reaches the host cache.
    Writeback,
    /// Report completion only after host flush.
    Writethrough,
    /// Bypass the host cache (O_DIRECT).
    None,
    /// O_DIRECT plus flush on every write.
    Directsync,
    /// Ignore guest flush requests.
    Unsafe,
}

/// Media type of the drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Media {
    /// Hard disk.
    Disk,
    /// CD-ROM.
    Cdrom,
}

/// Which I/O direction a throttle limit applies to.
///
/// QEMU encodes the direction in the property key: `bps` limits all
/// operations, `bps_rd` reads only, `bps_wr` writes only (likewise `iops*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleOp {
    /// All operations.
    All,
    /// Reads only.
    Read,
    /// Writes only.
    Write,
}

impl ThrottleOp {
    fn suffix(&self) -> &'static str {
        match self {
            ThrottleOp::All => "",
            ThrottleOp::Read => "_rd",
            ThrottleOp::Write => "_wr",
        }
    }
}

/// Builder for one `-drive` option.
#[derive(Debug, Clone)]
pub struct Drive {
    opt: QemuOption,
}

impl Drive {
    /// A drive backed by a host file.
    pub fn file(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            opt: QemuOption::new("drive").property("file", path.as_ref()),
        }
    }

    /// A drive with no backing file (e.g. an empty CD-ROM tray).
    pub fn empty() -> Self {
        Self {
            opt: QemuOption::new("drive"),
        }
    }

    /// Block-device id referenced by an explicit `-device`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.opt = self.opt.property("id", id.into());
        self
    }

    /// Guest bus to attach to.
    pub fn interface(mut self, interface: DriveInterface) -> Self {
        self.opt = self.opt.property("if", interface.to_string());
        self
    }

    /// Image format; QEMU probes when unset.
    pub fn format(mut self, format: DiskFormat) -> Self {
        self.opt = self.opt.property("format", format.to_string());
        self
    }

    /// Host cache mode.
    pub fn cache(mut self, mode: CacheMode) -> Self {
        self.opt = self.opt.property("cache", mode.to_string());
        self
    }

    /// Media type.
    pub fn media(mut self, media: Media) -> Self {
        self.opt = self.opt.property("media", media.to_string());
        self
    }

    /// Guest-visible serial number.
    pub fn serial(mut self, serial: impl Into<String>) -> Self {
        self.opt = self.opt.property("serial", serial.into());
        self
    }

    /// Expose the drive read-only to the guest.
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.opt = self.opt.property("readonly", readonly);
        self
    }

    /// Write guest changes to temporary files instead of the image.
    pub fn snapshot(mut self, snapshot: bool) -> Self {
        self.opt = self.opt.property("snapshot", snapshot);
        self
    }

    /// Throttle bandwidth to `bytes` per second for the given direction.
    pub fn bps(mut self, op: ThrottleOp, bytes: u64) -> Self {
        self.opt = self.opt.property(format!("bps{}", op.suffix()), bytes);
        self
    }

    /// Throttle to `count` I/O operations per second for the given direction.
    pub fn iops(mut self, op: ThrottleOp, count: u64) -> Self {
        self.opt = self.opt.property(format!("iops{}", op.suffix()), count);
        self
    }

    /// Share throttle limits with other drives in the named group.
    ///
    /// QEMU applies this property relative to the limits preceding it, so
    /// call it after the `bps`/`iops` setters it should group.
    pub fn throttling_group(mut self, group: impl Into<String>) -> Self {
        self.opt = self.opt.property("throttling.group", group.into());
        self
    }
}

impl From<Drive> for QemuOption {
    fn from(d: Drive) -> Self {
        d.opt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtio_disk() {
        let opt = QemuOption::from(
            Drive::file("disk.img")
                .interface(DriveInterface::Virtio)
                .cache(CacheMode::Writeback),
        );
        assert_eq!(opt.line(), "-drive file=disk.img,if=virtio,cache=writeback");
    }

    #[test]
    fn test_cdrom_for_scsi_device() {
        let opt = QemuOption::from(
            Drive::file("install.iso")
                .id("cdrom0")
                .interface(DriveInterface::None)
                .format(DiskFormat::Raw)
                .readonly(true),
        );
        assert_eq!(
            opt.line(),
            "-drive file=install.iso,id=cdrom0,if=none,format=raw,readonly=on"
        );
    }

    #[test]
    fn test_throttle_selector_chooses_key() {
        let all = QemuOption::from(Drive::empty().bps(ThrottleOp::All, 50));
        assert_eq!(all.line(), "-drive bps=50");

        let rd = QemuOption::from(Drive::empty().bps(ThrottleOp::Read, 50));
        assert_eq!(rd.line(), "-drive bps_rd=50");

        let wr = QemuOption::from(Drive::empty().iops(ThrottleOp::Write, 100));
        assert_eq!(wr.line(), "-drive iops_wr=100");
    }

    #[test]
    fn test_throttling_group_follows_limits() {
        let opt = QemuOption::from(
            Drive::file("a.img")
                .bps(ThrottleOp::All, 1000)
                .throttling_group("shared"),
        );
        assert_eq!(
            opt.line(),
            "-drive file=a.img,bps=1000,throttling.group=shared"
        );
    }
}
