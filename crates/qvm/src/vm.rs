//! Assemble a [`QemuInvocation`] from CLI flags.

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::Result;
use tracing::debug;

use qemu_cmdline::{
    debug as dbgflags, display, AccelKind, Accelerator, Arch, Boot, BootDevice, Drive,
    DriveInterface, Media, QemuInvocation, QemuOption, Vnc,
};

/// Flags describing the VM to launch.
#[derive(Debug, Parser)]
pub struct RunOpts {
    /// Guest architecture
    #[clap(long, default_value = "x86_64")]
    arch: Arch,

    /// Path to the QEMU binary, overriding the arch-based default
    #[clap(long)]
    qemu_bin: Option<Utf8PathBuf>,

    /// Memory size, e.g. 2048M or 4G
    #[clap(long, default_value = "2G")]
    memory: String,

    /// Number of virtual CPUs
    #[clap(long, default_value_t = 2)]
    vcpus: u32,

    /// Accelerator backend
    #[clap(long, default_value = "kvm")]
    accel: AccelKind,

    /// Disk image attached as a virtio drive (repeatable)
    #[clap(long = "disk")]
    disks: Vec<Utf8PathBuf>,

    /// ISO attached as a CD-ROM
    #[clap(long)]
    cdrom: Option<Utf8PathBuf>,

    /// Boot from the CD-ROM first
    #[clap(long)]
    boot_cdrom: bool,

    /// Disable graphics and use the serial console
    #[clap(long)]
    nographic: bool,

    /// VNC display number to listen on
    #[clap(long)]
    vnc: Option<u16>,

    /// Exit instead of rebooting
    #[clap(long)]
    no_reboot: bool,

    /// Freeze at startup and wait for gdb on tcp::1234
    #[clap(long)]
    gdb: bool,
}

/// Turn the flags into an ordered QEMU invocation.
pub fn build_invocation(opts: &RunOpts) -> Result<QemuInvocation> {
    let mut inv = match &opts.qemu_bin {
        Some(path) => QemuInvocation::new(path.clone()),
        None => QemuInvocation::system(opts.arch),
    };

    inv = inv
        .option(QemuOption::new("m").with_name(opts.memory.as_str()))
        .option(QemuOption::new("smp").with_name(opts.vcpus.to_string()))
        .option(Accelerator::new(opts.accel));

    for disk in &opts.disks {
        inv = inv.option(Drive::file(disk).interface(DriveInterface::Virtio));
    }

    if let Some(cdrom) = &opts.cdrom {
        inv = inv.option(Drive::file(cdrom).media(Media::Cdrom).readonly(true));
    }

    if opts.boot_cdrom {
        inv = inv.option(Boot::order(&[BootDevice::Cdrom, BootDevice::Disk])?);
    }

    if opts.nographic {
        inv = inv
            .option(display::nographic())
            .option(dbgflags::serial("mon:stdio"));
    }

    if let Some(n) = opts.vnc {
        inv = inv.option(Vnc::display(n));
    }

    if opts.no_reboot {
        inv = inv.option(dbgflags::no_reboot());
    }

    if opts.gdb {
        inv = inv
            .option(dbgflags::gdb("tcp::1234"))
            .option(dbgflags::freeze_at_startup());
    }

    Ok(inv)
}

/// Build and launch the VM, blocking until QEMU exits.
pub fn run(opts: &RunOpts) -> Result<()> {
    let inv = build_invocation(opts)?;
    debug!("launching {}", inv.binary());
    inv.run()
}
