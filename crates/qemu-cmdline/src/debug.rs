//! Debug and expert flags (`-S`, `-gdb`, `-monitor`, logging, reboot
//! behavior).

use camino::Utf8Path;
use color_eyre::eyre::bail;
use color_eyre::Result;

use crate::cmdline::QemuOption;

/// Freeze the CPU at startup until `cont` is issued over the monitor (`-S`).
pub fn freeze_at_startup() -> QemuOption {
    QemuOption::new("S")
}

/// Accept a gdb connection on the given device, e.g. `tcp::1234`.
pub fn gdb(dev: impl Into<String>) -> QemuOption {
    QemuOption::new("gdb").with_name(dev)
}

/// Redirect the monitor to the given device, e.g. `stdio` or a chardev id.
pub fn monitor(dev: impl Into<String>) -> QemuOption {
    QemuOption::new("monitor").with_name(dev)
}

/// Redirect the guest serial port to the given device, e.g. `mon:stdio`.
pub fn serial(dev: impl Into<String>) -> QemuOption {
    QemuOption::new("serial").with_name(dev)
}

/// Exit instead of rebooting (`-no-reboot`).
pub fn no_reboot() -> QemuOption {
    QemuOption::new("no-reboot")
}

/// Don't exit on guest shutdown, just stop emulation (`-no-shutdown`).
pub fn no_shutdown() -> QemuOption {
    QemuOption::new("no-shutdown")
}

/// Don't create default devices (`-nodefaults`).
pub fn nodefaults() -> QemuOption {
    QemuOption::new("nodefaults")
}

/// Write to temporary files instead of the configured disk images
/// (`-snapshot`).
pub fn snapshot() -> QemuOption {
    QemuOption::new("snapshot")
}

/// Store the QEMU process id in a file (`-pidfile`).
pub fn pidfile(path: impl AsRef<Utf8Path>) -> QemuOption {
    QemuOption::new("pidfile").with_name(path.as_ref().as_str())
}

/// Enable logging of the given items (`-d in_asm,cpu,...`).
///
/// At least one item is required; the item names are passed through to QEMU
/// unvalidated (see `qemu -d help` for the list).
pub fn log_items(items: &[&str]) -> Result<QemuOption> {
    if items.is_empty() {
        bail!("-d needs at least one log item");
    }
    Ok(QemuOption::new("d").with_name(items.join(",")))
}

/// Send `-d` output to a file instead of stderr (`-D`).
pub fn log_file(path: impl AsRef<Utf8Path>) -> QemuOption {
    QemuOption::new("D").with_name(path.as_ref().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gdb_stub() {
        assert_eq!(gdb("tcp::1234").line(), "-gdb tcp::1234");
        assert_eq!(freeze_at_startup().line(), "-S");
    }

    #[test]
    fn test_serial_and_monitor() {
        assert_eq!(serial("mon:stdio").line(), "-serial mon:stdio");
        assert_eq!(monitor("stdio").line(), "-monitor stdio");
    }

    #[test]
    fn test_log_items() {
        let opt = log_items(&["in_asm", "cpu"]).unwrap();
        assert_eq!(opt.line(), "-d in_asm,cpu");
        assert!(log_items(&[]).is_err());
    }

    #[test]
    fn test_flag_only_helpers() {
        assert_eq!(no_reboot().line(), "-no-reboot");
        assert_eq!(no_shutdown().line(), "-no-shutdown");
        assert_eq!(nodefaults().line(), "-nodefaults");
        assert_eq!(snapshot().line(), "-snapshot");
    }
}
