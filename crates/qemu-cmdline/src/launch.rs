//! Assembling and running a full QEMU invocation.

use camino::Utf8PathBuf;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use tracing::debug;

use crate::cmdline::QemuOption;

/// Guest architectures with a `qemu-system` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Arch {
    /// 64-bit x86.
    X86_64,
    /// 64-bit Arm.
    Aarch64,
    /// 64-bit RISC-V.
    Riscv64,
}

impl Arch {
    /// Name of the system-emulator binary for this architecture.
    pub fn binary(&self) -> String {
        format!("qemu-system-{}", self)
    }
}

/// A fully assembled QEMU invocation: the binary plus an ordered list of
/// options.
///
/// Arguments appear in exactly the order the options were added; beyond that
/// no ordering or validation is applied, and QEMU itself rejects anything it
/// doesn't accept at launch time.
#[derive(Debug, Clone)]
pub struct QemuInvocation {
    binary: Utf8PathBuf,
    options: Vec<QemuOption>,
}

impl QemuInvocation {
    /// Invoke the binary at the given path.
    pub fn new(binary: impl Into<Utf8PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            options: Vec::new(),
        }
    }

    /// Invoke the standard `qemu-system-{arch}` binary from `PATH`.
    pub fn system(arch: Arch) -> Self {
        Self::new(arch.binary())
    }

    /// Append an option; anything convertible into a [`QemuOption`] works,
    /// including the catalog builders.
    pub fn option(mut self, option: impl Into<QemuOption>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Append an option in place.
    pub fn push_option(&mut self, option: impl Into<QemuOption>) -> &mut Self {
        self.options.push(option.into());
        self
    }

    /// The binary that will be invoked.
    pub fn binary(&self) -> &Utf8PathBuf {
        &self.binary
    }

    /// Flatten all options into argv tokens, in insertion order.
    pub fn to_args(&self) -> Vec<String> {
        self.options.iter().flat_map(QemuOption::args).collect()
    }

    /// The full command line, shell-quoted for display.
    pub fn cmdline(&self) -> String {
        let mut tokens = vec![self.binary.to_string()];
        tokens.extend(self.to_args());
        shlex::try_join(tokens.iter().map(String::as_str))
            .unwrap_or_else(|_| tokens.join(" "))
    }

    /// Build a [`std::process::Command`] with stdio inherited from the
    /// parent.
    pub fn to_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(self.binary.as_str());
        cmd.args(self.to_args());
        cmd
    }

    /// Spawn QEMU and block until it exits.
    ///
    /// Stdout/stderr pass through unmodified and no interpretation of QEMU's
    /// own error output is attempted; a missing binary or non-zero exit
    /// status is surfaced as a plain error.
    pub fn run(&self) -> Result<()> {
        debug!("running {}", self.cmdline());
        let status = self
            .to_command()
            .status()
            .with_context(|| format!("Failed to spawn {}", self.binary))?;
        if !status.success() {
            return Err(eyre!("{} exited with {}", self.binary, status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_binaries() {
        assert_eq!(Arch::X86_64.binary(), "qemu-system-x86_64");
        assert_eq!(Arch::Aarch64.binary(), "qemu-system-aarch64");
        assert_eq!(Arch::Riscv64.binary(), "qemu-system-riscv64");
    }

    #[test]
    fn test_args_keep_option_order() {
        let inv = QemuInvocation::system(Arch::X86_64)
            .option(QemuOption::new("m").with_name("2G"))
            .option(QemuOption::new("accel").with_name("kvm"));
        assert_eq!(
            inv.to_args(),
            vec![
                "-m".to_owned(),
                "2G".to_owned(),
                "-accel".to_owned(),
                "kvm".to_owned()
            ]
        );
    }

    #[test]
    fn test_cmdline_quoting_round_trips() {
        let inv = QemuInvocation::new("qemu-system-x86_64")
            .option(QemuOption::new("append").with_name("console=ttyS0 rw"));
        let mut expected = vec!["qemu-system-x86_64".to_owned()];
        expected.extend(inv.to_args());
        assert_eq!(shlex::split(&inv.cmdline()), Some(expected));
    }

    #[test]
    fn test_cmdline_of_simple_args_is_unquoted() {
        let inv = QemuInvocation::system(Arch::X86_64)
            .option(QemuOption::new("drive").property("file", "disk.img").property("if", "virtio"));
        assert_eq!(
            inv.cmdline(),
            "qemu-system-x86_64 -drive file=disk.img,if=virtio"
        );
    }
}
