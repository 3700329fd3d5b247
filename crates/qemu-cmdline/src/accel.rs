//! Accelerator selection (`-accel`).

use crate::cmdline::QemuOption;

/// QEMU's selectable virtualization/emulation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AccelKind {
    /// Linux KVM.
    Kvm,
    /// Pure-software tiny code generator.
    Tcg,
    /// Xen hypervisor.
    Xen,
    /// macOS Hypervisor.framework.
    Hvf,
    /// Windows Hypervisor Platform.
    Whpx,
    /// NetBSD native virtualization.
    Nvmm,
}

/// In-kernel irqchip handling for KVM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum KernelIrqchip {
    /// Fully in-kernel irqchip.
    On,
    /// Userspace irqchip.
    Off,
    /// Split irqchip (ioapic in userspace, lapic in kernel).
    Split,
}

/// TCG threading model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ThreadMode {
    /// One host thread for all vCPUs.
    Single,
    /// One host thread per vCPU.
    Multi,
}

/// Builder for one `-accel` option.
#[derive(Debug, Clone)]
pub struct Accelerator {
    opt: QemuOption,
}

impl Accelerator {
    /// Select an accelerator backend.
    pub fn new(kind: AccelKind) -> Self {
        Self {
            opt: QemuOption::new("accel").with_name(kind.to_string()),
        }
    }

    /// Control the in-kernel irqchip (KVM only).
    pub fn kernel_irqchip(mut self, mode: KernelIrqchip) -> Self {
        self.opt = self.opt.property("kernel-irqchip", mode.to_string());
        self
    }

    /// Translation-block cache size in MiB (TCG only).
    pub fn tb_size(mut self, mib: u64) -> Self {
        self.opt = self.opt.property("tb-size", mib);
        self
    }

    /// Threading model (TCG only).
    pub fn thread(mut self, mode: ThreadMode) -> Self {
        self.opt = self.opt.property("thread", mode.to_string());
        self
    }
}

impl From<Accelerator> for QemuOption {
    fn from(a: Accelerator) -> Self {
        a.opt
    }
}
