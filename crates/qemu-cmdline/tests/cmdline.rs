//! End-to-end argument assembly for a representative VM.

use qemu_cmdline::{
    display, AccelKind, Accelerator, Arch, Boot, BootDevice, CacheMode, Chardev, DiskFormat,
    Display, DisplayKind, Drive, DriveInterface, QemuInvocation, QemuOption, ThrottleOp, Vnc,
};
use similar_asserts::assert_eq;

#[test]
fn test_install_vm_cmdline() {
    let vm = QemuInvocation::system(Arch::X86_64)
        .option(qemu_cmdline::debug::nodefaults())
        .option(QemuOption::new("m").with_name("2G"))
        .option(QemuOption::new("smp").with_name("2"))
        .option(Accelerator::new(AccelKind::Kvm))
        .option(
            Drive::file("disk.img")
                .format(DiskFormat::Qcow2)
                .interface(DriveInterface::Virtio),
        )
        .option(
            Drive::file("install.iso")
                .media(qemu_cmdline::Media::Cdrom)
                .readonly(true),
        )
        .option(Boot::order(&[BootDevice::Cdrom, BootDevice::Disk]).unwrap())
        .option(display::nographic())
        .option(qemu_cmdline::debug::serial("mon:stdio"))
        .option(qemu_cmdline::debug::no_reboot());

    assert_eq!(
        vm.cmdline(),
        "qemu-system-x86_64 -nodefaults -m 2G -smp 2 -accel kvm \
         -drive file=disk.img,format=qcow2,if=virtio \
         -drive file=install.iso,media=cdrom,readonly=on \
         -boot order=dc -nographic -serial mon:stdio -no-reboot"
    );
}

#[test]
fn test_spice_usb_redirection_args() {
    let vm = QemuInvocation::system(Arch::X86_64)
        .option(Chardev::spicevmc("usbredirchardev1", "usbredir"))
        .option(Chardev::spicevmc("usbredirchardev2", "usbredir"));

    assert_eq!(
        vm.to_args(),
        vec![
            "-chardev".to_owned(),
            "spicevmc,id=usbredirchardev1,name=usbredir".to_owned(),
            "-chardev".to_owned(),
            "spicevmc,id=usbredirchardev2,name=usbredir".to_owned(),
        ]
    );
}

#[test]
fn test_throttled_drive_with_vnc() {
    let vm = QemuInvocation::system(Arch::X86_64)
        .option(
            Drive::file("slow.img")
                .cache(CacheMode::None)
                .bps(ThrottleOp::Read, 50)
                .iops(ThrottleOp::All, 200),
        )
        .option(Vnc::display(1).password(true));

    assert_eq!(
        vm.cmdline(),
        "qemu-system-x86_64 -drive file=slow.img,cache=none,bps_rd=50,iops=200 -vnc :1,password=on"
    );
}

#[test]
fn test_headless_vm_with_display_none() {
    let vm = QemuInvocation::system(Arch::X86_64)
        .option(Display::new(DisplayKind::None))
        .option(Vnc::display(2));

    assert_eq!(vm.cmdline(), "qemu-system-x86_64 -display none -vnc :2");
}

#[test]
fn test_rendering_twice_is_identical() {
    let vm = QemuInvocation::system(Arch::Aarch64)
        .option(Accelerator::new(AccelKind::Tcg))
        .option(Drive::file("root.img").interface(DriveInterface::Virtio));

    assert_eq!(vm.to_args(), vm.to_args());
    assert_eq!(vm.cmdline(), vm.cmdline());
}
