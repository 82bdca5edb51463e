// Wed Jan 14 2026 - Alex

use crate::ctypes::os::OsTable;

pub const MACOS: OsTable = OsTable {
    name: "macos",
    common: &[
        ("__darwin_intptr_t", "long"),
        ("__darwin_natural_t", "uint32"),
        ("__darwin_ct_rune_t", "int32"),
        ("__darwin_size_t", "ulong"),
        ("__darwin_ssize_t", "long"),
        ("__darwin_ptrdiff_t", "long"),
        ("__darwin_wchar_t", "int32"),
        ("__darwin_blkcnt_t", "int64"),
        ("__darwin_blksize_t", "int32"),
        ("__darwin_dev_t", "int32"),
        ("__darwin_fsblkcnt_t", "uint32"),
        ("__darwin_fsfilcnt_t", "uint32"),
        ("__darwin_gid_t", "uint32"),
        ("__darwin_id_t", "uint32"),
        ("__darwin_ino64_t", "uint64"),
        ("__darwin_ino_t", "__darwin_ino64_t"),
        ("__darwin_mach_port_name_t", "__darwin_natural_t"),
        ("__darwin_mach_port_t", "__darwin_mach_port_name_t"),
        ("__darwin_mode_t", "uint16"),
        ("__darwin_off_t", "int64"),
        ("__darwin_pid_t", "int32"),
        ("__darwin_sigset_t", "uint32"),
        ("__darwin_suseconds_t", "int32"),
        ("__darwin_uid_t", "uint32"),
        ("__darwin_useconds_t", "uint32"),
        ("__darwin_clock_t", "ulong"),
        ("__darwin_socklen_t", "uint32"),
        ("__darwin_time_t", "long"),
        ("blkcnt_t", "__darwin_blkcnt_t"),
        ("blksize_t", "__darwin_blksize_t"),
        ("dev_t", "__darwin_dev_t"),
        ("fsblkcnt_t", "__darwin_fsblkcnt_t"),
        ("fsfilcnt_t", "__darwin_fsfilcnt_t"),
        ("gid_t", "__darwin_gid_t"),
        ("id_t", "__darwin_id_t"),
        ("ino_t", "__darwin_ino_t"),
        ("ino64_t", "__darwin_ino64_t"),
        ("mode_t", "__darwin_mode_t"),
        ("nlink_t", "uint16"),
        ("off_t", "__darwin_off_t"),
        ("pid_t", "__darwin_pid_t"),
        ("sigset_t", "__darwin_sigset_t"),
        ("suseconds_t", "__darwin_suseconds_t"),
        ("uid_t", "__darwin_uid_t"),
        ("useconds_t", "__darwin_useconds_t"),
        ("clock_t", "__darwin_clock_t"),
        ("socklen_t", "__darwin_socklen_t"),
        ("time_t", "__darwin_time_t"),
        ("key_t", "int32"),
        ("natural_t", "__darwin_natural_t"),
        ("integer_t", "int32"),
        ("mach_port_t", "__darwin_mach_port_t"),
        ("kern_return_t", "int"),
        ("vm_offset_t", "uintptr_t"),
        ("vm_size_t", "uintptr_t"),
        ("vm_address_t", "vm_offset_t"),
    ],
    ilp32: &[],
    lp64: &[],
};
