// Wed Jan 14 2026 - Alex

use crate::ctypes::os::OsTable;

pub const BSD: OsTable = OsTable {
    name: "bsd",
    common: &[
        ("u_char", "uchar"),
        ("u_short", "ushort"),
        ("u_int", "uint"),
        ("u_long", "ulong"),
        ("ushort_t", "ushort"),
        ("uint_t", "uint"),
        ("ulong_t", "ulong"),
        ("quad_t", "int64"),
        ("u_quad_t", "uint64"),
        ("qaddr_t", "pointer"),
        ("register_t", "long"),
        ("u_register_t", "ulong"),
        ("segsz_t", "long"),
        ("fixpt_t", "uint32"),
        ("sa_family_t", "uint8"),
    ],
    ilp32: &[],
    lp64: &[],
};

pub const FREEBSD: OsTable = OsTable {
    name: "freebsd",
    common: &[
        ("__int8_t", "int8"),
        ("__uint8_t", "uint8"),
        ("__int16_t", "int16"),
        ("__uint16_t", "uint16"),
        ("__int32_t", "int32"),
        ("__uint32_t", "uint32"),
        ("__int64_t", "int64"),
        ("__uint64_t", "uint64"),
        ("__dev_t", "uint64"),
        ("__ino_t", "uint64"),
        ("__nlink_t", "uint64"),
        ("__off_t", "int64"),
        ("__mode_t", "uint16"),
        ("__pid_t", "int32"),
        ("__uid_t", "uint32"),
        ("__gid_t", "uint32"),
        ("__id_t", "int64"),
        ("__lwpid_t", "int32"),
        ("__blksize_t", "int32"),
        ("__blkcnt_t", "int64"),
        ("__fsblkcnt_t", "uint64"),
        ("__fsfilcnt_t", "uint64"),
        ("__rlim_t", "int64"),
        ("__socklen_t", "uint32"),
        ("__useconds_t", "uint32"),
        ("__suseconds_t", "long"),
        ("__clockid_t", "int32"),
        ("__key_t", "long"),
        ("__time_t", "long"),
        ("__vm_offset_t", "ulong"),
        ("__vm_size_t", "ulong"),
        ("__vm_paddr_t", "ulong"),
        ("dev_t", "__dev_t"),
        ("ino_t", "__ino_t"),
        ("nlink_t", "__nlink_t"),
        ("off_t", "__off_t"),
        ("mode_t", "__mode_t"),
        ("pid_t", "__pid_t"),
        ("uid_t", "__uid_t"),
        ("gid_t", "__gid_t"),
        ("id_t", "__id_t"),
        ("lwpid_t", "__lwpid_t"),
        ("blksize_t", "__blksize_t"),
        ("blkcnt_t", "__blkcnt_t"),
        ("fsblkcnt_t", "__fsblkcnt_t"),
        ("fsfilcnt_t", "__fsfilcnt_t"),
        ("rlim_t", "__rlim_t"),
        ("socklen_t", "__socklen_t"),
        ("useconds_t", "__useconds_t"),
        ("suseconds_t", "__suseconds_t"),
        ("clockid_t", "__clockid_t"),
        ("key_t", "__key_t"),
        ("time_t", "__time_t"),
        ("vm_offset_t", "__vm_offset_t"),
        ("vm_size_t", "__vm_size_t"),
        ("vm_paddr_t", "__vm_paddr_t"),
    ],
    ilp32: &[
        ("__clock_t", "ulong"),
        ("__critical_t", "int32"),
        ("clock_t", "__clock_t"),
        ("critical_t", "__critical_t"),
    ],
    lp64: &[
        ("__clock_t", "int32"),
        ("__critical_t", "int64"),
        ("clock_t", "__clock_t"),
        ("critical_t", "__critical_t"),
    ],
};

pub const NETBSD: OsTable = OsTable {
    name: "netbsd",
    common: &[
        ("__int8_t", "int8"),
        ("__uint8_t", "uint8"),
        ("__int16_t", "int16"),
        ("__uint16_t", "uint16"),
        ("__int32_t", "int32"),
        ("__uint32_t", "uint32"),
        ("__int64_t", "int64"),
        ("__uint64_t", "uint64"),
        ("__off_t", "int64"),
        ("__mode_t", "uint32"),
        ("__pid_t", "int32"),
        ("__uid_t", "uint32"),
        ("__gid_t", "uint32"),
        ("__socklen_t", "uint32"),
        ("__blksize_t", "int32"),
        ("__blkcnt_t", "int64"),
        ("__fsblkcnt_t", "uint64"),
        ("__fsfilcnt_t", "uint64"),
        ("__ino_t", "uint64"),
        ("__nlink_t", "uint32"),
        ("__dev_t", "uint64"),
        ("__time_t", "int64"),
        ("__lwpid_t", "int32"),
        ("__suseconds_t", "int"),
        ("__useconds_t", "uint"),
        ("__id_t", "uint32"),
        ("__clockid_t", "int"),
        ("__key_t", "long"),
        ("__rlim_t", "uint64"),
        ("off_t", "__off_t"),
        ("mode_t", "__mode_t"),
        ("pid_t", "__pid_t"),
        ("uid_t", "__uid_t"),
        ("gid_t", "__gid_t"),
        ("socklen_t", "__socklen_t"),
        ("blksize_t", "__blksize_t"),
        ("blkcnt_t", "__blkcnt_t"),
        ("fsblkcnt_t", "__fsblkcnt_t"),
        ("fsfilcnt_t", "__fsfilcnt_t"),
        ("ino_t", "__ino_t"),
        ("nlink_t", "__nlink_t"),
        ("dev_t", "__dev_t"),
        ("time_t", "__time_t"),
        ("lwpid_t", "__lwpid_t"),
        ("suseconds_t", "__suseconds_t"),
        ("useconds_t", "__useconds_t"),
        ("id_t", "__id_t"),
        ("clockid_t", "__clockid_t"),
        ("key_t", "__key_t"),
        ("rlim_t", "__rlim_t"),
    ],
    ilp32: &[
        ("__clock_t", "ulong"),
        ("__vaddr_t", "uint32"),
        ("__paddr_t", "uint32"),
        ("__vsize_t", "uint32"),
        ("clock_t", "__clock_t"),
        ("vaddr_t", "__vaddr_t"),
        ("paddr_t", "__paddr_t"),
        ("vsize_t", "__vsize_t"),
    ],
    lp64: &[
        ("__clock_t", "uint"),
        ("__vaddr_t", "uint64"),
        ("__paddr_t", "uint64"),
        ("__vsize_t", "uint64"),
        ("clock_t", "__clock_t"),
        ("vaddr_t", "__vaddr_t"),
        ("paddr_t", "__paddr_t"),
        ("vsize_t", "__vsize_t"),
    ],
};

pub const OPENBSD: OsTable = OsTable {
    name: "openbsd",
    common: &[
        ("__int8_t", "int8"),
        ("__uint8_t", "uint8"),
        ("__int16_t", "int16"),
        ("__uint16_t", "uint16"),
        ("__int32_t", "int32"),
        ("__uint32_t", "uint32"),
        ("__int64_t", "int64"),
        ("__uint64_t", "uint64"),
        ("__dev_t", "int32"),
        ("__ino_t", "uint64"),
        ("__mode_t", "uint32"),
        ("__nlink_t", "uint32"),
        ("__off_t", "int64"),
        ("__pid_t", "int32"),
        ("__uid_t", "uint32"),
        ("__gid_t", "uint32"),
        ("__id_t", "uint32"),
        ("__time_t", "int64"),
        ("__clock_t", "int64"),
        ("__clockid_t", "int32"),
        ("__blksize_t", "int32"),
        ("__blkcnt_t", "int64"),
        ("__fsblkcnt_t", "uint64"),
        ("__fsfilcnt_t", "uint64"),
        ("__rlim_t", "uint64"),
        ("__socklen_t", "uint32"),
        ("__suseconds_t", "long"),
        ("__useconds_t", "uint32"),
        ("__key_t", "long"),
        ("__swblk_t", "int32"),
        ("__fixpt_t", "uint32"),
        ("dev_t", "__dev_t"),
        ("ino_t", "__ino_t"),
        ("mode_t", "__mode_t"),
        ("nlink_t", "__nlink_t"),
        ("off_t", "__off_t"),
        ("pid_t", "__pid_t"),
        ("uid_t", "__uid_t"),
        ("gid_t", "__gid_t"),
        ("id_t", "__id_t"),
        ("time_t", "__time_t"),
        ("clock_t", "__clock_t"),
        ("clockid_t", "__clockid_t"),
        ("blksize_t", "__blksize_t"),
        ("blkcnt_t", "__blkcnt_t"),
        ("fsblkcnt_t", "__fsblkcnt_t"),
        ("fsfilcnt_t", "__fsfilcnt_t"),
        ("rlim_t", "__rlim_t"),
        ("socklen_t", "__socklen_t"),
        ("suseconds_t", "__suseconds_t"),
        ("useconds_t", "__useconds_t"),
        ("key_t", "__key_t"),
        ("swblk_t", "__swblk_t"),
        ("fixpt_t", "__fixpt_t"),
    ],
    ilp32: &[
        ("__vaddr_t", "uint32"),
        ("__paddr_t", "uint32"),
        ("__vsize_t", "uint32"),
        ("vaddr_t", "__vaddr_t"),
        ("paddr_t", "__paddr_t"),
        ("vsize_t", "__vsize_t"),
    ],
    lp64: &[
        ("__vaddr_t", "uint64"),
        ("__paddr_t", "uint64"),
        ("__vsize_t", "uint64"),
        ("vaddr_t", "__vaddr_t"),
        ("paddr_t", "__paddr_t"),
        ("vsize_t", "__vsize_t"),
    ],
};
