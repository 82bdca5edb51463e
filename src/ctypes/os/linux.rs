// Wed Jan 14 2026 - Alex

use crate::ctypes::os::OsTable;

pub const LINUX: OsTable = OsTable {
    name: "linux",
    common: &[
        ("__u_char", "uchar"),
        ("__u_short", "ushort"),
        ("__u_int", "uint"),
        ("__u_long", "ulong"),
        ("__int8_t", "int8"),
        ("__uint8_t", "uint8"),
        ("__int16_t", "int16"),
        ("__uint16_t", "uint16"),
        ("__int32_t", "int32"),
        ("__uint32_t", "uint32"),
        ("__dev_t", "uint64"),
        ("__uid_t", "uint"),
        ("__gid_t", "uint"),
        ("__mode_t", "uint"),
        ("__pid_t", "int"),
        ("__id_t", "uint"),
        ("__useconds_t", "uint"),
        ("__daddr_t", "int"),
        ("__key_t", "int"),
        ("__clockid_t", "int"),
        ("__timer_t", "pointer"),
        ("__socklen_t", "uint"),
        ("__caddr_t", "pointer"),
        ("__off_t", "long"),
        ("__clock_t", "long"),
        ("__time_t", "long"),
        ("__suseconds_t", "long"),
        ("__blksize_t", "long"),
        ("__blkcnt_t", "long"),
        ("__fsblkcnt_t", "ulong"),
        ("__fsfilcnt_t", "ulong"),
        ("__ino_t", "ulong"),
        ("__rlim_t", "ulong"),
        ("__ssize_t", "ssize_t"),
        ("__syscall_slong_t", "long"),
        ("__syscall_ulong_t", "ulong"),
        ("__intptr_t", "intptr_t"),
        ("u_char", "__u_char"),
        ("u_short", "__u_short"),
        ("u_int", "__u_int"),
        ("u_long", "__u_long"),
        ("dev_t", "__dev_t"),
        ("uid_t", "__uid_t"),
        ("gid_t", "__gid_t"),
        ("mode_t", "__mode_t"),
        ("pid_t", "__pid_t"),
        ("id_t", "__id_t"),
        ("useconds_t", "__useconds_t"),
        ("daddr_t", "__daddr_t"),
        ("key_t", "__key_t"),
        ("clockid_t", "__clockid_t"),
        ("timer_t", "__timer_t"),
        ("off_t", "__off_t"),
        ("clock_t", "__clock_t"),
        ("time_t", "__time_t"),
        ("suseconds_t", "__suseconds_t"),
        ("blksize_t", "__blksize_t"),
        ("blkcnt_t", "__blkcnt_t"),
        ("fsblkcnt_t", "__fsblkcnt_t"),
        ("fsfilcnt_t", "__fsfilcnt_t"),
        ("ino_t", "__ino_t"),
        ("rlim_t", "__rlim_t"),
        ("sa_family_t", "ushort"),
        ("nfds_t", "ulong"),
    ],
    ilp32: &[
        ("__int64_t", "long_long"),
        ("__uint64_t", "ulong_long"),
        ("__quad_t", "long_long"),
        ("__u_quad_t", "ulong_long"),
        ("__nlink_t", "uint"),
        ("__off64_t", "long_long"),
        ("__ino64_t", "ulong_long"),
        ("__blkcnt64_t", "long_long"),
        ("__fsblkcnt64_t", "ulong_long"),
        ("__fsfilcnt64_t", "ulong_long"),
        ("__rlim64_t", "ulong_long"),
        ("__loff_t", "__off64_t"),
        ("nlink_t", "__nlink_t"),
        ("off64_t", "__off64_t"),
        ("ino64_t", "__ino64_t"),
        ("blkcnt64_t", "__blkcnt64_t"),
        ("fsblkcnt64_t", "__fsblkcnt64_t"),
        ("fsfilcnt64_t", "__fsfilcnt64_t"),
        ("rlim64_t", "__rlim64_t"),
        ("loff_t", "__loff_t"),
        ("quad_t", "__quad_t"),
        ("u_quad_t", "__u_quad_t"),
    ],
    lp64: &[
        ("__int64_t", "long"),
        ("__uint64_t", "ulong"),
        ("__quad_t", "long"),
        ("__u_quad_t", "ulong"),
        ("__nlink_t", "ulong"),
        ("__off64_t", "long"),
        ("__ino64_t", "ulong"),
        ("__blkcnt64_t", "long"),
        ("__fsblkcnt64_t", "ulong"),
        ("__fsfilcnt64_t", "ulong"),
        ("__rlim64_t", "ulong"),
        ("__loff_t", "__off64_t"),
        ("nlink_t", "__nlink_t"),
        ("off64_t", "__off64_t"),
        ("ino64_t", "__ino64_t"),
        ("blkcnt64_t", "__blkcnt64_t"),
        ("fsblkcnt64_t", "__fsblkcnt64_t"),
        ("fsfilcnt64_t", "__fsfilcnt64_t"),
        ("rlim64_t", "__rlim64_t"),
        ("loff_t", "__loff_t"),
        ("quad_t", "__quad_t"),
        ("u_quad_t", "__u_quad_t"),
    ],
};
