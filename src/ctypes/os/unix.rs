// Wed Jan 14 2026 - Alex

use crate::ctypes::os::OsTable;

pub const UNIX: OsTable = OsTable {
    name: "unix",
    common: &[
        ("int8_t", "int8"),
        ("uint8_t", "uint8"),
        ("int16_t", "int16"),
        ("uint16_t", "uint16"),
        ("int32_t", "int32"),
        ("uint32_t", "uint32"),
        ("int64_t", "int64"),
        ("uint64_t", "uint64"),
        ("int_least8_t", "int8"),
        ("uint_least8_t", "uint8"),
        ("int_least16_t", "int16"),
        ("uint_least16_t", "uint16"),
        ("int_least32_t", "int32"),
        ("uint_least32_t", "uint32"),
        ("int_least64_t", "int64"),
        ("uint_least64_t", "uint64"),
        ("int_fast8_t", "int8"),
        ("uint_fast8_t", "uint8"),
        ("intmax_t", "int64"),
        ("uintmax_t", "uint64"),
        ("u_int8_t", "uint8"),
        ("u_int16_t", "uint16"),
        ("u_int32_t", "uint32"),
        ("u_int64_t", "uint64"),
        ("wchar_t", "int32"),
        ("sig_atomic_t", "int"),
        ("socklen_t", "uint32"),
        ("in_addr_t", "uint32"),
        ("in_port_t", "uint16"),
        ("uid_t", "uint32"),
        ("gid_t", "uint32"),
        ("pid_t", "int32"),
        ("id_t", "uint32"),
        ("key_t", "int"),
        ("useconds_t", "uint32"),
        ("caddr_t", "pointer"),
    ],
    ilp32: &[
        ("int_fast16_t", "int32"),
        ("uint_fast16_t", "uint32"),
        ("int_fast32_t", "int32"),
        ("uint_fast32_t", "uint32"),
        ("int_fast64_t", "int64"),
        ("uint_fast64_t", "uint64"),
    ],
    lp64: &[
        ("int_fast16_t", "int64"),
        ("uint_fast16_t", "uint64"),
        ("int_fast32_t", "int64"),
        ("uint_fast32_t", "uint64"),
        ("int_fast64_t", "int64"),
        ("uint_fast64_t", "uint64"),
    ],
};
