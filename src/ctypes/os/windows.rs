// Wed Jan 14 2026 - Alex

use crate::ctypes::os::OsTable;

// LLP64: `long` stays 32 bits even with 8-byte pointers.
pub const WINDOWS: OsTable = OsTable {
    name: "windows",
    common: &[
        ("long", "int"),
        ("ulong", "uint"),
        ("long_le", "int32_le"),
        ("long_be", "int32_be"),
        ("ulong_le", "uint32_le"),
        ("ulong_be", "uint32_be"),
        ("time_t", "int64"),
        ("__time32_t", "int32"),
        ("__time64_t", "int64"),
        ("off_t", "long"),
        ("dev_t", "uint"),
        ("ino_t", "ushort"),
        ("mode_t", "ushort"),
        ("pid_t", "int"),
        ("wchar_t", "uint16"),
        ("errno_t", "int"),
        ("BOOL", "int"),
        ("BOOLEAN", "uchar"),
        ("BYTE", "uint8"),
        ("CHAR", "char"),
        ("UCHAR", "uchar"),
        ("CCHAR", "char"),
        ("WCHAR", "uint16"),
        ("TCHAR", "WCHAR"),
        ("SHORT", "short"),
        ("USHORT", "ushort"),
        ("WORD", "ushort"),
        ("INT", "int"),
        ("UINT", "uint"),
        ("LONG", "long"),
        ("ULONG", "ulong"),
        ("DWORD", "ulong"),
        ("LONGLONG", "long_long"),
        ("ULONGLONG", "ulong_long"),
        ("DWORDLONG", "ulong_long"),
        ("QWORD", "ulong_long"),
        ("DWORD32", "uint32"),
        ("DWORD64", "uint64"),
        ("INT8", "int8"),
        ("UINT8", "uint8"),
        ("INT16", "int16"),
        ("UINT16", "uint16"),
        ("INT32", "int32"),
        ("UINT32", "uint32"),
        ("INT64", "int64"),
        ("UINT64", "uint64"),
        ("LONG32", "int32"),
        ("ULONG32", "uint32"),
        ("LONG64", "int64"),
        ("ULONG64", "uint64"),
        ("FLOAT", "float"),
        ("INT_PTR", "intptr_t"),
        ("UINT_PTR", "uintptr_t"),
        ("LONG_PTR", "intptr_t"),
        ("ULONG_PTR", "uintptr_t"),
        ("DWORD_PTR", "ULONG_PTR"),
        ("SIZE_T", "ULONG_PTR"),
        ("SSIZE_T", "LONG_PTR"),
        ("WPARAM", "UINT_PTR"),
        ("LPARAM", "LONG_PTR"),
        ("LRESULT", "LONG_PTR"),
        ("PVOID", "pointer"),
        ("LPVOID", "pointer"),
        ("LPCVOID", "pointer"),
        ("LPSTR", "pointer"),
        ("LPCSTR", "pointer"),
        ("LPWSTR", "pointer"),
        ("LPCWSTR", "pointer"),
        ("HANDLE", "PVOID"),
        ("HMODULE", "HANDLE"),
        ("HINSTANCE", "HANDLE"),
        ("HKEY", "HANDLE"),
        ("HWND", "HANDLE"),
        ("HDC", "HANDLE"),
        ("HBITMAP", "HANDLE"),
        ("HBRUSH", "HANDLE"),
        ("HICON", "HANDLE"),
        ("HMENU", "HANDLE"),
        ("HFILE", "int"),
        ("SOCKET", "UINT_PTR"),
        ("ATOM", "WORD"),
        ("COLORREF", "DWORD"),
        ("LANGID", "WORD"),
        ("LCID", "DWORD"),
        ("LCTYPE", "DWORD"),
        ("HRESULT", "LONG"),
        ("NTSTATUS", "LONG"),
        ("ACCESS_MASK", "DWORD"),
        ("USN", "LONGLONG"),
    ],
    ilp32: &[("HALF_PTR", "short"), ("UHALF_PTR", "ushort")],
    lp64: &[("HALF_PTR", "int"), ("UHALF_PTR", "uint")],
};
