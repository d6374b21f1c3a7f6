use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current local time in the format YYYY-MM-DD HH:MM:SS
#[cfg(target_family = "unix")]
pub fn now() -> String {
    use std::ffi::{CStr, CString};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards");
    let secs = now.as_secs() as libc::time_t;

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    unsafe {
        libc::localtime_r(&secs, &mut tm);
    }

    let mut buf = [0 as libc::c_char; 64];
    let fmt = CString::new("%Y-%m-%d %H:%M:%S").unwrap();

    unsafe {
        if libc::strftime(buf.as_mut_ptr(), buf.len(), fmt.as_ptr(), &tm) == 0 {
            return format!("@{}", unix_timestamp());
        }
        CStr::from_ptr(buf.as_ptr()).to_string_lossy().to_string()
    }
}

/// Returns the current local time in the format YYYY-MM-DD HH:MM:SS
#[cfg(target_family = "windows")]
pub fn now() -> String {
    use windows_sys::Win32::System::SystemServices::LOCALE_USER_DEFAULT;
    use windows_sys::Win32::System::Time::{GetLocalTime, SYSTEMTIME};

    let mut tm: SYSTEMTIME = unsafe { std::mem::zeroed() };

    unsafe {
        GetLocalTime(&mut tm);

        let mut buf = [0u16; 64];
        let len = windows_sys::Win32::System::Time::GetDateFormatW(
            LOCALE_USER_DEFAULT,
            0,
            &tm,
            windows_sys::core::w!("yyyy-MM-dd HH:mm:ss"),
            buf.as_mut_ptr(),
            buf.len() as i32,
        );

        if len <= 1 {
            return format!("@{}", unix_timestamp());
        }
        String::from_utf16_lossy(&buf[..len as usize - 1])
    }
}

/// Returns the current Unix timestamp in seconds
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}
