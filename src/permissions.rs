/// Permission status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PermissionStatus {
    /// Permission granted
    Granted,
    /// Permission denied
    Denied,
    /// Permission not determined (user hasn't been asked yet)
    NotDetermined,
    /// Permission restricted (parental controls, etc)
    Restricted,
}

impl std::fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionStatus::Granted => write!(f, "granted"),
            PermissionStatus::Denied => write!(f, "denied"),
            PermissionStatus::NotDetermined => write!(f, "not_determined"),
            PermissionStatus::Restricted => write!(f, "restricted"),
        }
    }
}

/// Check camera permission status
/// Returns permission status for the current platform
pub fn check_permission() -> PermissionStatus {
    check_permission_detailed().status
}

/// Check camera permission status with detailed information
pub fn check_permission_detailed() -> PermissionInfo {
    #[cfg(target_os = "windows")]
    {
        check_permission_windows()
    }

    #[cfg(target_os = "macos")]
    {
        check_permission_macos()
    }

    #[cfg(target_os = "linux")]
    {
        check_permission_linux()
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        PermissionInfo {
            status: PermissionStatus::NotDetermined,
            message: "Platform not supported".to_string(),
            can_request: false,
        }
    }
}

/// Detailed permission information
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PermissionInfo {
    pub status: PermissionStatus,
    pub message: String,
    pub can_request: bool,
}

/// Whether any video capture device is present.
///
/// On Linux this scans `/dev/video*`. Other platforms only learn about
/// hardware when the camera backend opens a device, so presence is
/// assumed there and the open call settles it.
pub fn has_video_device() -> bool {
    #[cfg(target_os = "linux")]
    {
        !video_device_paths().is_empty()
    }

    #[cfg(not(target_os = "linux"))]
    {
        true
    }
}

#[cfg(target_os = "windows")]
fn check_permission_windows() -> PermissionInfo {
    // Camera access is governed by Windows Privacy settings and only
    // observable when a capture backend opens a device.
    PermissionInfo {
        status: PermissionStatus::NotDetermined,
        message: "Camera access is controlled by Windows Privacy settings (Settings > Privacy > Camera)"
            .to_string(),
        can_request: true,
    }
}

#[cfg(target_os = "macos")]
fn check_permission_macos() -> PermissionInfo {
    // TCC authorization is queried by the camera backend at open time;
    // a denied state surfaces there as an open failure.
    PermissionInfo {
        status: PermissionStatus::NotDetermined,
        message: "Camera access is controlled by macOS TCC - enable in System Settings > Privacy & Security > Camera if denied"
            .to_string(),
        can_request: true,
    }
}

#[cfg(target_os = "linux")]
fn check_permission_linux() -> PermissionInfo {
    use std::fs;

    let video_devices = video_device_paths();

    if video_devices.is_empty() {
        return PermissionInfo {
            status: PermissionStatus::NotDetermined,
            message: "No video devices found at /dev/video*".to_string(),
            can_request: false,
        };
    }

    // Check if we can read from first video device
    let first_device = &video_devices[0];
    match fs::metadata(first_device) {
        Ok(_metadata) => {
            // Check if we have read permission (via group membership)
            if check_linux_group_membership() {
                PermissionInfo {
                    status: PermissionStatus::Granted,
                    message: format!(
                        "Camera access granted (user in video group, {} found)",
                        first_device
                    ),
                    can_request: false,
                }
            } else {
                PermissionInfo {
                    status: PermissionStatus::Denied,
                    message: format!("Camera device {} exists but user not in video group - run: sudo usermod -a -G video $USER", first_device),
                    can_request: true,
                }
            }
        }
        Err(e) => PermissionInfo {
            status: PermissionStatus::Denied,
            message: format!("Cannot access {}: {}", first_device, e),
            can_request: true,
        },
    }
}

#[cfg(target_os = "linux")]
fn video_device_paths() -> Vec<String> {
    use std::path::Path;

    (0..10)
        .map(|i| format!("/dev/video{}", i))
        .filter(|path| Path::new(path).exists())
        .collect()
}

#[cfg(target_os = "linux")]
fn check_linux_group_membership() -> bool {
    use std::process::Command;

    // Check if user is in 'video' or 'plugdev' group
    let output = Command::new("groups").output().ok();

    if let Some(output) = output {
        if let Ok(groups) = String::from_utf8(output.stdout) {
            return groups.contains("video") || groups.contains("plugdev");
        }
    }

    // Fallback: report denied if groups cannot be checked
    false
}
