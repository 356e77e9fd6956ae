use std::path::{Path, PathBuf};

/// Where to read touches from and the panel size used for the coordinate
/// rotation. Fixed for the lifetime of a device handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub device_path: PathBuf,
    pub view_width: i32,
    pub view_height: i32,
}

impl DeviceConfig {
    pub fn new(device_path: impl Into<PathBuf>, view_width: i32, view_height: i32) -> Self {
        Self {
            device_path: device_path.into(),
            view_width,
            view_height,
        }
    }

    pub fn device_path(&self) -> &Path {
        &self.device_path
    }
}

/// SSH credentials for a reader on the network.
#[derive(Debug, Clone)]
pub enum Auth {
    Key(PathBuf),
    Password(String),
}

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub host: String,
    pub auth: Auth,
}

impl RemoteConfig {
    pub fn new(host: impl Into<String>, auth: Auth) -> Self {
        Self {
            host: host.into(),
            auth,
        }
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}
