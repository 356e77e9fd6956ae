mod kobo;

pub use kobo::KOBO;

use crate::config::DeviceConfig;

/// Device-specific defaults for touch decoding.
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    pub name: &'static str,

    // Panel size in screen pixels (portrait)
    pub view_width: i32,
    pub view_height: i32,

    // Default device path
    pub touch_device: &'static str,
}

impl DeviceProfile {
    /// Get profile for the current device (defaults to Kobo).
    pub fn current() -> &'static Self {
        &KOBO
    }

    pub fn config(&self) -> DeviceConfig {
        DeviceConfig::new(self.touch_device, self.view_width, self.view_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_profile_builds_config() {
        let cfg = DeviceProfile::current().config();
        assert_eq!(cfg.device_path().to_str(), Some("/dev/input/event1"));
        assert_eq!((cfg.view_width, cfg.view_height), (1080, 1440));
    }
}
