use super::DeviceProfile;

pub const KOBO: DeviceProfile = DeviceProfile {
    name: "Kobo",

    // 1080×1440 panel, touch reported in native (landscape) orientation
    view_width: 1080,
    view_height: 1440,

    touch_device: "/dev/input/event1",
};
