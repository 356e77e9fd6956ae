//! Wire codec for the touch device: one kernel input record per 16 bytes,
//! timestamp included, in the little-endian layout of 32-bit ARM userland.

use evdevil::event::{EventType, InputEvent};

/// Bytes per record: time_sec 4, time_usec 4, type 2, code 2, value 4.
pub const INPUT_EVENT_SIZE: usize = 16;

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;

pub const SYN_REPORT: u16 = 0x00;
pub const SYN_MT_REPORT: u16 = 0x02;
pub const SYN_DROPPED: u16 = 0x03;

pub const BTN_TOUCH: u16 = 0x14a;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
// Kernel name is ABS_MT_TOUCH_MAJOR; some Kobo firmware uses it as the contact width.
pub const ABS_MT_TOUCH_WIDTH_MAJOR: u16 = 0x30;
pub const ABS_MT_POSITION_X: u16 = 0x35;
pub const ABS_MT_POSITION_Y: u16 = 0x36;
pub const ABS_MT_PRESSURE: u16 = 0x3a;

/// One kernel input record, exactly as it sits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawEvent {
    pub time_sec: u32,
    pub time_usec: u32,
    pub ty: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub fn new(ty: u16, code: u16, value: i32) -> Self {
        Self {
            ty,
            code,
            value,
            ..Self::default()
        }
    }

    pub fn is_syn_report(&self) -> bool {
        self.ty == EV_SYN && self.code == SYN_REPORT
    }

    pub fn is_syn_dropped(&self) -> bool {
        self.ty == EV_SYN && self.code == SYN_DROPPED
    }

    /// Decode all five fields of one record. The fixed-size input makes this
    /// infallible; short reads are caught by the caller's `read_exact`.
    pub fn from_bytes(buf: &[u8; INPUT_EVENT_SIZE]) -> Self {
        Self {
            time_sec: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            time_usec: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
            ty: u16::from_le_bytes([buf[8], buf[9]]),
            code: u16::from_le_bytes([buf[10], buf[11]]),
            value: i32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
        }
    }

    /// Serialize back to the 16-byte little-endian layout.
    pub fn to_bytes(&self) -> [u8; INPUT_EVENT_SIZE] {
        let mut buf = [0u8; INPUT_EVENT_SIZE];
        buf[0..4].copy_from_slice(&self.time_sec.to_le_bytes());
        buf[4..8].copy_from_slice(&self.time_usec.to_le_bytes());
        buf[8..10].copy_from_slice(&self.ty.to_le_bytes());
        buf[10..12].copy_from_slice(&self.code.to_le_bytes());
        buf[12..16].copy_from_slice(&self.value.to_le_bytes());
        buf
    }

    /// evdevil view of the event, used for readable trace output.
    pub fn to_input_event(&self) -> InputEvent {
        InputEvent::new(EventType::from_raw(self.ty), self.code, self.value)
    }
}
