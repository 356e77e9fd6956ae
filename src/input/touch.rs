//! Decode one complete touch cycle (press and release) into screen coordinates.
//!
//! Kobo controllers disagree on how contact is reported: some send BTN_TOUCH,
//! some only ABS_MT_PRESSURE, others ABS_MT_TOUCH_MAJOR. Position may come from
//! single-touch ABS_X/ABS_Y or from ABS_MT_POSITION_X/Y. Whatever is present
//! is accepted; only one contact point is tracked.

use std::io::Read;

use crate::error::{Result, TouchError};
use crate::input::event::{
    RawEvent, ABS_MT_POSITION_X, ABS_MT_POSITION_Y, ABS_MT_PRESSURE, ABS_MT_TOUCH_WIDTH_MAJOR,
    ABS_X, ABS_Y, BTN_TOUCH, EV_ABS, EV_KEY,
};
use crate::input::handle::DeviceHandle;
use crate::input::packet::read_packet;

/// Consecutive packet failures tolerated before giving up.
pub const MAX_GET_ATTEMPTS: u32 = 4;
/// Incomplete packets tolerated before giving up.
pub const MAX_DECODE_ATTEMPTS: u32 = 5;

/// Touch state accumulated over one or more packets. Coordinates are in
/// device space, -1 until seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchObservation {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
    pub released: bool,
}

impl Default for TouchObservation {
    fn default() -> Self {
        Self {
            x: -1,
            y: -1,
            pressed: false,
            released: false,
        }
    }
}

impl TouchObservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Later events override earlier ones for the same field.
    pub fn apply(&mut self, ev: &RawEvent) {
        match (ev.ty, ev.code) {
            (EV_KEY, BTN_TOUCH) => self.contact(ev.value == 1),
            (EV_ABS, ABS_X | ABS_MT_POSITION_X) => self.x = ev.value,
            (EV_ABS, ABS_Y | ABS_MT_POSITION_Y) => self.y = ev.value,
            (EV_ABS, ABS_MT_PRESSURE | ABS_MT_TOUCH_WIDTH_MAJOR) => self.contact(ev.value > 0),
            _ => {}
        }
    }

    pub fn fold<'a>(&mut self, packet: impl IntoIterator<Item = &'a RawEvent>) {
        for ev in packet {
            self.apply(ev);
        }
    }

    fn contact(&mut self, down: bool) {
        if down {
            self.pressed = true;
        } else {
            self.released = true;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.pressed && self.released
    }
}

/// Decoded touch in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

/// Rotate raw device coordinates counter-clockwise into screen space.
///
/// The `+ 1` is kept as-is; a clean 0-indexed rotation would use `- 1`.
pub fn transform(x: i32, y: i32, view_width: i32) -> TouchPoint {
    TouchPoint {
        x: view_width - y + 1,
        y: x,
    }
}

impl<R: Read> DeviceHandle<R> {
    /// Block until a full press/release cycle is decoded or a retry budget is
    /// exhausted. Nothing carries over between calls.
    pub fn get_input(&mut self) -> Result<TouchPoint> {
        let mut touch = TouchObservation::new();
        let mut get_attempts = 0u32;
        let mut decode_attempts = 0u32;

        loop {
            let packet = match read_packet(self) {
                Ok(packet) => packet,
                Err(e) => {
                    get_attempts += 1;
                    log::debug!("[touch] packet read failed ({}): {}", get_attempts, e);
                    if get_attempts > MAX_GET_ATTEMPTS {
                        return Err(TouchError::TouchRead(Box::new(e)));
                    }
                    continue;
                }
            };
            get_attempts = 0;

            touch.fold(&packet);
            if touch.is_complete() {
                break;
            }

            if decode_attempts < MAX_DECODE_ATTEMPTS {
                decode_attempts += 1;
                log::debug!("[touch] incomplete cycle ({}): {:?}", decode_attempts, touch);
            } else {
                return Err(TouchError::IncompleteTouchCycle);
            }
        }

        let point = transform(touch.x, touch.y, self.view_width());
        log::debug!(
            "[touch] raw ({}, {}) -> screen ({}, {})",
            touch.x,
            touch.y,
            point.x,
            point.y
        );
        Ok(point)
    }
}
