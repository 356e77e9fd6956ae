mod event;
mod handle;
mod packet;
mod touch;

pub use event::{RawEvent, INPUT_EVENT_SIZE};
pub use event::{
    ABS_MT_POSITION_X, ABS_MT_POSITION_Y, ABS_MT_PRESSURE, ABS_MT_TOUCH_WIDTH_MAJOR, ABS_X, ABS_Y,
    BTN_TOUCH, EV_ABS, EV_KEY, EV_SYN, SYN_DROPPED, SYN_MT_REPORT, SYN_REPORT,
};
pub use handle::DeviceHandle;
pub use packet::{read_packet, EventPacket};
pub use touch::{transform, TouchObservation, TouchPoint, MAX_DECODE_ATTEMPTS, MAX_GET_ATTEMPTS};
