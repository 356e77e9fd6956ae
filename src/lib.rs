//! Touch input for Kobo e-readers.
//!
//! Reads raw `input_event` records from the touchscreen device node, groups
//! them into SYN_REPORT-terminated packets, folds the controller-specific
//! fields into a single contact and returns it rotated into screen space.
//!
//! ```no_run
//! use kobo_touch::DeviceHandle;
//!
//! let mut touch = DeviceHandle::open("/dev/input/event1", 1080, 1440)?;
//! loop {
//!     match touch.get_input() {
//!         Ok(p) => println!("{} {}", p.x, p.y),
//!         Err(_) => continue,
//!     }
//! }
//! # Ok::<(), kobo_touch::TouchError>(())
//! ```

pub mod config;
pub mod device;
mod error;
pub mod input;
#[cfg(feature = "remote")]
pub mod ssh;

pub use config::DeviceConfig;
pub use device::DeviceProfile;
pub use error::{Result, TouchError};
pub use input::{DeviceHandle, RawEvent, TouchObservation, TouchPoint};
