//! Owns the touch device stream and reads one fixed-size record at a time.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::config::DeviceConfig;
use crate::error::{Result, TouchError};
use crate::input::event::{RawEvent, INPUT_EVENT_SIZE};

/// Open touch input device. The stream is released on [`close`](Self::close)
/// or when the handle is dropped, whichever comes first.
#[derive(Debug)]
pub struct DeviceHandle<R: Read = File> {
    reader: Option<R>,
    config: DeviceConfig,
}

impl DeviceHandle<File> {
    /// Open the device node read-only.
    pub fn open(path: impl AsRef<Path>, view_width: i32, view_height: i32) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            log::error!("[touch] could not open {} for reading: {}", path.display(), source);
            TouchError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::info!("[touch] opened {} ({}x{})", path.display(), view_width, view_height);
        Ok(Self::from_reader(
            file,
            DeviceConfig::new(path, view_width, view_height),
        ))
    }

    pub fn open_config(config: &DeviceConfig) -> Result<Self> {
        Self::open(&config.device_path, config.view_width, config.view_height)
    }
}

impl<R: Read> DeviceHandle<R> {
    /// Wrap an already open event stream (a pipe, an SSH channel, a test buffer).
    pub fn from_reader(reader: R, config: DeviceConfig) -> Self {
        Self {
            reader: Some(reader),
            config,
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn view_width(&self) -> i32 {
        self.config.view_width
    }

    pub fn view_height(&self) -> i32 {
        self.config.view_height
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Blocking read of exactly one event. Short reads are errors; there is no
    /// attempt to resynchronize a partial record.
    pub fn read_event(&mut self) -> Result<RawEvent> {
        let reader = self.reader.as_mut().ok_or_else(|| {
            TouchError::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "touch device is closed",
            ))
        })?;

        let mut buf = [0u8; INPUT_EVENT_SIZE];
        reader.read_exact(&mut buf).map_err(TouchError::Io)?;
        let ev = RawEvent::from_bytes(&buf);
        log::trace!("[touch] {:?}", ev.to_input_event());
        Ok(ev)
    }

    /// Release the stream. Safe to call more than once.
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            log::info!("[touch] closed {}", self.config.device_path.display());
        }
    }
}

impl<R: Read> Drop for DeviceHandle<R> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::input::event::{EV_ABS, ABS_X};

    fn handle(bytes: Vec<u8>) -> DeviceHandle<Cursor<Vec<u8>>> {
        DeviceHandle::from_reader(Cursor::new(bytes), DeviceConfig::new("test", 1080, 1440))
    }

    #[test]
    fn reads_one_event() {
        let ev = RawEvent::new(EV_ABS, ABS_X, 200);
        let mut h = handle(ev.to_bytes().to_vec());
        assert_eq!(h.read_event().unwrap(), ev);
    }

    #[test]
    fn short_read_is_io_error() {
        let mut h = handle(vec![0u8; INPUT_EVENT_SIZE - 3]);
        assert!(matches!(h.read_event(), Err(TouchError::Io(_))));
    }

    #[test]
    fn close_is_idempotent() {
        let mut h = handle(RawEvent::new(EV_ABS, ABS_X, 1).to_bytes().to_vec());
        h.close();
        h.close();
        assert!(!h.is_open());
        match h.read_event() {
            Err(TouchError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotConnected),
            other => panic!("expected NotConnected, got {:?}", other),
        }
    }

    #[test]
    fn open_missing_path_fails() {
        let err = DeviceHandle::open("/nonexistent/input/event9", 1080, 1440).unwrap_err();
        assert!(matches!(err, TouchError::Open { .. }));
    }
}
