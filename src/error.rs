use std::io;
use std::path::PathBuf;

/// Every failure the touch decoder can report. None of them are fatal to the
/// process; callers normally log and poll again.
#[derive(Debug, thiserror::Error)]
pub enum TouchError {
    #[error("could not open {} for reading", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading input event failed")]
    Io(#[source] io::Error),

    #[error("bad event packet (kernel dropped events)")]
    BadPacket,

    /// Carries the last packet failure.
    #[error("failed to get touch packet")]
    TouchRead(#[source] Box<TouchError>),

    #[error("unable to decode complete touch cycle")]
    IncompleteTouchCycle,
}

impl TouchError {
    /// True once the underlying stream has ended or been closed, so polling
    /// again can never produce another touch.
    pub fn is_end_of_stream(&self) -> bool {
        match self {
            TouchError::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::NotConnected
            ),
            TouchError::TouchRead(cause) => cause.is_end_of_stream(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TouchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_stream_looks_through_touch_read() {
        let eof = TouchError::Io(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(eof.is_end_of_stream());
        assert!(TouchError::TouchRead(Box::new(eof)).is_end_of_stream());

        let closed = TouchError::Io(io::Error::from(io::ErrorKind::NotConnected));
        assert!(TouchError::TouchRead(Box::new(closed)).is_end_of_stream());
    }

    #[test]
    fn dropped_packets_are_not_end_of_stream() {
        assert!(!TouchError::TouchRead(Box::new(TouchError::BadPacket)).is_end_of_stream());
        assert!(!TouchError::IncompleteTouchCycle.is_end_of_stream());
        let interrupted = TouchError::Io(io::Error::from(io::ErrorKind::Interrupted));
        assert!(!interrupted.is_end_of_stream());
    }
}
