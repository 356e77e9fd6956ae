//! Group raw events into one hardware sample, terminated by SYN_REPORT.

use std::io::Read;

use crate::error::{Result, TouchError};
use crate::input::event::RawEvent;
use crate::input::handle::DeviceHandle;

/// Events of one atomic sample; the last one is always SYN_REPORT.
pub type EventPacket = Vec<RawEvent>;

/// Read until the next SYN_REPORT.
///
/// After a SYN_DROPPED everything up to and including the next SYN_REPORT is
/// discarded and the attempt fails with [`TouchError::BadPacket`].
pub fn read_packet<R: Read>(dev: &mut DeviceHandle<R>) -> Result<EventPacket> {
    let mut packet = EventPacket::with_capacity(16);
    let mut bad_packet = false;

    loop {
        let ev = dev.read_event()?;

        if ev.is_syn_dropped() {
            if !bad_packet {
                log::warn!("[touch] SYN_DROPPED, skipping to next report");
            }
            bad_packet = true;
            packet.clear();
            continue;
        }
        if bad_packet {
            if ev.is_syn_report() {
                return Err(TouchError::BadPacket);
            }
            continue;
        }

        packet.push(ev);
        if ev.is_syn_report() {
            return Ok(packet);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::DeviceConfig;
    use crate::input::event::*;

    fn handle(events: &[RawEvent]) -> DeviceHandle<Cursor<Vec<u8>>> {
        let bytes = events.iter().flat_map(|e| e.to_bytes()).collect();
        DeviceHandle::from_reader(Cursor::new(bytes), DeviceConfig::new("test", 1080, 1440))
    }

    fn report() -> RawEvent {
        RawEvent::new(EV_SYN, SYN_REPORT, 0)
    }

    #[test]
    fn packet_ends_at_report() {
        let x = RawEvent::new(EV_ABS, ABS_X, 10);
        let y = RawEvent::new(EV_ABS, ABS_Y, 20);
        let mut h = handle(&[x, y, report(), x]);
        assert_eq!(read_packet(&mut h).unwrap(), vec![x, y, report()]);
        // The trailing event stays in the stream for the next packet
        assert_eq!(h.read_event().unwrap(), x);
    }

    #[test]
    fn syn_mt_report_does_not_terminate() {
        let mt = RawEvent::new(EV_SYN, SYN_MT_REPORT, 0);
        let mut h = handle(&[mt, report()]);
        assert_eq!(read_packet(&mut h).unwrap(), vec![mt, report()]);
    }

    #[test]
    fn dropped_discards_through_next_report() {
        let x = RawEvent::new(EV_ABS, ABS_X, 10);
        let y = RawEvent::new(EV_ABS, ABS_Y, 20);
        let dropped = RawEvent::new(EV_SYN, SYN_DROPPED, 0);
        let mut h = handle(&[x, dropped, y, report(), y, report()]);

        assert!(matches!(read_packet(&mut h), Err(TouchError::BadPacket)));
        assert_eq!(read_packet(&mut h).unwrap(), vec![y, report()]);
    }

    #[test]
    fn repeated_dropped_stays_bad() {
        let dropped = RawEvent::new(EV_SYN, SYN_DROPPED, 0);
        let mut h = handle(&[dropped, dropped, report()]);
        assert!(matches!(read_packet(&mut h), Err(TouchError::BadPacket)));
    }

    #[test]
    fn eof_mid_packet_is_io_error() {
        let mut h = handle(&[RawEvent::new(EV_ABS, ABS_X, 10)]);
        assert!(matches!(read_packet(&mut h), Err(TouchError::Io(_))));
    }
}
