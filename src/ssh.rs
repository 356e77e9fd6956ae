//! Stream a touch device node from a reader on the network.

use std::io::{self, Read};
use std::net::TcpStream;

use ssh2::{Channel, Session};

use crate::config::{Auth, DeviceConfig, RemoteConfig};
use crate::input::DeviceHandle;

const SSH_USER: &str = "root";
const SSH_PORT: u16 = 22;

/// Remote `cat` of a device node. Keeps the session alive for as long as the
/// channel is read.
pub struct RemoteStream {
    _session: Session,
    channel: Channel,
}

impl std::fmt::Debug for RemoteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStream").finish_non_exhaustive()
    }
}

impl Read for RemoteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.channel.read(buf)
    }
}

impl Drop for RemoteStream {
    fn drop(&mut self) {
        if let Err(e) = self.channel.close() {
            log::warn!("[ssh] failed to close channel: {}", e);
        }
    }
}

/// Open an SSH connection and stream raw events from a device.
pub fn open_device_stream(
    device_path: &str,
    config: &RemoteConfig,
) -> Result<RemoteStream, Box<dyn std::error::Error + Send + Sync>> {
    log::info!("[ssh] connecting to {}", config.host);

    let session = connect_and_authenticate(config)?;
    let mut channel = session.channel_session()?;

    let cmd = stream_command(device_path);
    log::debug!("[ssh] executing: {}", cmd);
    channel.exec(&cmd)?;

    log::info!("[ssh] stream ready for {}", device_path);
    Ok(RemoteStream {
        _session: session,
        channel,
    })
}

/// Touch handle fed by a remote device node.
pub fn open_remote(
    device: DeviceConfig,
    remote: &RemoteConfig,
) -> Result<DeviceHandle<RemoteStream>, Box<dyn std::error::Error + Send + Sync>> {
    let path = device.device_path.to_string_lossy().into_owned();
    let stream = open_device_stream(&path, remote)?;
    Ok(DeviceHandle::from_reader(stream, device))
}

/// Remote shell command that streams `device_path`; the path is single-quoted.
fn stream_command(device_path: &str) -> String {
    format!("cat '{}'", device_path.replace('\'', "'\\''"))
}

fn connect_and_authenticate(
    config: &RemoteConfig,
) -> Result<Session, Box<dyn std::error::Error + Send + Sync>> {
    let tcp = TcpStream::connect((config.host.as_str(), SSH_PORT))?;
    let mut session = Session::new()?;

    session.set_tcp_stream(tcp);
    session.handshake()?;

    authenticate(&mut session, config.auth())?;

    Ok(session)
}

fn authenticate(
    session: &mut Session,
    auth: &Auth,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match auth {
        Auth::Key(path) => {
            session.userauth_pubkey_file(SSH_USER, None, path.as_ref(), None)?;
        }
        Auth::Password(pass) => {
            session.userauth_password(SSH_USER, pass)?;
        }
    }

    if !session.authenticated() {
        return Err("SSH authentication failed".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_is_quoted() {
        assert_eq!(stream_command("/dev/input/event1"), "cat '/dev/input/event1'");
    }

    #[test]
    fn shell_metacharacters_stay_literal() {
        assert_eq!(
            stream_command("/tmp/a b;rm -rf $HOME"),
            "cat '/tmp/a b;rm -rf $HOME'"
        );
        assert_eq!(stream_command("/tmp/it's"), "cat '/tmp/it'\\''s'");
    }
}
