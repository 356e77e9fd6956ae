//! Print decoded touches from a Kobo touchscreen, one `x y` line per tap.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use kobo_touch::{DeviceConfig, DeviceHandle, DeviceProfile};

#[derive(Parser)]
#[command(name = "kobo-touch")]
#[command(about = "Decode touchscreen taps into screen coordinates")]
struct Cli {
    /// Touch input device node
    #[arg(short, long)]
    device: Option<PathBuf>,

    /// Panel view width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Panel view height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Stop after this many touches
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Read the device on this host over SSH instead of locally
    #[cfg(feature = "remote")]
    #[arg(long)]
    host: Option<String>,

    /// SSH private key
    #[cfg(feature = "remote")]
    #[arg(long, requires = "host")]
    key: Option<PathBuf>,

    /// SSH password (used when no key is given)
    #[cfg(feature = "remote")]
    #[arg(long, requires = "host")]
    password: Option<String>,
}

impl Cli {
    fn device_config(&self) -> DeviceConfig {
        let profile = DeviceProfile::current();
        DeviceConfig::new(
            self.device
                .clone()
                .unwrap_or_else(|| PathBuf::from(profile.touch_device)),
            self.width.unwrap_or(profile.view_width),
            self.height.unwrap_or(profile.view_height),
        )
    }
}

fn run<R: Read>(touch: &mut DeviceHandle<R>, count: Option<u64>) {
    let mut seen: u64 = 0;
    while count.map_or(true, |n| seen < n) {
        match touch.get_input() {
            Ok(p) => {
                println!("{} {}", p.x, p.y);
                seen += 1;
            }
            Err(e) if e.is_end_of_stream() => {
                log::info!("[touch] input stream ended after {} touches", seen);
                break;
            }
            Err(e) => log::debug!("[touch] no touch this cycle: {}", e),
        }
    }
}

#[cfg(feature = "remote")]
fn run_remote(
    cli: &Cli,
    config: &DeviceConfig,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    use kobo_touch::config::{Auth, RemoteConfig};

    let Some(host) = cli.host.clone() else {
        return Ok(false);
    };
    let auth = match (&cli.key, &cli.password) {
        (Some(key), _) => Auth::Key(key.clone()),
        (None, Some(pass)) => Auth::Password(pass.clone()),
        (None, None) => return Err("--host needs --key or --password".into()),
    };
    let mut touch = kobo_touch::ssh::open_remote(config.clone(), &RemoteConfig::new(host, auth))?;
    run(&mut touch, cli.count);
    Ok(true)
}

#[cfg(not(feature = "remote"))]
fn run_remote(
    _cli: &Cli,
    _config: &DeviceConfig,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    Ok(false)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.device_config();

    if run_remote(&cli, &config)? {
        return Ok(());
    }

    let mut touch = DeviceHandle::open_config(&config)?;
    log::info!("[touch] waiting for touches (tap the screen)…");
    run(&mut touch, cli.count);
    Ok(())
}
