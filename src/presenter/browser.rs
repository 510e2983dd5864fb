use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

/// Opens a URL with the platform's default handler.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Spawns the OS "open" command and does not wait for it.
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        debug!(%url, "opening browser");
        open_command(url)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[cfg(target_os = "windows")]
fn open_command(url: &str) -> io::Result<Command> {
    // Bypasses cmd.exe so `&` and other shell metacharacters in the query
    // string reach the handler unchanged.
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(url);
    Ok(command)
}

#[cfg(target_os = "macos")]
fn open_command(url: &str) -> io::Result<Command> {
    let mut command = Command::new("open");
    command.arg(url);
    Ok(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_command(url: &str) -> io::Result<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Ok(command)
}

#[cfg(not(any(target_os = "windows", unix)))]
fn open_command(_url: &str) -> io::Result<Command> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "opening a browser is not supported on this platform",
    ))
}
