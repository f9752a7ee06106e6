// SPDX-License-Identifier: MPL-2.0
//! Hands `tel:` and `sms:` links to the desktop's URI handler.

use crate::info::ContactLink;
use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

/// Launches the platform handler for `link`. Returns `false` when there is
/// no number or the handler could not be started.
pub fn open(link: &ContactLink) -> bool {
    if !link.is_available() {
        log::debug!("ignoring {} link without a number", link);
        return false;
    }
    let uri = link.to_string();
    let opened = handler_command(&uri).and_then(launch).is_some();
    if !opened {
        log::error!("no handler could open {}", uri);
    }
    opened
}

/// Spawns `command` and reaps it on a background thread, so the UI never
/// blocks on the handler and no zombie is left behind.
fn launch(mut command: Command) -> Option<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) => {
            log::debug!("failed to spawn {:?}: {}", command.get_program(), err);
            return None;
        }
    };
    let program = command.get_program().to_string_lossy().into_owned();
    thread::Builder::new()
        .name("link-handler".to_string())
        .spawn(move || {
            let status = child.wait();
            match &status {
                Ok(status) if !status.success() => {
                    log::warn!("{} exited with {}", program, status);
                }
                Ok(_) => {}
                Err(err) => log::warn!("failed to wait for {}: {}", program, err),
            }
            status
        })
        .ok()
}

#[cfg(target_os = "windows")]
fn handler_command(uri: &str) -> Option<Command> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", uri]);
    Some(command)
}

#[cfg(target_os = "macos")]
fn handler_command(uri: &str) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(uri);
    Some(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn handler_command(uri: &str) -> Option<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(uri);
    Some(command)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn handler_command(_uri: &str) -> Option<Command> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_without_number_is_not_opened() {
        assert!(!open(&ContactLink::tel("")));
    }

    #[cfg(unix)]
    #[test]
    fn launched_handler_is_waited_for() {
        let waiter = launch(Command::new("true")).expect("`true` should spawn");
        let status = waiter
            .join()
            .expect("waiter thread panicked")
            .expect("wait failed");
        assert!(status.success());
    }

    #[test]
    fn missing_handler_is_reported() {
        assert!(launch(Command::new("iced-invitation-no-such-handler")).is_none());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn tel_links_go_to_xdg_open() {
        let command = handler_command("tel:01012345678").expect("unix has a handler");
        assert_eq!(command.get_program(), "xdg-open");
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![std::ffi::OsStr::new("tel:01012345678")]
        );
    }
}
