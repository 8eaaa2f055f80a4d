use std::path::{Path, PathBuf};
use std::process::Command;

use futures::channel::oneshot;

use crate::OpenError;

fn launcher(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(path);
        command
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    }
    #[cfg(target_os = "linux")]
    {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Open a local file with the default application.
///
/// # Errors
/// Returns an error if the launcher cannot be run or exits unsuccessfully.
pub async fn open_path(path: PathBuf) -> Result<(), OpenError> {
    let (tx, rx) = oneshot::channel();

    std::thread::Builder::new()
        .name("filedrop-open".into())
        .spawn(move || {
            let mut command = launcher(&path);
            let program = command.get_program().to_string_lossy().into_owned();
            let result = command.status().map_err(OpenError::from).and_then(|status| {
                if status.success() {
                    Ok(())
                } else {
                    Err(OpenError::LauncherFailed {
                        launcher: program,
                        status,
                    })
                }
            });
            let _ = tx.send(result);
        })
        .map_err(|e| OpenError::PlatformError(format!("Failed to start launcher thread: {e}")))?;

    rx.await
        .map_err(|_| OpenError::PlatformError("Launcher panicked or channel closed".into()))?
}
