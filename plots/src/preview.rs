//! Interactive display: the saved chart images, opened with the platform's
//! default viewer.
//!
//! Best effort. Failures are logged and never fail the run.

use std::path::Path;
use std::process::Command;

pub fn show(images: &[&Path]) {
    for image in images {
        match open_command(image).spawn() {
            Ok(_) => tracing::info!(image = %image.display(), "chart opened"),
            Err(err) => tracing::warn!(image = %image.display(), "chart not opened: {err}"),
        }
    }
}

fn open_command(image: &Path) -> Command {
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = Command::new("xdg-open");

    command.arg(image);
    command
}

#[cfg(test)]
mod test_preview {
    use super::*;

    #[test]
    fn test_opens_the_image_itself() {
        let command = open_command(Path::new("plots/read.png"));
        let last = command.get_args().last().unwrap();
        assert_eq!(last, "plots/read.png");
    }
}
