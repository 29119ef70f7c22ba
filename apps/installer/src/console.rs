//! Console rendering of install progress and results.

use std::io::{self, Write};

use gwfinstall_file_ops::{InstallEvent, PackageKind};

const USAGE: &str = "
Usage examples:
    gwfinstall mywatchface.zip
    gwfinstall watchface.prg
    gwfinstall https://garmin.watchfacebuilder.com/watchface/xxxx/

After running, you'll be prompted for the mount path of your Garmin device on Linux.

Make sure your Garmin is connected via USB and mounted, or is accessible via GVFS (e.g. /run/user/1000/gvfs/mtp:host=xxxx).
";

pub fn print_usage(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{USAGE}")
}

/// Writes the status fragment for one install event.
///
/// Step markers stay on the current line; each installed file ends it.
pub fn print_event(output: &mut impl Write, event: &InstallEvent) -> io::Result<()> {
    match event {
        InstallEvent::Unzipping => write!(output, "Unzipping...")?,
        InstallEvent::Copying {
            kind: PackageKind::Set,
        } => write!(output, "Copying setting file...")?,
        InstallEvent::Copying { .. } => write!(output, "Copying app...")?,
        InstallEvent::Installed(file) => writeln!(output, "{}. Done!", file.name)?,
    }
    output.flush()
}

/// Prefix for the failure line of an installer.
pub fn failure_prefix(kind: PackageKind) -> &'static str {
    match kind {
        PackageKind::Zip => "Error unzipping or copying files",
        PackageKind::Prg => "Error copying .prg file",
        PackageKind::Set => "Error copying .SET file",
    }
}
