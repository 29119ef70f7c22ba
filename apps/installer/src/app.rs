//! Installer pipeline: mount path, input, optional download, dispatch.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gwfinstall_download::{DownloadedArchive, Downloader, is_download_url, with_app_param};
use gwfinstall_file_ops::{DeviceLayout, DispatchError, PackageKind, install_package};

use crate::config::Config;
use crate::{console, prompt};

/// Local file to install, either given by the user or downloaded.
enum Source {
    Local(PathBuf),
    Downloaded(DownloadedArchive),
}

impl Source {
    fn path(&self) -> &Path {
        match self {
            Source::Local(path) => path.as_path(),
            Source::Downloaded(archive) => archive.path(),
        }
    }
}

/// Runs the installer once.
///
/// Install failures and unsupported inputs are reported on `output` and
/// still return `Ok`. Download and console I/O failures are returned.
pub async fn run(
    file_arg: Option<String>,
    config: &Config,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let mount = prompt::resolve_mount_path(input, output)?;
    writeln!(output, "Using device mount path: {}", mount.display())?;

    let Some(raw) = prompt::acquire_input(file_arg, input, output)? else {
        console::print_usage(output)?;
        return Ok(());
    };

    let staging = config.staging_dir();
    let source = resolve_source(&raw, config, &staging, output).await?;
    if PackageKind::from_path(source.path()) == Some(PackageKind::Zip) {
        ensure_staging_dir(&staging)?;
    }
    install(source.path(), &DeviceLayout::new(&mount), &staging, output)?;
    drop(source);

    if config.pause_on_exit {
        prompt::pause(input, output)?;
    }
    Ok(())
}

/// Downloads URL inputs; anything else is taken as a local path.
async fn resolve_source(
    raw: &str,
    config: &Config,
    staging: &Path,
    output: &mut impl Write,
) -> anyhow::Result<Source> {
    if !is_download_url(raw) {
        return Ok(Source::Local(PathBuf::from(raw)));
    }

    write!(output, "Downloading...")?;
    output.flush()?;

    ensure_staging_dir(staging)?;
    let url = with_app_param(raw);
    let downloader = Downloader::new(&config.user_agent)?.with_temp_dir(staging);
    let archive = downloader
        .download(&url)
        .await
        .with_context(|| format!("failed to download {url}"))?;

    Ok(Source::Downloaded(archive))
}

/// Only downloads and zip extraction write to the staging directory.
fn ensure_staging_dir(staging: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(staging)
        .with_context(|| format!("failed to create {}", staging.display()))
}

/// Dispatches the local file and prints the outcome.
fn install(
    path: &Path,
    layout: &DeviceLayout,
    staging: &Path,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut write_err = None;
    let result = install_package(path, layout, staging, &mut |event| {
        if let Err(e) = console::print_event(output, &event) {
            write_err.get_or_insert(e);
        }
    });
    if let Some(e) = write_err {
        return Err(e);
    }

    match result {
        Ok(report) => {
            tracing::info!(
                kind = ?report.kind,
                installed = report.installed.len(),
                "install finished"
            );
        }
        Err(DispatchError::UnsupportedInput(rejected)) => {
            tracing::debug!(path = %rejected.display(), "unsupported input");
            writeln!(output, "Invalid input file.")?;
        }
        Err(DispatchError::Install(e)) => {
            tracing::warn!(kind = ?e.kind(), error = %e, "install failed");
            let prefix = PackageKind::from_path(path)
                .map(console::failure_prefix)
                .unwrap_or("Error");
            writeln!(output, "{prefix}: {e}")?;
        }
    }
    Ok(())
}
