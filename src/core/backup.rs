use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the workbook to `dest_file`, optionally zipped.
    /// Returns the path actually written.
    pub fn backup(
        workbook: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(workbook);
        let dest = Path::new(dest_file);

        // 1️⃣ Check workbook exists
        if !src.exists() {
            return Err(AppError::StoreUnavailable(format!(
                "workbook not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never overwrite silently
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_target, force)?;

        // 4️⃣ Copy or compress
        if compress {
            compress_backup(src, &final_target)?;
        } else {
            fs::copy(src, &final_target)?;
        }

        success(format!("Backup created: {}", final_target.display()));
        Ok(final_target)
    }
}

/// Write `src` into a single-entry .zip at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "milklog.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    if let Err(e) = zip.finish() {
        warning(format!("Failed to finalize archive: {}", e));
        return Err(std::io::Error::other(e).into());
    }

    Ok(())
}
