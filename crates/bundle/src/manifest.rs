//! Build-script helpers that embed a directory as an [`crate::EmbeddedBundle`].
//!
//! The generated file defines a `&[bundle::AssetSpec]` constant whose entries
//! pull every file in with `include_bytes!`, so the host crate only needs to
//! `include!` it from `OUT_DIR`.

use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes the manifest for `root` into `OUT_DIR/file_name` and prints the
/// `cargo:rerun-if-changed` lines for every directory involved.
///
/// `extensions` restricts the embedded files; pass an empty slice to embed
/// everything. Returns the path of the generated file.
pub fn emit_manifest(
    root: impl AsRef<Path>,
    const_name: &str,
    file_name: &str,
    extensions: &[&str],
) -> io::Result<PathBuf> {
    let root = fs::canonicalize(root.as_ref())?;
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;

    println!("cargo:rerun-if-changed={}", root.display());
    for dir in collect_dirs(&root)? {
        println!("cargo:rerun-if-changed={}", dir.display());
    }

    let manifest_path = out_dir.join(file_name);
    let mut manifest = BufWriter::new(File::create(&manifest_path)?);
    write_manifest(&mut manifest, &root, const_name, extensions)?;
    manifest.flush()?;
    Ok(manifest_path)
}

/// Writes a `pub const {const_name}: &[bundle::AssetSpec]` definition listing
/// every file below `root`, sorted by path.
pub fn write_manifest<W: Write>(
    out: &mut W,
    root: &Path,
    const_name: &str,
    extensions: &[&str],
) -> io::Result<()> {
    writeln!(out, "pub const {const_name}: &[::bundle::AssetSpec] = &[")?;

    for entry in collect_assets(root, extensions)? {
        let logical_path = entry
            .strip_prefix(root)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?
            .to_string_lossy()
            .replace('\\', "/");
        let include_path = entry.to_string_lossy().replace('\\', "/");
        writeln!(
            out,
            "    ::bundle::AssetSpec::new({logical_path:?}, include_bytes!({include_path:?})),"
        )?;
    }

    writeln!(out, "];")?;
    Ok(())
}

/// Recursively lists the files under `dir`, optionally filtered by extension.
pub fn collect_assets(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            files.extend(collect_assets(&path, extensions)?);
        } else if extensions.is_empty()
            || path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn collect_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.extend(collect_dirs(&path)?);
            dirs.push(path);
        }
    }
    Ok(dirs)
}
