use std::{
  fs,
  path::Path,
};

use tracing::debug;

use super::error::PathError;

fn read_dir_filtered(
  path: &Path,
  want_dirs: bool,
) -> Result<Vec<String>, PathError>
{
  let rd = fs::read_dir(path)
    .map_err(|source| PathError::Unreadable { path: path.to_path_buf(), source })?;
  let mut names: Vec<String> = rd
    .filter_map(|res| res.ok())
    .filter_map(|e| {
      // Follow symlinks so a linked folder behaves like a folder
      let meta = fs::metadata(e.path()).ok()?;
      let keep = if want_dirs { meta.is_dir() } else { meta.is_file() };
      if keep { Some(e.file_name().to_string_lossy().to_string()) } else { None }
    })
    .collect();
  names.sort();
  Ok(names)
}

/// Names of the direct subdirectories of `root`, sorted.
///
/// A missing or unreadable root yields an empty list.
pub fn available_directories(root: &Path) -> Vec<String>
{
  read_dir_filtered(root, true).unwrap_or_else(|e| {
    debug!("{e}");
    Vec::new()
  })
}

/// Regular files directly inside each of `dirs`, as `dir/name` paths
/// relative to `root`.
///
/// Directories are visited in the given order; missing ones are skipped.
pub fn available_files(
  root: &Path,
  dirs: &[String],
) -> Vec<String>
{
  let mut out = Vec::new();
  for dir in dirs
  {
    match read_dir_filtered(&root.join(dir), false)
    {
      Ok(names) => out.extend(names.into_iter().map(|n| format!("{dir}/{n}"))),
      Err(e) => debug!("skipping directory: {e}"),
    }
  }
  out
}
