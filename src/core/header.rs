use std::{
  fs,
  io,
  path::Path,
};

use super::options::CommentPrefix;

/// Collect the comment block at the top of `path`.
///
/// Reading stops at the first line not starting with `prefix`. Each kept line
/// has the prefix removed and surrounding whitespace trimmed. Bytes that are
/// not UTF-8 decode to U+FFFD, the same as in the loader.
pub fn read_comment_block(
  path: &Path,
  prefix: CommentPrefix,
) -> io::Result<String>
{
  let bytes = fs::read(path)?;
  let text = String::from_utf8_lossy(&bytes);
  let mut lines = Vec::new();
  for line in text.lines()
  {
    match line.strip_prefix(prefix.as_str())
    {
      Some(rest) => lines.push(rest.trim()),
      None => break,
    }
  }
  Ok(lines.join("\n"))
}
