// Centralized helpers to convert between enums and strings

use crate::app::Focus;

pub fn focus_to_str(f: Focus) -> &'static str
{
  match f
  {
    Focus::Rootdir => "rootdir",
    Focus::Directories => "directories",
    Focus::Files => "files",
    Focus::CommentPrefix => "comment",
    Focus::Separator => "separator",
    Focus::Columns => "columns",
    Focus::Header => "header",
    Focus::ViewerFiles => "viewer",
  }
}

pub fn focus_from_str(s: &str) -> Option<Focus>
{
  let low = s.trim().to_ascii_lowercase();
  match low.as_str()
  {
    "rootdir" | "root" => Some(Focus::Rootdir),
    "directories" | "dirs" => Some(Focus::Directories),
    "files" => Some(Focus::Files),
    "comment" | "comment_prefix" => Some(Focus::CommentPrefix),
    "separator" | "sep" => Some(Focus::Separator),
    "columns" | "cols" => Some(Focus::Columns),
    "header" => Some(Focus::Header),
    "viewer" | "inspect" => Some(Focus::ViewerFiles),
    _ => None,
  }
}

/// Title shown on the widget that `f` focuses.
pub fn focus_title(f: Focus) -> &'static str
{
  match f
  {
    Focus::Rootdir => "Root directory",
    Focus::Directories => "Directories",
    Focus::Files => "Files",
    Focus::CommentPrefix => "Comment",
    Focus::Separator => "Separator",
    Focus::Columns => "Columns",
    Focus::Header => "Header",
    Focus::ViewerFiles => "File",
  }
}
