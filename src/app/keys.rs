//! Key map utilities and helpers on `App`.

use crate::{
  app::App,
  config::KeyMapping,
  keymap::tokenize_sequence,
};

impl App
{
  pub(crate) fn rebuild_keymap_lookup(&mut self)
  {
    self.keys.lookup.clear();
    self.keys.prefixes.clear();
    for m in &self.keys.maps
    {
      self.keys.lookup.insert(m.sequence.clone(), m.action.clone());
      let tokens = tokenize_sequence(&m.sequence);
      let mut acc = String::new();
      for t in tokens.iter().take(tokens.len().saturating_sub(1))
      {
        acc.push_str(t);
        self.keys.prefixes.insert(acc.clone());
      }
    }
  }

  pub fn set_keymaps(
    &mut self,
    maps: Vec<KeyMapping>,
  )
  {
    self.keys.maps = maps;
    self.rebuild_keymap_lookup();
  }

  pub fn keymaps(&self) -> &[KeyMapping]
  {
    &self.keys.maps
  }

  pub fn get_keymap_action(
    &self,
    seq: &str,
  ) -> Option<String>
  {
    self.keys.lookup.get(seq).cloned()
  }

  pub fn has_prefix(
    &self,
    seq: &str,
  ) -> bool
  {
    self.keys.prefixes.contains(seq)
  }

  /// Mappings whose sequence starts with `prefix`, for the help overlay.
  pub fn keymaps_with_prefix(
    &self,
    prefix: &str,
  ) -> Vec<&KeyMapping>
  {
    let mut out: Vec<&KeyMapping> = Vec::new();
    for m in &self.keys.maps
    {
      if !m.sequence.starts_with(prefix)
      {
        continue;
      }
      // A later mapping for the same sequence overrides an earlier one
      out.retain(|o| o.sequence != m.sequence);
      out.push(m);
    }
    out
  }
}
