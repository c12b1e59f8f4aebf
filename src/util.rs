//! Small utility helpers used across modules.

/// Replaces `{key}` placeholders in a single left-to-right pass.
/// Substituted values are copied verbatim and never re-scanned, so values
/// containing braces or other placeholder names come through unchanged.
/// Unknown placeholders are kept as-is.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = String::with_capacity(tpl.len());
  let mut rest = tpl;
  while let Some(open) = rest.find('{') {
    out.push_str(&rest[..open]);
    let after = &rest[open + 1..];
    let replaced = after.find('}').and_then(|close| {
      let key = &after[..close];
      pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v, close))
    });
    match replaced {
      Some((value, close)) => {
        out.push_str(value);
        rest = &after[close + 1..];
      }
      None => {
        out.push('{');
        rest = after;
      }
    }
  }
  out.push_str(rest);
  out
}

/// Log-safe truncation for large strings (cuts on a char boundary).
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fills_known_keys() {
    let out = fill_template("Q: {q} / A: {a}", &[("q", "one"), ("a", "two")]);
    assert_eq!(out, "Q: one / A: two");
  }

  #[test]
  fn values_are_not_re_expanded() {
    let out = fill_template("{a}|{b}", &[("a", "{b}"), ("b", "x")]);
    assert_eq!(out, "{b}|x");
  }

  #[test]
  fn unknown_and_unclosed_braces_survive() {
    let out = fill_template("{nope} {a} {", &[("a", "y")]);
    assert_eq!(out, "{nope} y {");
  }

  #[test]
  fn trunc_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    let s = "ééééé";
    let t = trunc_for_log(s, 3);
    assert!(t.starts_with("é…"));
    assert!(t.ends_with("(10 bytes total)"));
  }
}
