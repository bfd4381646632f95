/* src/server/engine/rust/src/escape.rs */

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for ch in value.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '"' => out.push_str("&quot;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Make JSON text safe to embed in an inline `<script>` element.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, `<`, `>`,
/// `&` and the JS line terminators U+2028/U+2029 become `\uXXXX` escapes so
/// the payload can neither close the script element nor break the parser.
pub fn escape_script_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if in_string {
      match ch {
        '\\' => {
          out.push(ch);
          if let Some(next) = chars.next() {
            out.push(next);
          }
        }
        '"' => {
          in_string = false;
          out.push(ch);
        }
        '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
          out.push_str(&format!("\\u{:04x}", ch as u32));
        }
        _ => out.push(ch),
      }
    } else {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
    }
  }
  out
}
