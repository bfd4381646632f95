/* src/client/rust/src/cookies.rs */

//! Helpers over `document.cookie` strings.

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_EXPIRY_DAYS: i64 = 14;

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Value of cookie `name` in a `document.cookie` string, or `""` when absent.
pub fn get<'a>(cookies: &'a str, name: &str) -> &'a str {
  cookies
    .split("; ")
    .filter_map(|pair| pair.split_once('='))
    .find_map(|(key, value)| (key == name).then_some(value))
    .unwrap_or("")
}

/// Assignment string that stores `name=value` for `days` days from `now`.
pub fn set(name: &str, value: &str, days: i64, now: DateTime<Utc>) -> String {
  let expires = now + Duration::days(days);
  format!(
    "{name}={value}; expires={}; path=/; secure; SameSite=Lax;",
    expires.format(EXPIRES_FORMAT)
  )
}

/// Assignment string that expires cookie `name` immediately.
pub fn delete(name: &str) -> String {
  format!("{name}=; expires=Thu, 01 Jan 1970 00:00:01 GMT; path=/;")
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn get_finds_named_cookie() {
    let jar = "theme=dark; session=abc123; lang=fr";
    assert_eq!(get(jar, "session"), "abc123");
    assert_eq!(get(jar, "missing"), "");
    assert_eq!(get("", "theme"), "");
  }

  #[test]
  fn get_keeps_equals_signs_in_value() {
    let jar = "token=abc==; theme=dark";
    assert_eq!(get(jar, "token"), "abc==");
    assert_eq!(get(jar, "theme"), "dark");
  }

  #[test]
  fn set_expires_after_given_days() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(
      set("theme", "dark", DEFAULT_EXPIRY_DAYS, now),
      "theme=dark; expires=Fri, 15 Mar 2024 12:00:00 GMT; path=/; secure; SameSite=Lax;"
    );
  }

  #[test]
  fn delete_expires_in_the_past() {
    assert_eq!(delete("session"), "session=; expires=Thu, 01 Jan 1970 00:00:01 GMT; path=/;");
  }
}
