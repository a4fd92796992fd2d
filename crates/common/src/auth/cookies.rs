//! Minimal per-domain cookie jar.
//!
//! The login engine keeps one jar per cookie domain and builds the `Cookie`
//! request header by hand. Only `name=value` pairs are retained; attributes
//! such as `Path`, `Expires` or `HttpOnly` are dropped on the way in.

use std::fmt;

/// Ordered collection of `name=value` pairs for one cookie domain.
///
/// Setting a name that already exists overwrites the value in place, so the
/// position of the first occurrence is preserved. A name never appears twice.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: Vec<(String, String)>,
}

impl CookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, overwriting an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Absorb one `Set-Cookie` header value.
    ///
    /// Returns `false` when the header carries no usable `name=value` pair.
    pub fn absorb(&mut self, set_cookie: &str) -> bool {
        let pair = set_cookie.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.split_once('=') else {
            return false;
        };
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.insert(name, value.trim());
        true
    }

    /// Absorb every `Set-Cookie` header of a response, in order.
    pub fn absorb_all<'a>(&mut self, headers: impl IntoIterator<Item = &'a str>) {
        for header in headers {
            self.absorb(header);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Value for the `Cookie` request header, or `None` for an empty jar.
    #[must_use]
    pub fn header_value(&self) -> Option<String> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CookieJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

// Values are session secrets; only names are printed.
impl fmt::Debug for CookieJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|(name, _)| name)).finish()
    }
}
