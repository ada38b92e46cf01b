use std::cmp::Ordering;
use std::fmt::Display;

/// Group label used when an item has no category.
pub const FALLBACK_CATEGORY: &str = "other";

/// Category number used when an item has none, which sorts it after the numbered categories.
pub const FALLBACK_CATEGORY_NUMBER: &str = "999";

/// Case-insensitive identity of a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim and lower-case a category label. A blank label becomes [`FALLBACK_CATEGORY`].
pub fn normalize_category_key(label: &str) -> CategoryKey {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        CategoryKey(FALLBACK_CATEGORY.to_string())
    } else {
        CategoryKey(trimmed.to_lowercase())
    }
}

/// Sort token for a category group, such as `"01"` or `"04.5"`.
///
/// Two numeric tokens compare by value, so `"04.5"` sorts between `"04"` and `"05"` and `"10"`
/// after `"9"`. Tokens that are not finite numbers compare as text and come after every numeric
/// token, which keeps the order total when the two kinds are mixed. Numerically equal tokens
/// (`"4"` and `"04"`) fall back to their text.
#[derive(Debug, Clone)]
pub struct CategoryNumber {
    raw: String,
    value: Option<f64>,
}

impl CategoryNumber {
    /// Missing or blank input becomes [`FALLBACK_CATEGORY_NUMBER`].
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => FALLBACK_CATEGORY_NUMBER,
        };
        let value = raw.parse::<f64>().ok().filter(|v| v.is_finite());
        Self {
            raw: raw.to_string(),
            value,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric value, if the token is a finite number.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Ord for CategoryNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for CategoryNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CategoryNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryNumber {}

impl Display for CategoryNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
