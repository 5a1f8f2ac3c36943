/// A comparison key that makes display names collide the way a person would
/// expect, so "Max  Verstappen", " max verstappen" and "MAX VERSTAPPEN" cannot
/// be registered as three different drivers.
///
/// The display name is stored exactly as entered; only uniqueness checks go
/// through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Creates the key: surrounding whitespace trimmed, inner runs of
    /// whitespace collapsed to one space, lowercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use league::models::NormalizedName;
    ///
    /// let a = NormalizedName::new("Scuderia  Rossa");
    /// let b = NormalizedName::new(" scuderia rossa ");
    ///
    /// assert_eq!(a, b);
    /// ```
    pub fn new(name: &str) -> Self {
        let key = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name was blank or whitespace only
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        *self == Self::new(name)
    }
}
