use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FactId(pub i64);

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cat fact as stored in the `facts` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub id: FactId,
    pub message: String,
    /// Base URL of the illustration, without the cache-busting suffix.
    pub image_url: String,
    pub tag: Option<String>,
}

impl Fact {
    /// Image URL with `?r=<id>` appended so chat clients do not reuse a cached image
    /// across different facts that share a base URL.
    pub fn cache_busted_image_url(&self) -> String {
        format!("{}?r={}", self.image_url, self.id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }
}
