use serde::{Deserialize, Serialize};

/// A single marketplace listing. Owned by the catalog provider and never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub vertical: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub roi: Option<f64>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: None,
            vertical: None,
            tags: Vec::new(),
            roi: None,
            popularity: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_vertical(mut self, vertical: impl Into<String>) -> Self {
        self.vertical = Some(vertical.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_roi(mut self, roi: f64) -> Self {
        self.roi = Some(roi);
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// The item's category, falling back to its vertical. Blank values count
    /// as absent.
    pub fn category_label(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| self.vertical.as_deref().filter(|v| !v.trim().is_empty()))
    }

    /// ROI if it is a finite number.
    pub fn numeric_roi(&self) -> Option<f64> {
        self.roi.filter(|r| r.is_finite())
    }

    /// Popularity if it is a finite number.
    pub fn numeric_popularity(&self) -> Option<f64> {
        self.popularity.filter(|p| p.is_finite())
    }
}
