//! Category registry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub color: String,
}

impl Category {
    pub fn new(name: String, emoji: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            emoji,
            color,
        }
    }

    /// Display label, `"<emoji> <name>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The eight categories seeded on first run.
pub fn default_categories() -> Vec<Category> {
    [
        ("Food", "🍕", "hsl(24, 100%, 58%)"),
        ("Transport", "🚗", "hsl(200, 80%, 50%)"),
        ("Entertainment", "🎬", "hsl(280, 65%, 60%)"),
        ("Shopping", "🛍️", "hsl(330, 75%, 58%)"),
        ("Health", "⚕️", "hsl(150, 60%, 45%)"),
        ("Bills", "📄", "hsl(45, 90%, 50%)"),
        ("Savings", "💰", "hsl(100, 55%, 45%)"),
        ("Other", "📦", "hsl(220, 15%, 55%)"),
    ]
    .into_iter()
    .map(|(name, emoji, color)| {
        Category::new(name.to_string(), emoji.to_string(), color.to_string())
    })
    .collect()
}

/// Resolves a category id to its display label.
///
/// Dangling references are not an error: the raw id is returned as the
/// fallback label.
pub fn resolve_label(categories: &[Category], id: Uuid) -> String {
    categories
        .iter()
        .find(|category| category.id == id)
        .map_or_else(|| id.to_string(), Category::label)
}
