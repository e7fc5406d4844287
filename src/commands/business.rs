// Business info store and industry suggestions

use crate::models::{BusinessInfo, BusinessInfoUpdate, CampaignObjective};
use std::sync::RwLock;

/// Common industries offered as suggestions while typing.
pub const INDUSTRIES: [&str; 16] = [
    "Tecnología",
    "Salud",
    "Educación",
    "Alimentación",
    "Moda",
    "Belleza",
    "Hogar",
    "Automotriz",
    "Construcción",
    "Finanzas",
    "Turismo",
    "Deportes",
    "Arte y Cultura",
    "Entretenimiento",
    "E-commerce",
    "Consultoría",
];

const MAX_SUGGESTIONS: usize = 5;

/// In-memory store for the user's campaign brief; never persisted.
pub struct BusinessState {
    info: RwLock<BusinessInfo>,
}

impl BusinessState {
    pub fn new() -> Self {
        Self {
            info: RwLock::new(BusinessInfo::default()),
        }
    }

    pub fn snapshot(&self) -> Result<BusinessInfo, String> {
        self.info
            .read()
            .map(|i| i.clone())
            .map_err(|e| format!("Failed to acquire lock: {}", e))
    }

    /// Merge a partial update, last write wins per field.
    pub fn update(&self, update: BusinessInfoUpdate) -> Result<BusinessInfo, String> {
        let mut info = self
            .info
            .write()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;

        if let Some(name) = update.name {
            info.name = name;
        }
        if let Some(industry) = update.industry {
            info.industry = industry;
        }
        if let Some(objective) = update.objective {
            info.objective = objective;
        }
        if let Some(keywords) = update.keywords {
            info.keywords = keywords;
        }

        Ok(info.clone())
    }
}

impl Default for BusinessState {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive "contains" filter over the fixed industry list,
/// capped at 5 results. Empty input yields no suggestions.
pub fn industry_suggestions(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    INDUSTRIES
        .iter()
        .filter(|industry| industry.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

/// Generation is gated on name, industry and objective all being present.
pub fn can_generate(info: &BusinessInfo) -> bool {
    !info.name.is_empty() && !info.industry.is_empty() && !info.objective.is_empty()
}

/// Options for the campaign objective select.
pub fn objectives() -> Vec<&'static str> {
    CampaignObjective::ALL.iter().map(|o| o.as_str()).collect()
}
