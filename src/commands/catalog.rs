// Visual template catalog and content previews

use crate::models::{BusinessInfo, GeneratedContent};
use serde::Serialize;

const EXCERPT_LEN: usize = 100;

/// A visual template the shell can personalize with generated content.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogTemplate {
    pub id: u32,
    pub name: &'static str,
    /// CSS gradient class the shell renders the template card with.
    pub style: &'static str,
}

/// A catalog category (social, email, ads) and its templates.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub templates: &'static [CatalogTemplate],
}

const SOCIAL_TEMPLATES: &[CatalogTemplate] = &[
    CatalogTemplate {
        id: 1,
        name: "Post Corporativo",
        style: "bg-gradient-to-r from-blue-500 to-purple-600",
    },
    CatalogTemplate {
        id: 2,
        name: "Anuncio de Promoción",
        style: "bg-gradient-to-r from-orange-400 to-pink-500",
    },
    CatalogTemplate {
        id: 3,
        name: "Post Informativo",
        style: "bg-gradient-to-r from-green-400 to-emerald-500",
    },
    CatalogTemplate {
        id: 4,
        name: "Testimonio de Cliente",
        style: "bg-gradient-to-r from-yellow-400 to-amber-500",
    },
];

const EMAIL_TEMPLATES: &[CatalogTemplate] = &[
    CatalogTemplate {
        id: 1,
        name: "Newsletter Mensual",
        style: "bg-gradient-to-r from-sky-400 to-blue-500",
    },
    CatalogTemplate {
        id: 2,
        name: "Anuncio de Producto",
        style: "bg-gradient-to-r from-violet-500 to-purple-600",
    },
    CatalogTemplate {
        id: 3,
        name: "Invitación a Evento",
        style: "bg-gradient-to-r from-amber-400 to-orange-500",
    },
];

const AD_TEMPLATES: &[CatalogTemplate] = &[
    CatalogTemplate {
        id: 1,
        name: "Banner Web",
        style: "bg-gradient-to-r from-indigo-500 to-blue-600",
    },
    CatalogTemplate {
        id: 2,
        name: "Flyer Digital",
        style: "bg-gradient-to-r from-rose-400 to-red-500",
    },
    CatalogTemplate {
        id: 3,
        name: "Slide para Presentación",
        style: "bg-gradient-to-r from-teal-400 to-emerald-500",
    },
];

const CATEGORIES: &[CatalogCategory] = &[
    CatalogCategory {
        id: "social",
        name: "Redes Sociales",
        templates: SOCIAL_TEMPLATES,
    },
    CatalogCategory {
        id: "email",
        name: "Email Marketing",
        templates: EMAIL_TEMPLATES,
    },
    CatalogCategory {
        id: "ads",
        name: "Anuncios Publicitarios",
        templates: AD_TEMPLATES,
    },
];

pub fn catalog() -> &'static [CatalogCategory] {
    CATEGORIES
}

/// A template personalized with the business and an excerpt of the
/// generated content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreview {
    pub template_name: String,
    pub style: String,
    pub business_name: String,
    pub description: String,
    pub excerpt: Option<String>,
}

/// Preview a template from the catalog.
///
/// Previews require generated content; the excerpt comes from the first
/// item of the category's section, truncated to a hundred characters.
pub fn preview(
    category_id: &str,
    template_id: u32,
    info: &BusinessInfo,
    content: Option<&GeneratedContent>,
) -> Result<TemplatePreview, String> {
    let content = content.ok_or_else(|| {
        "Primero genera contenido para aprovechar al máximo las plantillas".to_string()
    })?;

    let category = CATEGORIES
        .iter()
        .find(|c| c.id == category_id)
        .ok_or_else(|| format!("Unknown template category: '{}'", category_id))?;
    let template = category
        .templates
        .iter()
        .find(|t| t.id == template_id)
        .ok_or_else(|| {
            format!(
                "Unknown template {} in category '{}'",
                template_id, category_id
            )
        })?;

    let excerpt = match category.id {
        "social" => content.social_posts.first().map(|p| truncate(&p.text)),
        "email" => content
            .emails
            .first()
            .map(|e| format!("Asunto: {}", e.subject)),
        "ads" => content.ads.first().map(|a| truncate(&a.copy)),
        _ => None,
    };

    Ok(TemplatePreview {
        template_name: template.name.to_string(),
        style: template.style.to_string(),
        business_name: info.name.clone(),
        description: format!("Plantilla optimizada para {}", info.industry),
        excerpt,
    })
}

fn truncate(text: &str) -> String {
    let excerpt: String = text.chars().take(EXCERPT_LEN).collect();
    format!("{}...", excerpt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::ContentEngine;

    fn sample_info() -> BusinessInfo {
        BusinessInfo {
            name: "MediSalud Plus".to_string(),
            industry: "Salud".to_string(),
            objective: "Lanzamiento".to_string(),
            keywords: "innovación".to_string(),
        }
    }

    #[test]
    fn test_catalog_shape() {
        let categories = catalog();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].templates.len(), 4);
        assert_eq!(categories[1].templates.len(), 3);
        assert_eq!(categories[2].templates.len(), 3);
        assert_eq!(categories[0].templates[3].name, "Testimonio de Cliente");
    }

    #[test]
    fn test_preview_requires_content() {
        let err = preview("social", 1, &sample_info(), None).unwrap_err();
        assert!(err.starts_with("Primero genera contenido"));
    }

    #[test]
    fn test_preview_excerpts_per_category() {
        let info = sample_info();
        let engine = ContentEngine::new().unwrap();
        let content = engine.generate(&info).unwrap();

        let social = preview("social", 1, &info, Some(&content)).unwrap();
        assert_eq!(social.business_name, "MediSalud Plus");
        assert_eq!(social.description, "Plantilla optimizada para Salud");
        assert!(social.excerpt.unwrap().ends_with("..."));

        let email = preview("email", 2, &info, Some(&content)).unwrap();
        assert!(email.excerpt.unwrap().starts_with("Asunto: "));

        let ads = preview("ads", 3, &info, Some(&content)).unwrap();
        assert_eq!(ads.template_name, "Slide para Presentación");
    }

    #[test]
    fn test_preview_unknown_ids() {
        let info = sample_info();
        let engine = ContentEngine::new().unwrap();
        let content = engine.generate(&info).unwrap();

        assert!(preview("video", 1, &info, Some(&content)).is_err());
        assert!(preview("social", 9, &info, Some(&content)).is_err());
    }
}
