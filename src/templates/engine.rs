// Deterministic content rendering using Tera

use crate::models::{
    AdCopy, BusinessInfo, ContentSection, EmailDraft, GeneratedContent, Slogan, SocialPost,
};
use anyhow::{anyhow, Result};
use tera::{Context, Tera};

/// Fixed template set for the mock generation backend.
///
/// Variables: `name`, `industry`, `objective`, `keywords`, `hashtag`
/// (industry with whitespace stripped) and `first_keyword` (first
/// comma-separated keyword, falling back to `hashtag`).
const TEMPLATES: &[(&str, &str)] = &[
    // Initial generation
    (
        "social_post_1",
        "¡{{ name }} llega con una propuesta única en {{ industry }}! Descubre por qué somos la mejor opción para ti. #{{ hashtag }} #Innovación",
    ),
    (
        "social_post_2",
        "En {{ name }} entendemos tus necesidades. Nuestro equipo de expertos en {{ industry }} está listo para ayudarte a alcanzar tus metas. ¡Contáctanos hoy mismo!",
    ),
    (
        "social_post_3",
        "¿Buscas calidad en {{ industry }}? {{ name }} tiene las soluciones que necesitas. Visítanos y compruébalo tú mismo. #Calidad #{{ hashtag }}",
    ),
    (
        "email_1_subject",
        "{{ name }}: Revolucionando el sector de {{ industry }}",
    ),
    (
        "email_1_body",
        "Estimado cliente,\n\nNos complace presentarte {{ name }}, tu nueva solución integral en {{ industry }}. Nuestro objetivo es ayudarte a {% if objective == \"Lanzamiento\" %}despegar con fuerza{% else %}mejorar tu posicionamiento{% endif %} en el mercado.\n\nDescubre nuestras ofertas exclusivas para nuevos clientes.\n\nSaludos cordiales,\nEquipo de {{ name }}",
    ),
    (
        "email_2_subject",
        "Descubre cómo {{ name }} está transformando {{ industry }}",
    ),
    (
        "email_2_body",
        "Hola,\n\nEl mundo de {{ industry }} está cambiando rápidamente, y en {{ name }} estamos a la vanguardia de esta transformación.\n\nQuisiera invitarte a conocer nuestras soluciones diseñadas especialmente para ayudarte a alcanzar tus objetivos de negocio.\n\n¿Podríamos agendar una breve reunión para discutir cómo podemos colaborar?\n\nAtentamente,\nDirección Comercial\n{{ name }}",
    ),
    (
        "slogan_1",
        "{{ name }}: Innovación y excelencia en {{ industry }}",
    ),
    (
        "slogan_2",
        "Transformando {{ industry }}, mejorando vidas - {{ name }}",
    ),
    (
        "ad_1_copy",
        "Descubre por qué {{ name }} es la elección número uno en {{ industry }}. Calidad, servicio y experiencia en un solo lugar.",
    ),
    (
        "ad_1_focus",
        "Destacar la propuesta de valor única y la credibilidad de la marca.",
    ),
    (
        "ad_2_copy",
        "¿Problemas con {{ industry | lower }}? {{ name }} tiene la solución que has estado buscando. Contáctanos hoy.",
    ),
    (
        "ad_2_focus",
        "Enfoque en resolución de problemas específicos del sector, llamada a la acción directa.",
    ),
    // Section-level regeneration
    (
        "social_refresh_1",
        "¡Renovamos nuestra imagen! {{ name }} se transforma para ofrecerte lo mejor en {{ industry }}. #Renovación #{{ hashtag }}",
    ),
    (
        "social_refresh_2",
        "La excelencia en {{ industry }} tiene nombre: {{ name }}. Descubre nuestro enfoque único y personalizado.",
    ),
    (
        "social_refresh_3",
        "En {{ name }} combinamos tecnología y experiencia para revolucionar {{ industry }}. ¡Únete a nuestra comunidad!",
    ),
    (
        "email_refresh_1_subject",
        "{{ name }} renueva su propuesta en {{ industry }}",
    ),
    (
        "email_refresh_1_body",
        "Estimado cliente,\n\nEn {{ name }} seguimos innovando para ofrecerte lo mejor en {{ industry }}. Hemos preparado novedades pensadas para tu objetivo de {{ objective | lower }}.\n\nNo te pierdas nuestras próximas ofertas.\n\nSaludos cordiales,\nEquipo de {{ name }}",
    ),
    (
        "email_refresh_2_subject",
        "Nuevas soluciones de {{ name }} para {{ industry }}",
    ),
    (
        "email_refresh_2_body",
        "Hola,\n\nQueremos contarte cómo {{ name }} está marcando la diferencia en {{ industry }}. Nuestro equipo ha desarrollado propuestas a la medida de tus necesidades.\n\n¿Hablamos esta semana?\n\nAtentamente,\nDirección Comercial\n{{ name }}",
    ),
    (
        "slogan_refresh_1",
        "{{ name }}: el nuevo referente en {{ industry }}",
    ),
    (
        "slogan_refresh_2",
        "{{ industry }} evoluciona con {{ name }}",
    ),
    (
        "ad_refresh_1_copy",
        "{{ name }} redefine {{ industry }}. Conoce nuestra propuesta renovada y déjate sorprender.",
    ),
    (
        "ad_refresh_1_focus",
        "Resaltar la renovación de la marca y generar curiosidad.",
    ),
    (
        "ad_refresh_2_copy",
        "Lo mejor de {{ industry }} está en {{ name }}. Da el siguiente paso y contáctanos hoy mismo.",
    ),
    (
        "ad_refresh_2_focus",
        "Llamada a la acción directa apoyada en la confianza del sector.",
    ),
    // Item-level regeneration ("improved" variants)
    (
        "social_improved",
        "¡Nuevo y mejorado! {{ name }} presenta su innovador enfoque en {{ industry }}. Nuestro compromiso es superar tus expectativas. #{{ first_keyword }}",
    ),
    (
        "email_improved_subject",
        "{{ name }}: una propuesta renovada para {{ industry }}",
    ),
    (
        "email_improved_body",
        "Estimado cliente,\n\n{{ name }} ha mejorado su oferta en {{ industry }} pensando en ti. Descubre por qué {{ first_keyword }} es el centro de todo lo que hacemos.\n\nSaludos cordiales,\nEquipo de {{ name }}",
    ),
    (
        "slogan_improved",
        "{{ name }}: {{ first_keyword }} al servicio de {{ industry }}",
    ),
    (
        "ad_improved_copy",
        "¡Nuevo y mejorado! {{ name }} lleva {{ first_keyword }} a otro nivel en {{ industry }}. Compruébalo hoy.",
    ),
    (
        "ad_improved_focus",
        "Destacar la mejora continua y el diferencial de {{ first_keyword }}.",
    ),
];

/// Renders the fixed marketing templates for a business brief.
pub struct ContentEngine {
    tera: Tera,
}

impl ContentEngine {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())
            .map_err(|e| anyhow!("Failed to register content templates: {}", e))?;
        Ok(Self { tera })
    }

    /// Build the rendering context for a brief.
    fn context(info: &BusinessInfo) -> Context {
        // Hashtag fragment: industry with all whitespace stripped.
        let hashtag: String = info.industry.split_whitespace().collect();
        let first_keyword = info
            .keywords
            .split(',')
            .next()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| hashtag.clone());

        let mut ctx = Context::new();
        ctx.insert("name", &info.name);
        ctx.insert("industry", &info.industry);
        ctx.insert("objective", &info.objective);
        ctx.insert("keywords", &info.keywords);
        ctx.insert("hashtag", &hashtag);
        ctx.insert("first_keyword", &first_keyword);
        ctx
    }

    fn render(&self, name: &str, ctx: &Context) -> Result<String> {
        self.tera
            .render(name, ctx)
            .map_err(|e| anyhow!("Failed to render template '{}': {}", name, e))
    }

    /// Produce a full bundle: 3 social posts, 2 emails, 2 slogans, 2 ads.
    pub fn generate(&self, info: &BusinessInfo) -> Result<GeneratedContent> {
        let ctx = Self::context(info);

        let social_posts = (1..=3u32)
            .map(|id| {
                Ok(SocialPost {
                    id,
                    text: self.render(&format!("social_post_{}", id), &ctx)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let emails = (1..=2u32)
            .map(|id| {
                Ok(EmailDraft {
                    id,
                    subject: self.render(&format!("email_{}_subject", id), &ctx)?,
                    body: self.render(&format!("email_{}_body", id), &ctx)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let slogans = (1..=2u32)
            .map(|id| {
                Ok(Slogan {
                    id,
                    text: self.render(&format!("slogan_{}", id), &ctx)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let ads = (1..=2u32)
            .map(|id| {
                Ok(AdCopy {
                    id,
                    copy: self.render(&format!("ad_{}_copy", id), &ctx)?,
                    focus: self.render(&format!("ad_{}_focus", id), &ctx)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GeneratedContent {
            social_posts,
            emails,
            slogans,
            ads,
        })
    }

    /// Replace a whole sub-collection with fresh items, ids reset to 1..n.
    pub fn refresh_section(
        &self,
        content: &mut GeneratedContent,
        section: ContentSection,
        info: &BusinessInfo,
    ) -> Result<()> {
        let ctx = Self::context(info);

        match section {
            ContentSection::SocialPosts => {
                content.social_posts = (1..=3u32)
                    .map(|id| {
                        Ok(SocialPost {
                            id,
                            text: self.render(&format!("social_refresh_{}", id), &ctx)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
            ContentSection::Emails => {
                content.emails = (1..=2u32)
                    .map(|id| {
                        Ok(EmailDraft {
                            id,
                            subject: self.render(&format!("email_refresh_{}_subject", id), &ctx)?,
                            body: self.render(&format!("email_refresh_{}_body", id), &ctx)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
            ContentSection::Slogans => {
                content.slogans = (1..=2u32)
                    .map(|id| {
                        Ok(Slogan {
                            id,
                            text: self.render(&format!("slogan_refresh_{}", id), &ctx)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
            ContentSection::Ads => {
                content.ads = (1..=2u32)
                    .map(|id| {
                        Ok(AdCopy {
                            id,
                            copy: self.render(&format!("ad_refresh_{}_copy", id), &ctx)?,
                            focus: self.render(&format!("ad_refresh_{}_focus", id), &ctx)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
        }

        Ok(())
    }

    /// Replace a single item with its "improved" variant, keeping the id.
    ///
    /// Returns false when no item with that id exists; the bundle is left
    /// untouched in that case.
    pub fn improve_item(
        &self,
        content: &mut GeneratedContent,
        section: ContentSection,
        id: u32,
        info: &BusinessInfo,
    ) -> Result<bool> {
        let ctx = Self::context(info);

        match section {
            ContentSection::SocialPosts => {
                match content.social_posts.iter_mut().find(|p| p.id == id) {
                    Some(post) => post.text = self.render("social_improved", &ctx)?,
                    None => return Ok(false),
                }
            }
            ContentSection::Emails => match content.emails.iter_mut().find(|e| e.id == id) {
                Some(email) => {
                    email.subject = self.render("email_improved_subject", &ctx)?;
                    email.body = self.render("email_improved_body", &ctx)?;
                }
                None => return Ok(false),
            },
            ContentSection::Slogans => match content.slogans.iter_mut().find(|s| s.id == id) {
                Some(slogan) => slogan.text = self.render("slogan_improved", &ctx)?,
                None => return Ok(false),
            },
            ContentSection::Ads => match content.ads.iter_mut().find(|a| a.id == id) {
                Some(ad) => {
                    ad.copy = self.render("ad_improved_copy", &ctx)?;
                    ad.focus = self.render("ad_improved_focus", &ctx)?;
                }
                None => return Ok(false),
            },
        }

        Ok(true)
    }
}
