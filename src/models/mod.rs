// Data models matching the dashboard frontend types

use serde::{Deserialize, Serialize};

/// One of the four dashboard modules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Input,
    Generation,
    Templates,
    Analytics,
}

impl Module {
    pub const ALL: [Module; 4] = [
        Module::Input,
        Module::Generation,
        Module::Templates,
        Module::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Input => "input",
            Module::Generation => "generation",
            Module::Templates => "templates",
            Module::Analytics => "analytics",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "input" => Ok(Module::Input),
            "generation" => Ok(Module::Generation),
            "templates" => Ok(Module::Templates),
            "analytics" => Ok(Module::Analytics),
            _ => Err(format!(
                "Invalid module: '{}'. Expected 'input', 'generation', 'templates', or 'analytics'",
                s
            )),
        }
    }
}

/// Campaign objectives offered by the input form's select.
///
/// `BusinessInfo.objective` stays a plain string (the form allows "Otro"
/// plus free text round-trips), this enum only enumerates the options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CampaignObjective {
    Lanzamiento,
    Promocion,
    Fidelizacion,
    Posicionamiento,
    Otro,
}

impl CampaignObjective {
    pub const ALL: [CampaignObjective; 5] = [
        CampaignObjective::Lanzamiento,
        CampaignObjective::Promocion,
        CampaignObjective::Fidelizacion,
        CampaignObjective::Posicionamiento,
        CampaignObjective::Otro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignObjective::Lanzamiento => "Lanzamiento",
            CampaignObjective::Promocion => "Promoción",
            CampaignObjective::Fidelizacion => "Fidelización",
            CampaignObjective::Posicionamiento => "Posicionamiento",
            CampaignObjective::Otro => "Otro",
        }
    }
}

impl std::fmt::Display for CampaignObjective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user-entered campaign brief driving content generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub industry: String,
    pub objective: String,
    /// Comma-separated keywords, optional.
    pub keywords: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            industry: String::new(),
            objective: CampaignObjective::Lanzamiento.as_str().to_string(),
            keywords: String::new(),
        }
    }
}

/// Partial update for the business info form; absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfoUpdate {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub objective: Option<String>,
    pub keywords: Option<String>,
}

/// One of the four sub-collections of a generated bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ContentSection {
    SocialPosts,
    Emails,
    Slogans,
    Ads,
}

impl ContentSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSection::SocialPosts => "socialPosts",
            ContentSection::Emails => "emails",
            ContentSection::Slogans => "slogans",
            ContentSection::Ads => "ads",
        }
    }
}

impl std::fmt::Display for ContentSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "").as_str() {
            "socialposts" => Ok(ContentSection::SocialPosts),
            "emails" => Ok(ContentSection::Emails),
            "slogans" => Ok(ContentSection::Slogans),
            "ads" => Ok(ContentSection::Ads),
            _ => Err(format!(
                "Invalid content section: '{}'. Expected 'socialPosts', 'emails', 'slogans', or 'ads'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraft {
    pub id: u32,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Slogan {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdCopy {
    pub id: u32,
    pub copy: String,
    pub focus: String,
}

/// The four-category collection of generated marketing copy.
///
/// Ids are unique and 1-based per sub-collection; item-level regeneration
/// keeps the id, section-level regeneration resets ids to 1..n.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub social_posts: Vec<SocialPost>,
    pub emails: Vec<EmailDraft>,
    pub slogans: Vec<Slogan>,
    pub ads: Vec<AdCopy>,
}

/// Minimal view of the collaborator-owned user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

/// Session snapshot exposed to the dashboard shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Subscription snapshot exposed to the dashboard shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnapshot {
    pub is_subscribed: bool,
    pub is_loading: bool,
}
