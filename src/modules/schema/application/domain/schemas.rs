//! Field declarations for every record type.

use super::field::{DefaultValue, FieldKind, FieldSpec};

pub const SKILL_LEVEL_MIN: i64 = 1;
pub const SKILL_LEVEL_MAX: i64 = 100;

pub const PROFILE: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text, "Full name"),
    FieldSpec::required("title", FieldKind::Text, "Professional title"),
    FieldSpec::required("bio", FieldKind::Text, "Short biography"),
    FieldSpec::optional("location", FieldKind::Text, "Location"),
    FieldSpec::optional("avatar_url", FieldKind::Url, "Profile image URL"),
    FieldSpec::optional("email", FieldKind::Email, "Contact email"),
    FieldSpec::defaulted(
        "socials",
        FieldKind::TextMap,
        DefaultValue::EmptyMap,
        "Map of social links",
    )
    .null_as_default(),
];

pub const PROJECT: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text, "Project name"),
    FieldSpec::required("description", FieldKind::Text, "Short description"),
    FieldSpec::defaulted(
        "tags",
        FieldKind::TextList,
        DefaultValue::EmptyList,
        "Tech stack tags",
    ),
    FieldSpec::optional("image_url", FieldKind::Url, "Cover image URL"),
    FieldSpec::optional("demo_url", FieldKind::Url, "Live demo URL"),
    FieldSpec::optional("repo_url", FieldKind::Url, "Source code URL"),
    FieldSpec::defaulted(
        "featured",
        FieldKind::Boolean,
        DefaultValue::Bool(true),
        "Showcase on homepage",
    ),
];

pub const EXPERIENCE: &[FieldSpec] = &[
    FieldSpec::required("company", FieldKind::Text, "Company or institution"),
    FieldSpec::required("role", FieldKind::Text, "Role or degree"),
    FieldSpec::required("start", FieldKind::Text, "Start date (e.g., Jan 2022)"),
    FieldSpec::required("end", FieldKind::Text, "End date or 'Present'"),
    FieldSpec::optional("summary", FieldKind::Text, "What you did/learned"),
];

pub const SKILL: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text, "Skill name"),
    FieldSpec::optional(
        "level",
        FieldKind::Integer {
            min: Some(SKILL_LEVEL_MIN),
            max: Some(SKILL_LEVEL_MAX),
        },
        "Proficiency from 1-100",
    ),
    FieldSpec::optional("group", FieldKind::Text, "Category e.g. Frontend, Backend"),
];

pub const MESSAGE: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text, "Sender name"),
    FieldSpec::required("email", FieldKind::Email, "Sender email"),
    FieldSpec::required("subject", FieldKind::Text, "Message subject"),
    FieldSpec::required("body", FieldKind::Text, "Message body"),
];

pub const USER: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text, "Full name"),
    // no format check
    FieldSpec::required("email", FieldKind::Text, "Email address"),
    FieldSpec::required("address", FieldKind::Text, "Postal address"),
    FieldSpec::optional("age", FieldKind::INTEGER, "Age in years"),
    FieldSpec::defaulted(
        "is_active",
        FieldKind::Boolean,
        DefaultValue::Bool(true),
        "Whether the account is active",
    ),
];

pub const PRODUCT: &[FieldSpec] = &[
    FieldSpec::required("title", FieldKind::Text, "Product title"),
    FieldSpec::optional("description", FieldKind::Text, "Product description"),
    FieldSpec::required("price", FieldKind::Float, "Unit price"),
    FieldSpec::required("category", FieldKind::Text, "Product category"),
    FieldSpec::defaulted(
        "in_stock",
        FieldKind::Boolean,
        DefaultValue::Bool(true),
        "Whether the product is in stock",
    ),
];
