use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use super::record_type::RecordType;

/// A typed record type the registry can produce.
pub trait RecordSchema: Serialize + DeserializeOwned + Into<Record> {
    const RECORD_TYPE: RecordType;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: Option<String>,
    #[schema(value_type = Option<String>, format = Uri)]
    pub avatar_url: Option<Url>,
    #[schema(format = Email)]
    pub email: Option<String>,
    pub socials: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    #[schema(value_type = Option<String>, format = Uri)]
    pub image_url: Option<Url>,
    #[schema(value_type = Option<String>, format = Uri)]
    pub demo_url: Option<Url>,
    #[schema(value_type = Option<String>, format = Uri)]
    pub repo_url: Option<Url>,
    pub featured: bool,
}

/// Work experience or education timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start: String,
    /// Free-form label, `Present` for ongoing entries.
    pub end: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 1 to 100 inclusive.
    pub level: Option<u8>,
    pub group: Option<String>,
}

/// Contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub name: String,
    #[schema(format = Email)]
    pub email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: Option<i64>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Any validated record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Record {
    Profile(Profile),
    Project(Project),
    Experience(Experience),
    Skill(Skill),
    Message(Message),
    User(User),
    Product(Product),
}

impl Record {
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Profile(_) => RecordType::Profile,
            Record::Project(_) => RecordType::Project,
            Record::Experience(_) => RecordType::Experience,
            Record::Skill(_) => RecordType::Skill,
            Record::Message(_) => RecordType::Message,
            Record::User(_) => RecordType::User,
            Record::Product(_) => RecordType::Product,
        }
    }

    pub fn collection_name(&self) -> &'static str {
        self.record_type().collection_name()
    }
}

macro_rules! record_schema {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl RecordSchema for $ty {
                const RECORD_TYPE: RecordType = RecordType::$ty;
            }

            impl From<$ty> for Record {
                fn from(record: $ty) -> Self {
                    Record::$ty(record)
                }
            }
        )+
    };
}

record_schema!(Profile, Project, Experience, Skill, Message, User, Product);
