use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::UnknownTypeError;
use super::field::FieldSpec;
use super::schemas;

/// Every record type the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RecordType {
    Profile,
    Project,
    Experience,
    Skill,
    Message,
    /// Legacy example schema, not used by the portfolio.
    User,
    /// Legacy example schema, not used by the portfolio.
    Product,
}

impl RecordType {
    pub const ALL: [RecordType; 7] = [
        RecordType::Profile,
        RecordType::Project,
        RecordType::Experience,
        RecordType::Skill,
        RecordType::Message,
        RecordType::User,
        RecordType::Product,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordType::Profile => "Profile",
            RecordType::Project => "Project",
            RecordType::Experience => "Experience",
            RecordType::Skill => "Skill",
            RecordType::Message => "Message",
            RecordType::User => "User",
            RecordType::Product => "Product",
        }
    }

    /// Storage collection the persistence layer writes this type to.
    ///
    /// The rule is the lowercased type name. An irregular name is declared
    /// by changing its arm here; none is declared today.
    pub fn collection_name(self) -> &'static str {
        match self {
            RecordType::Profile => "profile",
            RecordType::Project => "project",
            RecordType::Experience => "experience",
            RecordType::Skill => "skill",
            RecordType::Message => "message",
            RecordType::User => "user",
            RecordType::Product => "product",
        }
    }

    /// Declarative field list, in declaration order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            RecordType::Profile => schemas::PROFILE,
            RecordType::Project => schemas::PROJECT,
            RecordType::Experience => schemas::EXPERIENCE,
            RecordType::Skill => schemas::SKILL,
            RecordType::Message => schemas::MESSAGE,
            RecordType::User => schemas::USER,
            RecordType::Product => schemas::PRODUCT,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RecordType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|record_type| record_type.name() == s)
            .ok_or_else(|| UnknownTypeError(s.to_string()))
    }
}
