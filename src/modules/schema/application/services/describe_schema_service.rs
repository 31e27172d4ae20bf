use crate::schema::application::domain::{
    errors::UnknownTypeError, record_type::RecordType, registry,
};
use crate::schema::application::ports::incoming::use_cases::{
    DescribeSchemaUseCase, RecordTypeDescription, RecordTypeSummary,
};

#[derive(Debug, Clone, Default)]
pub struct DescribeSchemaService;

impl DescribeSchemaService {
    pub fn new() -> Self {
        Self
    }
}

impl DescribeSchemaUseCase for DescribeSchemaService {
    fn list(&self) -> Vec<RecordTypeSummary> {
        RecordType::ALL
            .into_iter()
            .map(|record_type| RecordTypeSummary {
                record_type,
                collection: record_type.collection_name(),
            })
            .collect()
    }

    fn describe(&self, type_name: &str) -> Result<RecordTypeDescription, UnknownTypeError> {
        let record_type = type_name.parse::<RecordType>()?;

        Ok(RecordTypeDescription {
            record_type,
            collection: record_type.collection_name(),
            fields: record_type.fields(),
        })
    }

    fn collection_name(&self, type_name: &str) -> Result<&'static str, UnknownTypeError> {
        registry::collection_name(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_returns_types_in_declaration_order() {
        let summaries = DescribeSchemaService::new().list();

        let names: Vec<&str> = summaries.iter().map(|s| s.collection).collect();
        assert_eq!(
            names,
            vec!["profile", "project", "experience", "skill", "message", "user", "product"]
        );
    }

    #[test]
    fn test_describe_skill() {
        let description = DescribeSchemaService::new().describe("Skill").unwrap();

        assert_eq!(description.record_type, RecordType::Skill);
        assert_eq!(description.collection, "skill");

        let names: Vec<&str> = description.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "level", "group"]);
        assert!(description.fields[0].is_required());
        assert!(!description.fields[1].is_required());
    }

    #[test]
    fn test_describe_unknown_type() {
        let err = DescribeSchemaService::new().describe("BlogPost").unwrap_err();
        assert_eq!(err, UnknownTypeError("BlogPost".to_string()));
    }

    #[test]
    fn test_collection_name() {
        let service = DescribeSchemaService::new();

        assert_eq!(service.collection_name("Project"), Ok("project"));
        assert!(service.collection_name("Unknown").is_err());
    }
}
