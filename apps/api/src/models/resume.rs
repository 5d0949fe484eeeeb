use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The canonical structured resume shared by the parser, enhancer, renderers and store.
///
/// Every top-level field defaults when absent, so `{}` deserializes to an empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One job entry.
///
/// Keys are optional on the wire: the editor saves partially filled items, and the
/// renderers report a missing key instead of rejecting the request up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// One education entry.
///
/// `extra` keeps attributes outside the canonical shape (the parser files an
/// unclaimed line as `description` and blanks `duration` here too). The same
/// holds for `ExperienceItem::extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ResumeRecord {
    /// File stem used for exported documents: spaces become underscores.
    ///
    /// The stem is quoted in a `Content-Disposition` header, so quotes, backslashes
    /// and control characters are dropped.
    pub fn export_stem(&self) -> String {
        let name: String = self
            .name
            .chars()
            .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
            .map(|c| if c == ' ' { '_' } else { c })
            .collect();
        format!("{name}_resume")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_empty_record() {
        let record: ResumeRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_missing_item_keys_are_none() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "name": "Jane",
            "experience": [{ "role": "Engineer" }]
        }))
        .unwrap();
        assert_eq!(record.experience[0].company, None);
        assert_eq!(record.experience[0].role.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_education_extra_attributes_round_trip_flat() {
        let mut item = EducationItem {
            institution: Some("MIT".to_string()),
            degree: Some("BS".to_string()),
            ..Default::default()
        };
        item.extra
            .insert("description".to_string(), "Dean's list".to_string());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["description"], "Dean's list");
        assert!(value.get("year").is_none(), "absent keys are omitted");

        let back: EducationItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_experience_extra_attributes_serialize_flat() {
        let mut item = ExperienceItem {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        item.extra.insert("institution".to_string(), "MIT".to_string());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ "company": "Acme", "institution": "MIT" }));
    }

    #[test]
    fn test_export_stem_replaces_spaces() {
        let record = ResumeRecord {
            name: "Jane Q Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(record.export_stem(), "Jane_Q_Doe_resume");
    }

    #[test]
    fn test_export_stem_drops_header_unsafe_characters() {
        let record = ResumeRecord {
            name: "Jane \"JD\" Doe\\\n".to_string(),
            ..Default::default()
        };
        assert_eq!(record.export_stem(), "Jane_JD_Doe_resume");
    }
}
