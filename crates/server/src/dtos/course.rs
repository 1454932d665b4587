use crate::dtos::validation::{CheckFields, FieldError, field_errors, sort_field_errors};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Payload accepted when creating or editing a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CourseRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "The Title field is required."),
        length(
            min = 3,
            max = 60,
            message = "The field Title must be a string with a minimum length of 3 and a maximum length of 60."
        )
    )]
    #[schema(min_length = 3, max_length = 60)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "The Topic field is required."),
        length(
            max = 60,
            message = "The field Topic must be a string with a maximum length of 60."
        )
    )]
    #[schema(max_length = 60)]
    pub topic: Option<String>,

    /// Raw `YYYY-MM-DD` value, parsed by `CourseRequest::release_date()`
    #[serde(default, deserialize_with = "raw_date")]
    #[validate(required(message = "The Release Date field is required."))]
    #[schema(value_type = String, format = Date)]
    pub release_date: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "The Author field is required."),
        length(
            max = 60,
            message = "The field Author must be a string with a maximum length of 60."
        )
    )]
    #[schema(max_length = 60)]
    pub author: Option<String>,
}

impl CourseRequest {
    /// The release date, if present and a valid calendar date
    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), RELEASE_DATE_FORMAT).ok())
    }
}

impl CheckFields for CourseRequest {
    /// Runs every field rule, collecting all failures
    fn check(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_errors(&errors),
        };

        if let Some(raw) = &self.release_date
            && self.release_date().is_none()
        {
            errors.push(FieldError {
                field: "release_date".to_string(),
                code: "date".to_string(),
                message: format!("The value '{raw}' is not valid for Release Date."),
            });
        }

        if errors.is_empty() {
            return Ok(());
        }

        sort_field_errors(&mut errors);
        Err(errors)
    }
}

/// Course as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseViewModel {
    pub id: i32,
    pub title: String,
    pub topic: String,
    pub release_date: NaiveDate,
    pub author: Option<String>,
}

/// Treats empty and whitespace-only strings as missing values
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Accepts any JSON value for a date so a bad one becomes a field error instead of a parse failure
fn raw_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod test {
    use super::CourseRequest;
    use crate::dtos::validation::CheckFields;
    use chrono::NaiveDate;
    use serde_json::json;

    fn request(title: &str, topic: &str, author: &str) -> CourseRequest {
        CourseRequest {
            title: Some(title.to_string()),
            topic: Some(topic.to_string()),
            release_date: Some("2023-12-13".to_string()),
            author: Some(author.to_string()),
        }
    }

    fn failing_fields(request: &CourseRequest) -> Vec<String> {
        request
            .check()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn test_valid_request() {
        assert!(request("ASP.NET Core MVC", ".NET Programming", "vnLab").check().is_ok());
    }

    #[test]
    fn test_title_length_boundaries() {
        assert_eq!(failing_fields(&request("ab", "Topic", "Author")), vec!["title"]);
        assert!(request("abc", "Topic", "Author").check().is_ok());
        assert!(request(&"a".repeat(60), "Topic", "Author").check().is_ok());
        assert_eq!(
            failing_fields(&request(&"a".repeat(61), "Topic", "Author")),
            vec!["title"]
        );
    }

    #[test]
    fn test_topic_and_author_max_length() {
        assert!(request("Title", &"t".repeat(60), &"a".repeat(60)).check().is_ok());
        assert_eq!(
            failing_fields(&request("Title", &"t".repeat(61), &"a".repeat(61))),
            vec!["author", "topic"]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 60 two-byte characters
        assert!(request(&"é".repeat(60), "Topic", "Author").check().is_ok());
    }

    #[test]
    fn test_missing_fields_are_required() {
        let request = CourseRequest {
            title: None,
            topic: None,
            release_date: Some("2023-12-13".to_string()),
            author: None,
        };

        let errors = request.check().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.code == "required"));
        assert_eq!(errors[0].field, "author");
        assert_eq!(errors[0].message, "The Author field is required.");
    }

    #[test]
    fn test_length_error_message() {
        let errors = request("ab", "Topic", "Author").check().unwrap_err();

        assert_eq!(errors[0].code, "length");
        assert_eq!(
            errors[0].message,
            "The field Title must be a string with a minimum length of 3 and a maximum length of 60."
        );
    }

    #[test]
    fn test_blank_strings_deserialize_as_missing() {
        let request: CourseRequest = serde_json::from_value(json!({
            "title": "",
            "topic": "   ",
            "release_date": "2023-12-13",
        }))
        .unwrap();

        assert_eq!(request.title, None);
        assert_eq!(request.topic, None);
        assert_eq!(request.author, None);
        assert_eq!(request.check().unwrap_err().len(), 3);
    }

    #[test]
    fn test_release_date_parsing() {
        let valid = request("Title", "Topic", "Author");
        assert_eq!(valid.release_date(), NaiveDate::from_ymd_opt(2023, 12, 13));

        let invalid = CourseRequest {
            release_date: Some("2024-13-40".to_string()),
            ..valid
        };
        assert_eq!(invalid.release_date(), None);

        let errors = invalid.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "release_date");
        assert_eq!(errors[0].code, "date");
        assert_eq!(
            errors[0].message,
            "The value '2024-13-40' is not valid for Release Date."
        );
    }

    #[test]
    fn test_missing_release_date_is_required() {
        let request = CourseRequest {
            release_date: None,
            ..request("Title", "Topic", "Author")
        };

        let errors = request.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "release_date");
        assert_eq!(errors[0].code, "required");
        assert_eq!(errors[0].message, "The Release Date field is required.");
    }

    #[test]
    fn test_bad_release_date_values_still_deserialize() {
        for value in [json!(null), json!(""), json!("2024-13-40"), json!(20240101)] {
            let request: CourseRequest = serde_json::from_value(json!({
                "title": "ab",
                "topic": "Topic",
                "author": "Author",
                "release_date": value,
            }))
            .unwrap();

            let fields: Vec<String> = request
                .check()
                .unwrap_err()
                .into_iter()
                .map(|e| e.field)
                .collect();
            assert_eq!(fields, vec!["release_date", "title"]);
        }

        let missing: CourseRequest =
            serde_json::from_value(json!({ "title": "Title", "topic": "Topic", "author": "A" }))
                .unwrap();
        assert_eq!(missing.release_date, None);
    }
}
