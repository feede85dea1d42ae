use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::LeadError;

pub type QuizAnswers = BTreeMap<String, String>;

pub const LEAD_SOURCE: &str = "quiz";
pub const LEAD_INTERESTS: [&str; 1] = ["coverage_fit"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// Body of `POST /api/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub source: String,
    pub interests: Vec<String>,
    pub quiz_answers: QuizAnswers,
}

impl LeadSubmission {
    pub fn from_capture(form: &ContactForm, answers: &QuizAnswers) -> Result<Self, LeadError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(LeadError::MissingField("name"));
        }
        let email = form.email.trim();
        if email.is_empty() {
            return Err(LeadError::MissingField("email"));
        }
        let phone = Some(form.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone,
            source: LEAD_SOURCE.to_string(),
            interests: LEAD_INTERESTS.iter().map(|i| i.to_string()).collect(),
            quiz_answers: answers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn jane(phone: &str) -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn blank_phone_is_left_out_of_the_body() {
        let mut answers = QuizAnswers::new();
        answers.insert("timeline".to_string(), "immediately".to_string());

        let lead = LeadSubmission::from_capture(&jane(""), &answers).unwrap();
        assert_eq!(lead.phone, None);
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "source": "quiz",
                "interests": ["coverage_fit"],
                "quizAnswers": { "timeline": "immediately" },
            })
        );
    }

    #[test]
    fn fields_are_trimmed() {
        let form = ContactForm {
            name: "  Jane Doe ".to_string(),
            email: " jane@example.com".to_string(),
            phone: " 555-0100 ".to_string(),
        };
        let lead = LeadSubmission::from_capture(&form, &QuizAnswers::new()).unwrap();
        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn name_and_email_are_required() {
        let mut form = jane("");
        form.name = "   ".to_string();
        assert!(matches!(
            LeadSubmission::from_capture(&form, &QuizAnswers::new()),
            Err(LeadError::MissingField("name"))
        ));

        let mut form = jane("");
        form.email.clear();
        assert!(matches!(
            LeadSubmission::from_capture(&form, &QuizAnswers::new()),
            Err(LeadError::MissingField("email"))
        ));
    }
}
