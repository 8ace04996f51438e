use serde::{Deserialize, Serialize};

/// Client project submission form
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    pub email: String,
    pub title: String,
    pub description: String,
}

impl ProjectForm {
    /// True when every field carries a non-blank value
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.name)
            && !is_blank(&self.email)
            && !is_blank(&self.title)
            && !is_blank(&self.description)
    }
}

/// Admin job posting form
#[derive(Debug, Deserialize)]
pub struct PostingForm {
    pub title: String,
    pub description: String,
}

impl PostingForm {
    /// True when both fields carry a non-blank value
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.title) && !is_blank(&self.description)
    }
}

/// Admin project status update form
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub id: i64,
    pub status: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_form(name: &str, email: &str, title: &str, description: &str) -> ProjectForm {
        ProjectForm {
            name: name.to_string(),
            email: email.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    // Test completeness check on the project form
    #[test]
    fn test_project_form_completeness() {
        assert!(project_form("Ada", "ada@example.com", "Site", "A new site").is_complete());
        assert!(!project_form("", "ada@example.com", "Site", "A new site").is_complete());
        // Whitespace-only fields count as blank
        assert!(!project_form("Ada", "   ", "Site", "A new site").is_complete());
    }

    // Test completeness check on the posting form
    #[test]
    fn test_posting_form_completeness() {
        let complete = PostingForm {
            title: "Rust developer".to_string(),
            description: "Build a web app".to_string(),
        };
        assert!(complete.is_complete());

        let blank = PostingForm {
            title: "Rust developer".to_string(),
            description: "\n\t".to_string(),
        };
        assert!(!blank.is_complete());
    }
}
