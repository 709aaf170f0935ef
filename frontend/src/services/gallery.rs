//! Known-subject gallery loading.
//!
//! The list comes from `GET /classes`; any failure silently degrades to a
//! built-in set so the gallery always renders something.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::CLASSES_PATH;
use crate::types::{AppError, AppResult, Subject};

/// Response of the `/classes` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassesResponse {
    #[serde(default)]
    pub success: bool,
    pub classes: Option<Vec<String>>,
}

/// Built-in subjects used when the service cannot be reached.
pub fn fallback_subjects() -> Vec<Subject> {
    [
        ("keanu_reeves", "Keanu Reeves", "./images/keanu.jpg"),
        ("margot_robbie", "Margot Robbie", "./images/margot.jpg"),
        ("scarlett_johansson", "Scarlett Johansson", "./images/scarlett.jpg"),
        ("zendaya", "Zendaya", "./images/zendaya.jpg"),
        ("will_smith", "Will Smith", "./images/will.jpg"),
    ]
    .into_iter()
    .map(|(id, name, image_url)| Subject {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
    })
    .collect()
}

/// Subjects described by a well-formed success response.
pub fn subjects_from_response(response: ClassesResponse) -> Option<Vec<Subject>> {
    if !response.success {
        return None;
    }
    let classes = response.classes?;
    Some(classes.iter().map(|name| Subject::from_name(name)).collect())
}

/// Fetch the subject list from the service.
pub async fn fetch_subjects(base_url: &str) -> AppResult<Vec<Subject>> {
    let url = format!("{}{}", base_url, CLASSES_PATH);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Service(format!("Server error ({})", response.status())));
    }

    let body = response
        .json::<ClassesResponse>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)))?;

    subjects_from_response(body)
        .ok_or_else(|| AppError::Service("Unexpected /classes response".to_string()))
}

/// Pick the fetched list, or the built-in one on any error.
pub fn resolve_subjects(fetched: AppResult<Vec<Subject>>) -> Vec<Subject> {
    match fetched {
        Ok(subjects) => {
            log::info!("👥 Loaded {} subjects from the classifier", subjects.len());
            subjects
        }
        Err(e) => {
            log::info!("Using default subjects ({})", e);
            fallback_subjects()
        }
    }
}

/// Load the gallery. Never fails.
pub async fn load_subjects(base_url: &str) -> Vec<Subject> {
    resolve_subjects(fetch_subjects(base_url).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_list_derives_subjects() {
        let json = r#"{"success": true, "classes": ["Jane Doe"]}"#;
        let response: ClassesResponse = serde_json::from_str(json).unwrap();

        let subjects = resolve_subjects(
            subjects_from_response(response).ok_or(AppError::Service("bad".into())),
        );
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].id, "jane_doe");
        assert_eq!(subjects[0].name, "Jane Doe");
        assert_eq!(subjects[0].image_url, "./images/jane.jpg");
    }

    #[test]
    fn unsuccessful_or_incomplete_bodies_are_rejected() {
        for json in [
            r#"{"success": false, "classes": ["Jane Doe"]}"#,
            r#"{"success": true}"#,
            r#"{"classes": ["Jane Doe"]}"#,
        ] {
            let response: ClassesResponse = serde_json::from_str(json).unwrap();
            assert!(subjects_from_response(response).is_none(), "{}", json);
        }
    }

    #[test]
    fn failed_fetch_falls_back_to_builtin_list() {
        let subjects = resolve_subjects(Err(AppError::Network("connection refused".into())));
        assert_eq!(subjects, fallback_subjects());
        assert_eq!(subjects.len(), 5);
        assert_eq!(subjects[4].id, "will_smith");
        assert_eq!(subjects[4].image_url, "./images/will.jpg");
    }

    #[test]
    fn fallback_matches_derivation_rules() {
        for subject in fallback_subjects() {
            assert_eq!(Subject::from_name(&subject.name), subject);
        }
    }
}
