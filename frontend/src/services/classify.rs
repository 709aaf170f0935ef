//! Classification requests to the face classifier service.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::File;

use crate::config::{CLASSIFY_PATH, IMAGE_FIELD, MSG_NETWORK, MSG_NO_FACES, MSG_PROCESS_FAILED};
use crate::services::image::read_as_data_url;
use crate::types::{AppError, AppResult, ClassificationResult, FaceReport, TopMatch};

/// Response of the `/classify_image` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub faces_detected: u32,
    pub message: Option<String>,
    pub results: Option<Vec<FacePrediction>>,
    pub error: Option<String>,
}

/// Prediction for one face, as sent by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct FacePrediction {
    pub predicted_class: String,
    pub confidence: f64,
    pub top_3: Vec<MatchProbability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchProbability {
    pub name: String,
    pub probability: f64,
}

/// Form body carrying the data URL in the `image_data` field.
pub fn form_body(data_url: &str) -> String {
    format!("{}={}", IMAGE_FIELD, urlencoding::encode(data_url))
}

/// Turn a parsed response into a report or a user-facing error.
pub fn interpret_response(http_ok: bool, body: ClassifyResponse) -> AppResult<FaceReport> {
    if !(http_ok && body.success) {
        let message = body.error.unwrap_or_else(|| MSG_PROCESS_FAILED.to_string());
        return Err(AppError::Service(message));
    }

    if body.faces_detected == 0 {
        let message = body.message.unwrap_or_else(|| MSG_NO_FACES.to_string());
        return Err(AppError::Service(message));
    }

    let predictions = body
        .results
        .ok_or_else(|| AppError::Network(MSG_NETWORK.to_string()))?;

    let results = predictions
        .into_iter()
        .enumerate()
        .map(|(idx, prediction)| ClassificationResult {
            face_index: idx + 1,
            predicted_name: prediction.predicted_class,
            confidence_percent: prediction.confidence,
            top_matches: prediction
                .top_3
                .into_iter()
                .map(|m| TopMatch {
                    name: m.name,
                    probability_percent: m.probability,
                })
                .collect(),
        })
        .collect();

    Ok(FaceReport {
        faces_detected: body.faces_detected,
        results,
    })
}

/// Upload an image and collect the per-face predictions.
pub async fn classify_image(file: &File, base_url: &str) -> AppResult<FaceReport> {
    let data_url = read_as_data_url(file).await?;
    let url = format!("{}{}", base_url, CLASSIFY_PATH);

    let request = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(&data_url))
        .map_err(|e| {
            log::error!("Failed to build request: {}", e);
            AppError::Network(MSG_NETWORK.to_string())
        })?;

    let response = request.send().await.map_err(|e| {
        log::error!("Classification error: {}", e);
        AppError::Network(MSG_NETWORK.to_string())
    })?;

    // The body is parsed whatever the status; error responses carry `error`.
    let http_ok = response.ok();
    let body = response.json::<ClassifyResponse>().await.map_err(|e| {
        log::error!("Failed to parse response ({}): {}", response.status(), e);
        AppError::Network(MSG_NETWORK.to_string())
    })?;

    interpret_response(http_ok, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ClassifyResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn two_faces_render_in_order() {
        let body = parse(
            r#"{
                "success": true,
                "faces_detected": 2,
                "results": [
                    {
                        "predicted_class": "A",
                        "confidence": 90,
                        "top_3": [
                            {"name": "A", "probability": 90},
                            {"name": "B", "probability": 7},
                            {"name": "C", "probability": 3}
                        ]
                    },
                    {
                        "predicted_class": "B",
                        "confidence": 61.5,
                        "top_3": [
                            {"name": "B", "probability": 61.5},
                            {"name": "A", "probability": 30},
                            {"name": "C", "probability": 8.5}
                        ]
                    }
                ]
            }"#,
        );

        let report = interpret_response(true, body).unwrap();
        assert_eq!(report.faces_detected, 2);
        assert_eq!(report.results.len(), 2);

        let first = &report.results[0];
        assert_eq!(first.face_index, 1);
        assert_eq!(first.predicted_name, "A");
        assert_eq!(first.tier().as_str(), "high");
        assert_eq!(first.top_matches.len(), 3);
        assert_eq!(first.top_matches[1].name, "B");
        assert_eq!(first.top_matches[1].tier().as_str(), "low");

        let second = &report.results[1];
        assert_eq!(second.face_index, 2);
        assert_eq!(second.tier().as_str(), "medium");
        assert_eq!(second.top_matches[1].tier().as_str(), "medium");
    }

    #[test]
    fn zero_faces_uses_default_message() {
        let err = interpret_response(true, parse(r#"{"success": true, "faces_detected": 0}"#)).unwrap_err();
        assert_eq!(err, AppError::Service(MSG_NO_FACES.to_string()));
    }

    #[test]
    fn zero_faces_prefers_server_message() {
        let body = parse(r#"{"success": true, "faces_detected": 0, "message": "No face found"}"#);
        assert_eq!(interpret_response(true, body).unwrap_err().message(), "No face found");
    }

    #[test]
    fn service_error_text_is_shown() {
        let body = parse(r#"{"success": false, "error": "bad image"}"#);
        assert_eq!(interpret_response(true, body).unwrap_err().message(), "bad image");
    }

    #[test]
    fn failed_status_without_error_text() {
        let body = parse(r#"{"success": true, "faces_detected": 1, "results": []}"#);
        assert_eq!(interpret_response(false, body).unwrap_err().message(), MSG_PROCESS_FAILED);

        let body = parse(r#"{"success": false}"#);
        assert_eq!(interpret_response(true, body).unwrap_err().message(), MSG_PROCESS_FAILED);
    }

    #[test]
    fn faces_without_results_is_a_network_error() {
        let body = parse(r#"{"success": true, "faces_detected": 1}"#);
        assert_eq!(
            interpret_response(true, body).unwrap_err(),
            AppError::Network(MSG_NETWORK.to_string())
        );
    }

    #[test]
    fn form_body_percent_encodes_data_url() {
        assert_eq!(
            form_body("data:image/png;base64,ab+/="),
            "image_data=data%3Aimage%2Fpng%3Bbase64%2Cab%2B%2F%3D"
        );
    }
}
