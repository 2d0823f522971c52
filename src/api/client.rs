use reqwest::{
    multipart::{
        Form,
        Part,
    },
    Client,
    StatusCode,
};
use serde_json::Value;

use crate::core::{
    config::ApiConfig,
    errors::PredictError,
    models::{
        BinaryPrediction,
        FlatPrediction,
        ModelKey,
        UploadFile,
    },
    sanitize::{
        parse_binary,
        parse_flat,
    },
    validation::validate_file,
};

const REQUESTED_WITH: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Client for the two prediction endpoints. One reqwest client is reused for
/// every submission; the configured timeout is armed per request.
///
/// The timeout is the only cancellation source. A caller that walks away
/// mid-request simply drops the eventual result; there is no teardown token.
pub struct PredictionClient {
    http: Client,
    config: ApiConfig,
}

impl PredictionClient {
    pub fn new(config: ApiConfig) -> Result<Self, PredictError> {
        let http = Client::builder()
            .build()
            .map_err(|e| PredictError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POSTs to `{base}base/` and returns the sanitized flat distribution.
    /// The file is re-validated here even though the form already did; the
    /// model key needs no re-check since `ModelKey` is valid by construction.
    pub async fn predict_base(
        &self,
        file: &UploadFile,
        model_key: ModelKey,
    ) -> Result<FlatPrediction, PredictError> {
        validate_file(Some(file), &self.config)?;

        let form = self.prediction_form(file, model_key)?;
        let body = self.post_multipart("base/", form).await?;

        parse_flat(body)
    }

    /// POSTs to `{base}binary/` with the extra threshold field and returns
    /// the sanitized two-group distribution.
    pub async fn predict_binary(
        &self,
        file: &UploadFile,
        model_key: ModelKey,
        threshold: &str,
    ) -> Result<BinaryPrediction, PredictError> {
        validate_file(Some(file), &self.config)?;

        let form = self.prediction_form(file, model_key)?.text("threshold", threshold.to_string());
        let body = self.post_multipart("binary/", form).await?;

        parse_binary(body)
    }

    fn prediction_form(&self, file: &UploadFile, model_key: ModelKey) -> Result<Form, PredictError> {
        let part = Part::bytes(file.contents.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| PredictError::Custom(format!("Invalid MIME type: {e}")))?;

        Ok(Form::new().part("file", part).text("model_key", model_key.as_str()))
    }

    async fn post_multipart(&self, endpoint: &str, form: Form) -> Result<Value, PredictError> {
        let url = self.config.endpoint(endpoint);
        let request = self
            .http
            .post(&url)
            .header(REQUESTED_WITH, REQUESTED_WITH_VALUE)
            .multipart(form)
            .send();

        let response = match tokio::time::timeout(self.config.timeout, request).await {
            Err(_) => return Err(PredictError::Timeout),
            Ok(Err(e)) if e.is_timeout() => return Err(PredictError::Timeout),
            Ok(Err(e)) => {
                eprintln!("Request to {} failed: {}", url, e);
                return Err(PredictError::Network);
            }
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        if !status.is_success() {
            eprintln!("Request to {} rejected: HTTP {}", url, status);
            return Err(classify_status(status));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                PredictError::Timeout
            } else {
                PredictError::InvalidResponseShape
            }
        })
    }
}

fn classify_status(status: StatusCode) -> PredictError {
    if status.is_client_error() {
        PredictError::InvalidRequest
    } else if status.is_server_error() {
        PredictError::ServerError
    } else {
        PredictError::Network
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api::test_server::{
        json_response,
        serve_once,
        serve_stalled,
        spawn_listener,
    };

    fn sample_file() -> UploadFile {
        UploadFile {
            name: "sample.txt".to_string(),
            content_type: "text/plain".to_string(),
            contents: b"It was a dark and stormy night.".to_vec(),
        }
    }

    fn local_config(port: u16, timeout_ms: u64) -> ApiConfig {
        ApiConfig {
            base_url: format!("http://127.0.0.1:{}/", port),
            timeout: Duration::from_millis(timeout_ms),
            ..ApiConfig::default()
        }
    }

    #[tokio::test]
    async fn success_body_is_parsed_and_sanitized() {
        let (listener, port) = spawn_listener();
        serve_once(
            listener,
            json_response(
                "200 OK",
                r#"{"top_k_predictions":[{"label":"<b>1920</b>","probability":1.7}]}"#,
            ),
        );

        let client = PredictionClient::new(local_config(port, 5_000)).unwrap();
        let result = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap();

        assert_eq!(result.top_k_predictions.len(), 1);
        assert_eq!(result.top_k_predictions[0].label, "&lt;b&gt;1920&lt;/b&gt;");
        assert_eq!(result.top_k_predictions[0].probability, 1.0);
    }

    #[tokio::test]
    async fn binary_request_round_trips() {
        let (listener, port) = spawn_listener();
        serve_once(
            listener,
            json_response(
                "200 OK",
                r#"{"prediction":"older","top_k":{
                    "older":{"total_probability":0.6,"items":[{"label":"1780","probability":0.6}]},
                    "equal_or_younger":{"total_probability":0.4,"items":[{"label":"1810","probability":0.4}]}}}"#,
            ),
        );

        let client = PredictionClient::new(local_config(port, 5_000)).unwrap();
        let result =
            client.predict_binary(&sample_file(), ModelKey::Decade, "1800").await.unwrap();

        assert_eq!(result.prediction, "older");
        assert_eq!(result.top_k.older.total_probability, 0.6);
        assert_eq!(result.top_k.equal_or_younger.items.len(), 1);
    }

    #[tokio::test]
    async fn stalled_server_yields_exactly_a_timeout() {
        let (listener, port) = spawn_listener();
        serve_stalled(listener);

        let client = PredictionClient::new(local_config(port, 300)).unwrap();
        let error = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap_err();

        assert!(matches!(error, PredictError::Timeout));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let (listener, port) = spawn_listener();
        drop(listener);

        let client = PredictionClient::new(local_config(port, 1_000)).unwrap();
        let error = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap_err();

        assert!(matches!(error, PredictError::Network));
    }

    #[tokio::test]
    async fn client_errors_map_to_invalid_request() {
        let (listener, port) = spawn_listener();
        serve_once(listener, json_response("404 Not Found", r#"{"detail":"missing"}"#));

        let client = PredictionClient::new(local_config(port, 5_000)).unwrap();
        let error = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap_err();

        assert!(matches!(error, PredictError::InvalidRequest));
    }

    #[tokio::test]
    async fn server_errors_map_to_server_error() {
        let (listener, port) = spawn_listener();
        serve_once(listener, json_response("500 Internal Server Error", "{}"));

        let client = PredictionClient::new(local_config(port, 5_000)).unwrap();
        let error = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap_err();

        assert!(matches!(error, PredictError::ServerError));
    }

    #[tokio::test]
    async fn malformed_success_body_is_an_invalid_shape() {
        let (listener, port) = spawn_listener();
        serve_once(listener, json_response("200 OK", r#"{"top_k_predictions":"not-an-array"}"#));

        let client = PredictionClient::new(local_config(port, 5_000)).unwrap();
        let error = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap_err();

        assert!(matches!(error, PredictError::InvalidResponseShape));
    }

    #[tokio::test]
    async fn oversized_file_fails_before_any_network_activity() {
        // Nothing is listening; validation must reject first.
        let (listener, port) = spawn_listener();
        drop(listener);

        let config = ApiConfig { max_file_size: 8, ..local_config(port, 5_000) };
        let client = PredictionClient::new(config).unwrap();
        let error = client.predict_base(&sample_file(), ModelKey::Decade).await.unwrap_err();

        assert!(matches!(error, PredictError::FileTooLarge { .. }));
    }

    #[test]
    fn status_classification_covers_the_taxonomy() {
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST),
            PredictError::InvalidRequest
        ));
        assert!(matches!(
            classify_status(StatusCode::UNPROCESSABLE_ENTITY),
            PredictError::InvalidRequest
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            PredictError::ServerError
        ));
        assert!(matches!(classify_status(StatusCode::BAD_GATEWAY), PredictError::ServerError));
        assert!(matches!(classify_status(StatusCode::NOT_MODIFIED), PredictError::Network));
    }
}
