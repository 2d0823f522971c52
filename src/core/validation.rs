use super::{
    config::ApiConfig,
    errors::PredictError,
    models::{
        ModelKey,
        UploadFile,
    },
};

/// Pre-flight file checks, short-circuiting in order: presence, size, type.
/// Only the first failure is reported. A file exactly at the size limit
/// passes.
pub fn validate_file(file: Option<&UploadFile>, config: &ApiConfig) -> Result<(), PredictError> {
    let file = file.ok_or(PredictError::NoFileSelected)?;

    if file.size() > config.max_file_size {
        return Err(PredictError::FileTooLarge { limit_mb: config.max_file_size_mb() });
    }

    if !config.allowed_file_types.contains(&file.content_type.as_str()) {
        return Err(PredictError::InvalidFileType);
    }

    Ok(())
}

/// Membership test against the fixed model-key set. Unrecognized keys are
/// rejected before a request is ever built.
pub fn is_valid_model_key(value: &str) -> bool {
    ModelKey::parse(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_file(size: usize) -> UploadFile {
        UploadFile {
            name: "sample.txt".to_string(),
            content_type: "text/plain".to_string(),
            contents: vec![b'a'; size],
        }
    }

    #[test]
    fn missing_file_is_rejected_first() {
        let config = ApiConfig::default();
        assert!(matches!(validate_file(None, &config), Err(PredictError::NoFileSelected)));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let config = ApiConfig { max_file_size: 16, ..ApiConfig::default() };
        let file = text_file(17);
        assert!(matches!(
            validate_file(Some(&file), &config),
            Err(PredictError::FileTooLarge { limit_mb: 0 })
        ));
    }

    #[test]
    fn file_exactly_at_the_limit_passes() {
        let config = ApiConfig { max_file_size: 16, ..ApiConfig::default() };
        let file = text_file(16);
        assert!(validate_file(Some(&file), &config).is_ok());
    }

    #[test]
    fn unsupported_content_type_is_rejected() {
        let config = ApiConfig::default();
        let file = UploadFile {
            name: "sample.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            contents: b"%PDF-1.4".to_vec(),
        };
        assert!(matches!(validate_file(Some(&file), &config), Err(PredictError::InvalidFileType)));
    }

    #[test]
    fn size_check_runs_before_type_check() {
        let config = ApiConfig { max_file_size: 4, ..ApiConfig::default() };
        let file = UploadFile {
            name: "sample.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            contents: vec![0; 64],
        };
        assert!(matches!(
            validate_file(Some(&file), &config),
            Err(PredictError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn model_key_membership() {
        assert!(is_valid_model_key("decade"));
        assert!(is_valid_model_key("century"));
        assert!(!is_valid_model_key("year"));
        assert!(!is_valid_model_key(""));
    }
}
