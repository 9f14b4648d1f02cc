use crate::config::Config;
use crate::error::{Result, UnimatchError, ValidationError};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration
    pub fn validate(config: &Config) -> Result<()> {
        let mut errors = Vec::new();

        Self::validate_schema_version(config, &mut errors);
        Self::validate_catalog(config, &mut errors);
        Self::validate_engine(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(UnimatchError::ConfigValidation { errors })
        }
    }

    fn validate_schema_version(config: &Config, errors: &mut Vec<ValidationError>) {
        let version = &config.meta.schema_version;
        if version != "1.0.0" {
            errors.push(ValidationError::new(
                "_meta.schema_version",
                format!("Unsupported schema version: {}", version),
            ));
        }
    }

    fn validate_catalog(config: &Config, errors: &mut Vec<ValidationError>) {
        // File existence is not checked here: paths may contain ~ and the
        // catalog loader reports missing files with full context.
        if config.catalog.courses_file.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "catalog.courses_file",
                "Courses file path cannot be empty",
            ));
        }

        if config.catalog.rankings_file.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "catalog.rankings_file",
                "Rankings file path cannot be empty",
            ));
        }
    }

    fn validate_engine(config: &Config, errors: &mut Vec<ValidationError>) {
        if config.engine.top_k == 0 {
            errors.push(ValidationError::new(
                "engine.top_k",
                "Result set size must be greater than 0",
            ));
        }

        if config.engine.batch_size == 0 {
            errors.push(ValidationError::new(
                "engine.batch_size",
                "Batch size must be greater than 0",
            ));
        }

        if config.engine.max_features == 0 {
            errors.push(ValidationError::new(
                "engine.max_features",
                "Vocabulary cap must be greater than 0",
            ));
        }
    }
}
