use super::{ConfigError, types::Config};

/// Validate configuration
/// Currently validates:
/// - failure_rate is within [0, 1]
/// - recommend.limit is not 0
/// - recommend.cold_start_min_rating is within [0, 5]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.failure_rate) {
        return Err(ConfigError::ValidationError(format!(
            "failure_rate must be between 0 and 1, got {}",
            config.failure_rate
        )));
    }

    if config.recommend.limit == 0 {
        return Err(ConfigError::ValidationError(
            "recommend.limit cannot be 0".to_string(),
        ));
    }

    let rating = config.recommend.cold_start_min_rating;
    if !(0.0..=5.0).contains(&rating) {
        return Err(ConfigError::ValidationError(format!(
            "recommend.cold_start_min_rating must be between 0 and 5, got {}",
            rating
        )));
    }

    Ok(())
}
