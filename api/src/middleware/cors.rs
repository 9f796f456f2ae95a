//! CORS middleware configuration for cross-origin requests.
//!
//! Origins are an explicit allow-list supplied through configuration; the
//! browser frontend is the only expected cross-origin caller. Development
//! mode is permissive so local frontends on arbitrary ports work without
//! ceremony.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use vf_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the current environment.
///
/// In development this allows any origin. In staging/production only the
/// origins in the `ALLOWED_ORIGINS` allow-list are accepted.
pub fn create_cors() -> Cors {
    let environment = Environment::from_env();

    if environment.is_development() {
        cors_from_config(&CorsConfig::development())
    } else {
        cors_from_config(&CorsConfig::from_env())
    }
}

/// Build an actix CORS middleware from an explicit option set
pub fn cors_from_config(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age as usize);

    if config.allows_any_origin() {
        log::info!("Configuring permissive CORS (development)");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_cors_builds() {
        let _cors = cors_from_config(&CorsConfig::development());
    }

    #[test]
    fn test_allow_list_cors_builds() {
        let config = CorsConfig {
            allowed_origins: vec![
                "https://app.veriflow.io".to_string(),
                "https://admin.veriflow.io".to_string(),
            ],
            ..Default::default()
        };
        let _cors = cors_from_config(&config);
    }
}
