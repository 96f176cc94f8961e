//! Command handlers.

use crate::config::{CliConfig, OutputFormat};
use secretshape::{
    ApiCredential, AwsSecretsBackend, Credential, get_api_credential_secret,
    get_credential_secret, get_postgres_dsn_secret, get_string_secret,
};
use serde_json::Value;
use tracing::debug;

type HandlerResult = Result<(), Box<dyn std::error::Error>>;

async fn backend(config: &CliConfig) -> Result<AwsSecretsBackend, secretshape::Error> {
    let backend = AwsSecretsBackend::from_config(&config.client_config()).await?;
    debug!(region = ?backend.region(), "Using Secrets Manager backend");
    Ok(backend)
}

/// Print a secret's raw value.
pub async fn string(config: &CliConfig, name: &str) -> HandlerResult {
    let backend = backend(config).await?;
    let value = get_string_secret(Some(&backend), name).await?;
    println!("{}", render_value("value", &value, config.output)?);
    Ok(())
}

/// Print a decoded credential.
pub async fn credential(config: &CliConfig, name: &str) -> HandlerResult {
    let backend = backend(config).await?;
    let cred = get_credential_secret(Some(&backend), name).await?;
    println!("{}", render_credential(&cred, config.output)?);
    Ok(())
}

/// Print a decoded API credential.
pub async fn api_credential(config: &CliConfig, name: &str) -> HandlerResult {
    let backend = backend(config).await?;
    let cred = get_api_credential_secret(Some(&backend), name).await?;
    println!("{}", render_api_credential(&cred, config.output)?);
    Ok(())
}

/// Print a Postgres DSN built from a database secret.
pub async fn postgres_dsn(config: &CliConfig, name: &str) -> HandlerResult {
    let backend = backend(config).await?;
    let dsn = get_postgres_dsn_secret(Some(&backend), name).await?;
    println!("{}", render_value("dsn", &dsn, config.output)?);
    Ok(())
}

pub(crate) fn render_value(
    label: &str,
    value: &str,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(label.to_string(), Value::String(value.to_string()));
            serde_json::to_string_pretty(&object)
        }
    }
}

pub(crate) fn render_credential(
    cred: &Credential,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(cred),
        OutputFormat::Text => Ok(text_lines(&[
            ("host", cred.host.clone()),
            ("port", cred.port.to_string()),
            ("key", cred.key.clone()),
            ("username", cred.username.clone()),
            ("password", cred.password.clone()),
            ("dbname", cred.dbname.clone()),
        ])),
    }
}

pub(crate) fn render_api_credential(
    cred: &ApiCredential,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(cred),
        OutputFormat::Text => Ok(text_lines(&[
            ("baseURL", cred.base_url.clone()),
            ("key", cred.key.clone()),
            ("secret", cred.secret.clone()),
        ])),
    }
}

fn text_lines(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_credential_text() {
        let cred = Credential {
            host: "db1".to_string(),
            port: 5432,
            username: "app".to_string(),
            password: "pw".to_string(),
            dbname: "orders".to_string(),
            ..Default::default()
        };

        let text = render_credential(&cred, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "host: db1\nport: 5432\nkey: \nusername: app\npassword: pw\ndbname: orders"
        );
    }

    #[test]
    fn test_render_api_credential_json_uses_wire_names() {
        let cred = ApiCredential {
            base_url: "https://api.example.com".to_string(),
            key: "abc".to_string(),
            secret: "xyz".to_string(),
        };

        let out = render_api_credential(&cred, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["baseURL"], "https://api.example.com");
        assert_eq!(value["secret"], "xyz");
    }

    #[test]
    fn test_render_value() {
        let dsn = "host=db1 dbname=app ";
        assert_eq!(render_value("dsn", dsn, OutputFormat::Text).unwrap(), dsn);

        let out = render_value("dsn", dsn, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dsn"], dsn);
    }
}
