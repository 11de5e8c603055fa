/// Connection settings for the Rekognition client.
///
/// Credentials fall back to the standard AWS provider chain (env, profile,
/// instance metadata) when no static pair is configured.
#[derive(Debug, Clone)]
pub struct RekognitionSettings {
    /// AWS region hosting the face collections (default: `us-east-1`).
    pub region: String,
    /// Static access key; used only together with `secret_access_key`.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Endpoint override, e.g. a local emulator.
    pub endpoint_url: Option<String>,
}

impl Default for RekognitionSettings {
    fn default() -> Self {
        Self {
            region: "us-east-1".into(),
            access_key_id: None,
            secret_access_key: None,
            endpoint_url: None,
        }
    }
}

impl RekognitionSettings {
    /// Load settings from environment variables with defaults.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `AWS_REGION`               | `us-east-1` |
    /// | `AWS_ACCESS_KEY_ID`        | (none)      |
    /// | `AWS_SECRET_ACCESS_KEY`    | (none)      |
    /// | `REKOGNITION_ENDPOINT_URL` | (none)      |
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            region: non_empty("AWS_REGION").unwrap_or_else(|| "us-east-1".into()),
            access_key_id: non_empty("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY"),
            endpoint_url: non_empty("REKOGNITION_ENDPOINT_URL"),
        }
    }

    /// The static credential pair, if both halves are present.
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret.as_str())),
            _ => None,
        }
    }
}
