//! HTTP methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HttpError, Result};

/// The supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Options,
    Head,
    Get,
    Put,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// All supported methods.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// The normalised (uppercase) method name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self> {
        normalise_method(s)
    }
}

/// Parse a method name regardless of its casing.
pub fn normalise_method(method: &str) -> Result<HttpMethod> {
    HttpMethod::ALL
        .into_iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(method))
        .ok_or_else(|| HttpError::UnknownMethod(method.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_method_casing() {
        assert_eq!(normalise_method("get").unwrap(), HttpMethod::Get);
        assert_eq!(normalise_method("Post").unwrap(), HttpMethod::Post);
        assert_eq!(normalise_method("DELETE").unwrap(), HttpMethod::Delete);
        assert_eq!(normalise_method("options").unwrap().to_string(), "OPTIONS");
    }

    #[test]
    fn test_normalise_method_unknown() {
        let result = normalise_method("TRACE");
        assert_eq!(result, Err(HttpError::UnknownMethod("TRACE".to_string())));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for method in HttpMethod::ALL {
            assert_eq!(method.as_str().parse::<HttpMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_serde_uses_uppercase() {
        let json = serde_json::to_string(&HttpMethod::Patch).unwrap();
        assert_eq!(json, "\"PATCH\"");

        let decoded: HttpMethod = serde_json::from_str("\"HEAD\"").unwrap();
        assert_eq!(decoded, HttpMethod::Head);
    }
}
