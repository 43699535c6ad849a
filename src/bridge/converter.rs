//! Conversion of evaluation results into concrete types

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Decode an evaluation result into `T`
///
/// Errors name the target type and the JSON path of the offending value.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let reason = err.into_inner().to_string();
        if path == "." {
            Error::conversion(std::any::type_name::<T>(), reason)
        } else {
            Error::conversion(
                std::any::type_name::<T>(),
                format!("{reason} at `{path}`"),
            )
        }
    })
}

/// Decode a number of seconds into a [`Duration`]
pub fn decode_seconds(value: Value) -> Result<Duration> {
    let seconds: f64 = decode(value)?;
    Duration::try_from_secs_f64(seconds).map_err(|err| {
        Error::conversion(
            std::any::type_name::<Duration>(),
            format!("{seconds} seconds: {err}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Information;
    use serde_json::json;

    #[test]
    fn test_decode_string() {
        let url: String = decode(json!("https://www.youtube.com/watch?v=abc")).unwrap();
        assert_eq!(url, "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_decode_type_mismatch() {
        let err = decode::<String>(json!(3)).unwrap_err();
        assert!(matches!(err, Error::Conversion { target, .. } if target.ends_with("String")));
    }

    #[test]
    fn test_decode_reports_path() {
        let err = decode::<Information>(json!({"videoData": {"title": 7}})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("videoData.title"), "{message}");
    }

    #[test]
    fn test_decode_seconds() {
        assert_eq!(
            decode_seconds(json!(212.5)).unwrap(),
            Duration::from_millis(212_500)
        );
        assert_eq!(decode_seconds(json!(0)).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_decode_seconds_rejects_invalid() {
        assert!(matches!(
            decode_seconds(json!(-1.0)),
            Err(Error::Conversion { .. })
        ));
        assert!(matches!(
            decode_seconds(json!(null)),
            Err(Error::Conversion { .. })
        ));
        assert!(matches!(
            decode_seconds(json!("12")),
            Err(Error::Conversion { .. })
        ));
    }
}
