//! # Dog Image Model
//!
//! Response body of the Dog CEO random image endpoint.

use serde::{Deserialize, Serialize};

/// Status value Dog CEO reports on success
pub const DOG_STATUS_OK: &str = "ok";

/// One random dog image
///
/// `message` carries the image URL; the name comes from the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogImage {
    pub message: String,
    pub status: String,
}

impl DogImage {
    pub fn image_url(&self) -> &str {
        &self.message
    }

    /// Whether the API reported the request as successful
    pub fn is_ok(&self) -> bool {
        self.status == DOG_STATUS_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_image_should_decode_message_and_status() {
        let json = r#"{"message":"http://x/y.jpg","status":"success"}"#;
        let image: DogImage = serde_json::from_str(json).unwrap();

        assert_eq!(image.message, "http://x/y.jpg");
        assert_eq!(image.status, "success");
        assert_eq!(image.image_url(), "http://x/y.jpg");
        assert!(!image.is_ok());
    }

    #[test]
    fn dog_image_should_report_ok_status() {
        let image = DogImage {
            message: "https://images.dog.ceo/breeds/hound/1.jpg".to_string(),
            status: "ok".to_string(),
        };
        assert!(image.is_ok());
    }

    #[test]
    fn dog_image_should_reject_missing_status() {
        assert!(serde_json::from_str::<DogImage>(r#"{"message":"x"}"#).is_err());
    }
}
