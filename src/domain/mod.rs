//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Method, RequestOptions, SEND_MESSAGE_PATH, SendMessage};
pub use response::GatewayResponse;
pub use validation::ValidationError;
pub use value::{ApiVersion, DEFAULT_HOST, Destination, Host, MessageText, Password, Username};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
        assert_eq!(Username::new(" alice ").unwrap().as_str(), "alice");
    }

    #[test]
    fn password_rejects_empty_but_keeps_whitespace() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
        assert_eq!(Password::new(" s3 ").unwrap().as_str(), " s3 ");
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("secret").unwrap();
        assert!(!format!("{password:?}").contains("secret"));
    }

    #[test]
    fn host_strips_trailing_slashes() {
        let host = Host::new("https://example.test/servlet//").unwrap();
        assert_eq!(host.as_str(), "https://example.test/servlet");
    }

    #[test]
    fn host_rejects_relative_and_non_http_urls() {
        assert!(matches!(
            Host::new("example.test"),
            Err(ValidationError::InvalidHost { .. })
        ));
        assert!(matches!(
            Host::new("ftp://example.test"),
            Err(ValidationError::InvalidHost { .. })
        ));
        assert!(matches!(
            Host::new(" / "),
            Err(ValidationError::Empty { field: Host::FIELD })
        ));
    }

    #[test]
    fn host_rejects_query_and_fragment() {
        assert!(matches!(
            Host::new("https://example.test/servlet?token=1"),
            Err(ValidationError::InvalidHost { .. })
        ));
        assert!(matches!(
            Host::new("https://example.test/servlet#top"),
            Err(ValidationError::InvalidHost { .. })
        ));
    }

    #[test]
    fn default_host_is_production_gateway() {
        assert_eq!(Host::default().as_str(), DEFAULT_HOST);
        assert!(Host::new(DEFAULT_HOST).is_ok());
    }

    #[test]
    fn destination_accepts_numbers_and_trims_strings() {
        assert_eq!(Destination::from(639171234567).raw(), "639171234567");
        assert_eq!(Destination::new(" 639171234567 ").unwrap().raw(), "639171234567");
        assert!(Destination::new("").is_err());
    }

    #[test]
    fn message_text_rejects_blank_and_preserves_value() {
        assert!(MessageText::new("  ").is_err());
        assert_eq!(MessageText::new(" hi ").unwrap().as_str(), " hi ");
    }

    #[test]
    fn request_options_default_to_get_without_query() {
        let options = RequestOptions::new("status");
        assert_eq!(options.path(), "status");
        assert_eq!(options.http_method(), Method::Get);
        assert!(options.query_pairs().is_empty());
        assert!(options.body().is_none());
        assert!(options.version().is_none());
    }

    #[test]
    fn request_options_query_keys_are_unique() {
        let options = RequestOptions::new("x")
            .query("a", 1)
            .query("b", "two")
            .query("a", "3");
        assert_eq!(
            options.query_pairs(),
            &[
                ("a".to_owned(), "3".to_owned()),
                ("b".to_owned(), "two".to_owned()),
            ]
        );
    }

    #[test]
    fn request_options_json_body_serializes_value() {
        #[derive(serde::Serialize)]
        struct Payload {
            id: u32,
        }

        let options = RequestOptions::new("x")
            .json_body(&Payload { id: 7 })
            .unwrap()
            .api_version(ApiVersion::new("v2").unwrap());
        assert_eq!(options.body(), Some(&json!({ "id": 7 })));
        assert_eq!(options.version().map(ApiVersion::as_str), Some("v2"));
    }

    #[test]
    fn send_message_maps_to_post_sendmsg() {
        let msg = SendMessage::new(
            Destination::new("639171234567").unwrap(),
            MessageText::new("Hello").unwrap(),
        );
        let options = RequestOptions::from(msg);
        assert_eq!(options.path(), SEND_MESSAGE_PATH);
        assert_eq!(options.http_method(), Method::Post);
        assert_eq!(
            options.query_pairs(),
            &[
                ("destination".to_owned(), "639171234567".to_owned()),
                ("text".to_owned(), "Hello".to_owned()),
            ]
        );
    }
}
