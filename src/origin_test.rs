use super::*;

mod parse_origin_fn {
    use super::*;

    #[test]
    fn should_return_input_verbatim_when_origin_is_well_formed() {
        // Arrange & Act
        let result = parse_origin("https://App.Example.com:8443");

        // Assert
        assert_eq!(result, Ok("https://App.Example.com:8443"));
    }

    #[test]
    fn should_return_empty_error_when_origin_is_empty() {
        // Arrange & Act
        let result = parse_origin("");

        // Assert
        assert_eq!(result, Err(OriginError::Empty));
    }

    #[test]
    fn should_return_whitespace_error_when_origin_is_padded() {
        // Arrange & Act
        let result = parse_origin(" https://api.test ");

        // Assert
        assert!(matches!(result, Err(OriginError::Whitespace { .. })));
    }

    #[test]
    fn should_return_malformed_error_when_scheme_is_missing() {
        // Arrange & Act
        let result = parse_origin("api.test");

        // Assert
        match result {
            Err(OriginError::Malformed { origin, source }) => {
                assert_eq!(origin, "api.test");
                assert_eq!(source, url::ParseError::RelativeUrlWithoutBase);
            }
            other => panic!("expected malformed origin, got {:?}", other),
        }
    }

    #[test]
    fn should_return_malformed_error_when_host_is_missing() {
        // Arrange & Act
        let result = parse_origin("https://");

        // Assert
        assert!(matches!(result, Err(OriginError::Malformed { .. })));
    }

    #[test]
    fn should_mention_origin_when_error_is_displayed() {
        // Arrange
        let error = parse_origin("not a uri").unwrap_err();

        // Act
        let message = error.to_string();

        // Assert
        assert!(message.contains("'not a uri'"));
    }
}

mod resolve {
    use super::*;

    fn list(values: &[&str]) -> Origin {
        Origin::list(values.iter().copied()).expect("non-empty origin list")
    }

    #[test]
    fn should_return_any_when_wildcard_even_without_request_origin() {
        // Arrange
        let origin = Origin::Any;

        // Act
        let decision = origin.resolve("");

        // Assert
        assert_eq!(decision, OriginDecision::Any);
    }

    #[test]
    fn should_return_configured_origin_when_single_member_differs_from_request() {
        // Arrange
        let origin = list(&["https://only.test"]);

        // Act
        let decision = origin.resolve("https://other.test");

        // Assert
        assert_eq!(decision, OriginDecision::Exact("https://only.test".into()));
    }

    #[test]
    fn should_mirror_when_request_origin_is_member_of_multi_list() {
        // Arrange
        let origin = list(&["https://a.test", "https://b.test"]);

        // Act
        let decision = origin.resolve("https://b.test");

        // Assert
        assert_eq!(decision, OriginDecision::Mirror);
    }

    #[test]
    fn should_disallow_when_request_origin_is_not_member_of_multi_list() {
        // Arrange
        let origin = list(&["https://a.test", "https://b.test"]);

        // Act
        let decision = origin.resolve("https://c.test");

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }

    #[test]
    fn should_disallow_when_member_differs_only_by_case() {
        // Arrange
        let origin = list(&["https://a.test", "https://b.test"]);

        // Act
        let decision = origin.resolve("https://A.test");

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }

    #[test]
    fn should_disallow_when_multi_list_and_request_origin_absent() {
        // Arrange
        let origin = list(&["https://a.test", "https://b.test"]);

        // Act
        let decision = origin.resolve("");

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }
}

mod with {
    use super::*;

    #[test]
    fn should_keep_wildcard_when_origin_added() {
        // Arrange & Act
        let origin = Origin::Any.with("https://a.test");

        // Assert
        assert_eq!(origin, Origin::Any);
    }

    #[test]
    fn should_absorb_duplicate_when_origin_already_listed() {
        // Arrange
        let origin = Origin::list(["https://a.test"]).unwrap();

        // Act
        let origin = origin.with("https://a.test");

        // Assert
        assert_eq!(origin, Origin::list(["https://a.test"]).unwrap());
    }
}

mod list {
    use super::*;

    #[test]
    fn should_return_none_when_iterator_is_empty() {
        // Arrange & Act
        let origin = Origin::list(Vec::<String>::new());

        // Assert
        assert!(origin.is_none());
    }

    #[test]
    fn should_compare_equal_when_insertion_order_differs() {
        // Arrange & Act
        let first = Origin::list(["https://a.test", "https://b.test"]);
        let second = Origin::list(["https://b.test", "https://a.test"]);

        // Assert
        assert_eq!(first, second);
    }
}
