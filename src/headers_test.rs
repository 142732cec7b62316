use super::*;

mod push {
    use super::*;

    #[test]
    fn when_name_is_regular_should_insert() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push("X-One", "1");
        let headers = collection.into_headers();

        // Assert
        assert_eq!(headers.get("X-One").map(String::as_str), Some("1"));
    }

    #[test]
    fn when_name_is_vary_should_route_through_merging() {
        let mut collection = HeaderCollection::new();

        collection.push("Vary", "Origin");
        collection.push("VARY", "Accept-Encoding");
        let headers = collection.into_headers();

        assert_eq!(
            headers.get(header::VARY).map(String::as_str),
            Some("Origin, Accept-Encoding")
        );
    }

    #[test]
    fn when_same_name_is_pushed_twice_should_keep_last_value() {
        let mut collection = HeaderCollection::new();

        collection.push("X-One", "1");
        collection.push("X-One", "2");
        let headers = collection.into_headers();

        assert_eq!(headers.get("X-One").map(String::as_str), Some("2"));
    }
}

mod add_vary {
    use super::*;

    #[test]
    fn when_entries_repeat_should_deduplicate_case_insensitively() {
        let mut collection = HeaderCollection::new();

        collection.add_vary("Origin");
        collection.add_vary("ORIGIN");
        collection.add_vary("Access-Control-Request-Method");
        let headers = collection.into_headers();

        assert_eq!(
            headers.get(header::VARY).map(String::as_str),
            Some("Origin, Access-Control-Request-Method")
        );
    }

    #[test]
    fn when_value_is_blank_should_not_create_the_header() {
        let mut collection = HeaderCollection::new();

        collection.add_vary("   ");
        let headers = collection.into_headers();

        assert!(!headers.contains_key(header::VARY));
    }
}

mod extend {
    use super::*;

    #[test]
    fn when_both_sides_carry_vary_should_merge_entries() {
        // Arrange
        let mut left = HeaderCollection::new();
        left.add_vary("Origin");
        left.push("X-One", "1");

        let mut right = HeaderCollection::new();
        right.add_vary("Access-Control-Request-Headers");
        right.push("X-Two", "2");

        // Act
        left.extend(right);
        let headers = left.into_headers();

        // Assert
        assert_eq!(
            headers.get(header::VARY).map(String::as_str),
            Some("Origin, Access-Control-Request-Headers")
        );
        assert_eq!(headers.get("X-One").map(String::as_str), Some("1"));
        assert_eq!(headers.get("X-Two").map(String::as_str), Some("2"));
    }
}
