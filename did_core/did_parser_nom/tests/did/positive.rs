use did_parser_nom::{is_did, Did};

macro_rules! test_cases_positive {
    ($($name:ident: $input:expr, $expected_method:expr, $expected_id:expr)*) => {
        $(
            #[test]
            fn $name() {
                let parsed_did = Did::parse($input.to_string()).unwrap();

                assert_eq!(parsed_did.did(), $input, "DID");
                assert_eq!(parsed_did.method(), $expected_method, "Method");
                assert_eq!(parsed_did.id(), $expected_id, "ID");
                assert!(is_did($input));
            }
        )*
    };
}

test_cases_positive! {
    test_did_key:
        "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        "key",
        "z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"

    test_did_key_with_version:
        "did:key:1:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        "key",
        "1:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"

    test_did_example:
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi"

    test_did_namespaced:
        "did:example:namespace:123456789abcdefghi",
        "example",
        "namespace:123456789abcdefghi"

    test_did_empty_segment:
        "did:example::123",
        "example",
        ":123"

    test_did_pct_encoded:
        "did:web:example.com%3A8080",
        "web",
        "example.com%3A8080"

    test_did_method_with_digits:
        "did:ex4mple:abc.def-ghi_jkl",
        "ex4mple",
        "abc.def-ghi_jkl"
}
