use did_parser_nom::DidUrl;

macro_rules! test_cases_positive {
    ($($name:ident: $input:expr, $expected_did:expr, $expected_method:expr, $expected_id:expr, $expected_path:expr, $expected_query:expr, $expected_fragment:expr)*) => {
        $(
            #[test]
            fn $name() {
                let parsed_did_url = DidUrl::parse($input.to_string()).unwrap();

                assert_eq!(parsed_did_url.did(), $expected_did, "DID");
                assert_eq!(parsed_did_url.method(), $expected_method, "Method");
                assert_eq!(parsed_did_url.id(), $expected_id, "ID");
                assert_eq!(parsed_did_url.path(), $expected_path, "Path");
                assert_eq!(parsed_did_url.query(), $expected_query, "Query");
                assert_eq!(parsed_did_url.fragment(), $expected_fragment, "Fragment");
                assert_eq!(parsed_did_url.to_string(), $input);
            }
        )*
    };
}

test_cases_positive! {
    test_case1:
        "did:example:123456789abcdefghi",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        None,
        None,
        None

    test_case2:
        "did:example:123456789abcdefghi/path",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/path"),
        None,
        None

    test_case3:
        "did:example:123456789abcdefghi/path?query1=value1&query2=value2",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/path"),
        Some("query1=value1&query2=value2"),
        None

    test_case4:
        "did:example:123456789abcdefghi/path?query=value#fragment",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/path"),
        Some("query=value"),
        Some("fragment")

    test_case5:
        "did:example:123456789abcdefghi#fragment",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        None,
        None,
        Some("fragment")

    test_case6:
        "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        "key",
        "z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        None,
        None,
        Some("z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp")

    test_case7:
        "did:key:2:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        "did:key:2:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        "key",
        "2:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
        None,
        None,
        Some("z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp")

    test_case8:
        "did:example:123?",
        "did:example:123",
        "example",
        "123",
        None,
        Some(""),
        None

    test_case9:
        "did:example:123#",
        "did:example:123",
        "example",
        "123",
        None,
        None,
        Some("")
}
