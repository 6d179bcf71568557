use did_parser_nom::{is_did, Did};

macro_rules! test_cases_negative {
    ($($name:ident: $input:expr)*) => {
        $(
            #[test]
            fn $name() {
                println!("Testing {}", $input);
                assert!(Did::parse($input.to_string()).is_err());
                assert!(!is_did($input));
            }
        )*
    };
}

test_cases_negative! {
    test_failure_case1: ""
    test_failure_case2: "not-a-did"
    test_failure_case3: "did:example"
    test_failure_case4: "did:example:"
    test_failure_case5: "did::123"
    test_failure_case6: "did:Example:123"
    test_failure_case7: "did:example:123:"
    test_failure_case8: "did:example:12%3"
    test_failure_case9: "did:example:123#fragment"
    test_failure_case10: "DID:example:123"
    test_failure_case11: "did:example:123/path"
    test_failure_case12: "did:example:12 3"
}
