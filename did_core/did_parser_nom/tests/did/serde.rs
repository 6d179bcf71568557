use did_parser_nom::Did;
use serde_test::{assert_de_tokens_error, assert_tokens, Token};

const DID: &str = "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";

#[test]
fn serialize_and_deserialize_as_string() {
    let did = Did::parse(DID.to_string()).unwrap();
    assert_tokens(&did, &[Token::Str(DID)]);
}

#[test]
fn deserialize_invalid_did() {
    assert_de_tokens_error::<Did>(
        &[Token::Str("")],
        "Invalid input: Empty input",
    );
}
