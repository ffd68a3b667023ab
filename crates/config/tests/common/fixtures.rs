/// RSA fixtures as `(PKCS#8 PEM, PKCS#8 DER)`.
pub const FIXTURE_KEYS: [(&str, &[u8]); 3] = [
    (
        include_str!("../fixtures/service_account_key_1.pem"),
        include_bytes!("../fixtures/service_account_key_1.der"),
    ),
    (
        include_str!("../fixtures/service_account_key_2.pem"),
        include_bytes!("../fixtures/service_account_key_2.der"),
    ),
    (
        include_str!("../fixtures/service_account_key_3.pem"),
        include_bytes!("../fixtures/service_account_key_3.der"),
    ),
];

/// Service-account document for `client`, laid out like a console download.
pub fn service_account_json(client: &str, private_key_pem: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "type": "service_account",
        "project_id": format!("project_id_{client}"),
        "private_key_id": format!("private_key_id_{client}"),
        "private_key": private_key_pem,
        "client_email": client,
        "client_id": format!("id_{client}"),
        "auth_uri": "https://accounts.google.com/o/oauth2/auth",
        "token_uri": "https://accounts.google.com/o/oauth2/token",
        "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
        "client_x509_cert_url": format!(
            "https://www.googleapis.com/robot/v1/metadata/x509/{client}%40appspot.gserviceaccount.com"
        ),
    }))
    .expect("service account document serializes")
}
