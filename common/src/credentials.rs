use crate::BearerToken;

/// API user as entered in the credentials section of the panel.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub authorization_token: BearerToken,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        authorization_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            authorization_token: BearerToken::new(authorization_token),
        }
    }

    /// `Authorization` header value, when a token has been entered.
    pub fn authorization_header(&self) -> Option<String> {
        self.authorization_token.header_value()
    }
}
