use serde::{Deserialize, Serialize};

/// Claims carried by tokens issued by the authentication collaborator.
///
/// Example payload:
/// ```json
/// {
///   "sub": "1234567890",
///   "email": "patient@example.com",
///   "name": "John Doe",
///   "iat": 1516239022,
///   "exp": 2016239022,
///   "aud": "https://localhost:7000/",
///   "iss": "https://localhost:7000/"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub iat: Option<u64>,
    pub exp: Option<u64>,
    pub aud: Option<String>,
    pub iss: Option<String>,
}

/// The authenticated caller, as established by the auth middleware.
///
/// Authorization throughout the API is keyed on the email claim: the
/// caller is whoever the identity store says owns this address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}
