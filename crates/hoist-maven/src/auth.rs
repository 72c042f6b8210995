//! Applying resolved credentials to upload requests.
//!
//! Credentials arrive already resolved (see [`crate::credentials`]); this
//! module only maps them onto the request.

use reqwest::RequestBuilder;

use crate::credentials::ResolvedCredential;

/// Apply authentication to a request if the credential carries any material.
///
/// A lone password is treated as a bearer token. A fully unset credential
/// leaves the request anonymous.
pub fn apply_auth(request: RequestBuilder, credential: &ResolvedCredential) -> RequestBuilder {
    match (&credential.username, &credential.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token),
        (None, None) => request,
    }
}
