//! Port-level regression coverage: error messages and session issuance.

use super::*;
use crate::domain::{IdentityToken, UserId, UserProfile};
use rstest::rstest;

#[rstest]
fn port_errors_render_their_context() {
    assert_eq!(
        UserPersistenceError::connection("pool timed out").to_string(),
        "user repository connection failed: pool timed out"
    );
    assert_eq!(
        AppointmentRepositoryError::query("syntax error").to_string(),
        "appointment repository query failed: syntax error"
    );
    assert_eq!(
        FaqRepositoryError::query("boom").to_string(),
        "faq repository query failed: boom"
    );
}

#[rstest]
fn auth_session_issues_token_for_user() {
    let id = UserId::new(12).expect("valid id");
    let user = UserProfile::try_new(id, "ada@example.com", "Ada").expect("valid profile");
    let session = AuthSession::for_user(user.clone());

    assert_eq!(session.user, user);
    let (decoded_id, email) =
        IdentityToken::decode(session.token.as_str()).expect("token decodes");
    assert_eq!(decoded_id, id);
    assert_eq!(email, "ada@example.com");
}
