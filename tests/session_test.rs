//! Session gating and the logout/checkout asymmetry: logout clears the
//! session but never the cart.

mod common;

use common::{login_as, memory_sdk, product};
use storefront_sdk::StoreError;

#[test]
fn absent_username_reads_as_logged_out() {
    let sdk = memory_sdk();
    assert_eq!(sdk.current_user(), None);
    assert!(!sdk.session().session().is_logged_in());
    assert!(matches!(
        sdk.session().require_user(),
        Err(StoreError::NotAuthorized(_))
    ));
}

#[test]
fn cart_and_product_detail_are_gated_on_a_session() {
    let sdk = memory_sdk();
    let widget = product(1, "Widget", 10.0);

    assert!(matches!(
        sdk.add_to_cart(&widget),
        Err(StoreError::NotAuthorized(_))
    ));
    assert!(matches!(
        sdk.view_product(1),
        Err(StoreError::NotAuthorized(_))
    ));

    login_as(&sdk, "ada");
    assert_eq!(sdk.add_to_cart(&widget).unwrap().len(), 1);
}

#[test]
fn logout_clears_session_fields_but_not_the_cart() {
    let sdk = memory_sdk();
    login_as(&sdk, "ada");
    sdk.session().set_tokens(Some("acc"), Some("ref")).unwrap();
    sdk.add_to_cart(&product(1, "Widget", 10.0)).unwrap();

    sdk.auth().logout().unwrap();

    assert_eq!(sdk.current_user(), None);
    let session = sdk.session().session();
    assert_eq!(session.access_token, None);
    assert_eq!(session.refresh_token, None);
    assert_eq!(
        sdk.cart().load("ada").len(),
        1,
        "only checkout clears the cart, logout never does"
    );
}

#[test]
fn admin_logout_drops_tokens_but_keeps_the_shopper_session() {
    let sdk = memory_sdk();
    login_as(&sdk, "ada");
    sdk.session().set_tokens(Some("acc"), Some("ref")).unwrap();

    // The server-side call is best effort and fails against the dead port;
    // local token cleanup must happen regardless.
    sdk.admin().logout().unwrap();

    let session = sdk.session().session();
    assert_eq!(session.access_token, None);
    assert_eq!(session.refresh_token, None);
    assert_eq!(
        sdk.current_user().as_deref(),
        Some("ada"),
        "admin logout must not log the shopper out"
    );
}

#[test]
fn partial_token_updates_keep_existing_values() {
    let sdk = memory_sdk();
    sdk.session().set_tokens(Some("acc1"), Some("ref1")).unwrap();
    sdk.session().set_tokens(Some("acc2"), None).unwrap();

    let session = sdk.session().session();
    assert_eq!(session.access_token.as_deref(), Some("acc2"));
    assert_eq!(session.refresh_token.as_deref(), Some("ref1"));
}

#[test]
fn client_side_validation_blocks_empty_credentials() {
    let sdk = memory_sdk();
    assert!(matches!(
        sdk.auth().login("", "pw"),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        sdk.auth().register("ada", "", "pw"),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        sdk.admin().register("", "a@b.c", "pw"),
        Err(StoreError::Validation(_))
    ));
}
