//! # Checkout Action Handlers
//!
//! One async handler per operator action. Each handler drives the
//! corresponding `begin_*`/`apply_*` pair on the session, performing the
//! network call in between via the [`CheckoutApi`] trait.
//!
//! Backend failures never escape a handler: they are flattened to display
//! strings and fed into the session, where they surface in the product
//! slot or as a purchase error. A handler's return value is an optional
//! refusal notice for actions the session declined to start.

use tracing::{debug, warn};

use regi_backend::{CheckoutApi, PurchaseRequest};
use regi_core::{validation, CheckoutSession, PurchaseOutcome, TerminalIdentity};

/// Notice shown when an action is refused because a call is in flight.
const NOTICE_BUSY: &str = "通信中です。しばらくお待ちください";

/// Notice shown when `scan` is triggered with an empty code field.
const NOTICE_NO_CODE: &str = "商品コードを入力してください";

/// Notice shown when `buy` is triggered with an empty purchase list.
const NOTICE_EMPTY_LIST: &str = "購入リストが空です";

// =============================================================================
// Product Lookup
// =============================================================================

/// Scans the code in `code`: stores it on the session and resolves it
/// against the product master.
pub async fn scan(
    session: &mut CheckoutSession,
    api: &dyn CheckoutApi,
    code: &str,
) -> Option<String> {
    session.set_code(code);

    let Some((ticket, code)) = session.begin_lookup() else {
        if session.is_loading() {
            return Some(NOTICE_BUSY.to_string());
        }
        if session.code().trim().is_empty() {
            return Some(NOTICE_NO_CODE.to_string());
        }
        // Refused for the code itself: name the actual rule it broke
        return Some(match validation::validate_scan_code(session.code()) {
            Err(e) => e.to_string(),
            Ok(()) => NOTICE_NO_CODE.to_string(),
        });
    };

    debug!(%code, "looking up product");
    let outcome = api
        .fetch_product(&code)
        .await
        .map_err(|e| e.to_string());

    if let Err(message) = &outcome {
        warn!(%code, error = %message, "product lookup failed");
    }
    session.apply_lookup(ticket, outcome);
    None
}

// =============================================================================
// Purchase List
// =============================================================================

/// Adds the resolved product to the purchase list.
pub fn add(session: &mut CheckoutSession) -> Option<String> {
    if session.product().is_none() {
        return Some("追加する商品がありません。先にスキャンしてください".to_string());
    }
    match session.add_to_list() {
        Ok(()) => None,
        Err(e) => Some(e.to_string()),
    }
}

/// Adjusts a line quantity by `delta`.
pub fn change_qty(session: &mut CheckoutSession, product_id: i64, delta: i64) -> Option<String> {
    match session.change_qty(product_id, delta) {
        Ok(()) => None,
        Err(e) => Some(e.to_string()),
    }
}

/// Removes a line from the purchase list.
pub fn remove(session: &mut CheckoutSession, product_id: i64) {
    session.remove_item(product_id);
}

// =============================================================================
// Purchase Submission
// =============================================================================

/// Submits the purchase list as one transaction.
pub async fn purchase(session: &mut CheckoutSession, api: &dyn CheckoutApi) -> Option<String> {
    let Some(draft) = session.begin_purchase() else {
        if session.is_loading() {
            return Some(NOTICE_BUSY.to_string());
        }
        return Some(NOTICE_EMPTY_LIST.to_string());
    };

    let request = PurchaseRequest::from(draft);
    debug!(lines = request.items.len(), "submitting purchase");

    let outcome = match api.submit_purchase(&request).await {
        Ok(response) => match (response.ok, response.total) {
            (true, Some(total)) => Ok(PurchaseOutcome::Accepted { total }),
            (true, None) => Err("応答に合計金額がありません".to_string()),
            (false, _) => Ok(PurchaseOutcome::Rejected),
        },
        Err(e) => {
            warn!(error = %e, "purchase submission failed");
            Err(e.to_string())
        }
    };

    session.apply_purchase(outcome);
    None
}

/// Dismisses the settled-total popup, returning to a ready-to-scan state.
pub fn dismiss(session: &mut CheckoutSession) {
    session.dismiss_result();
}

/// Replaces the terminal identity.
pub fn set_identity(session: &mut CheckoutSession, identity: TerminalIdentity) -> Option<String> {
    match session.set_identity(identity) {
        Ok(()) => None,
        Err(e) => Some(e.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
