//! # Checkout Session State Machine
//!
//! The single mutable session object owning all checkout state, with
//! explicit action handlers for every operator action.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Session Actions                             │
//! │                                                                         │
//! │  Operator Action        Session Transition        Network (driver)     │
//! │  ───────────────        ──────────────────        ────────────────     │
//! │                                                                         │
//! │  type code ───────────► set_code()                                      │
//! │                                                                         │
//! │  scan ────────────────► begin_lookup() ─────────► GET /product/{code}  │
//! │                         apply_lookup() ◄────────  (driver awaits)       │
//! │                                                                         │
//! │  add ─────────────────► add_to_list()                                   │
//! │  qty/rm ──────────────► change_qty()/remove_item()                      │
//! │                                                                         │
//! │  buy ─────────────────► begin_purchase() ───────► POST /purchase        │
//! │                         apply_purchase() ◄──────  (driver awaits)       │
//! │                                                                         │
//! │  ok ──────────────────► dismiss_result()                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why begin/apply Pairs?
//! The session performs no I/O. The driver (the terminal app) calls
//! `begin_*`, performs the network call, then feeds the outcome back via
//! `apply_*`. This keeps every contract independently unit-testable and
//! gives late lookup responses a natural discard point: each lookup carries
//! a ticket, and an `apply_lookup` whose ticket has been superseded is
//! dropped instead of overwriting newer state.
//!
//! ## Concurrency
//! Single-threaded and event-driven. The `loading` flag is the sole guard:
//! while it is set, `begin_lookup` and `begin_purchase` refuse, so at most
//! one network call is outstanding at a time.

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Product, TerminalIdentity};
use crate::validation;
use crate::MSG_PRODUCT_NOT_REGISTERED;

// =============================================================================
// Tickets & Drafts
// =============================================================================

/// Opaque tag identifying one lookup request.
///
/// Monotonically increasing; only the outcome carrying the current ticket
/// may mutate session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Snapshot of everything a purchase submission needs.
///
/// Produced by [`CheckoutSession::begin_purchase`]; the backend crate turns
/// it into the wire request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDraft {
    /// Terminal identity attached to the transaction.
    pub identity: TerminalIdentity,

    /// One entry per purchase line: (product id, quantity).
    pub lines: Vec<(i64, i64)>,
}

/// Backend verdict on a submitted purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Acknowledged; `total` is the settled tax-inclusive amount charged.
    Accepted { total: Money },

    /// The backend responded without acknowledgement (`ok = false`).
    Rejected,
}

// =============================================================================
// Checkout Session
// =============================================================================

/// The checkout session: scanned code, resolved product or lookup error,
/// the purchase list, terminal identity, and the UI flags.
///
/// All state is ephemeral - nothing survives the session instance.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    code: String,
    product: Option<Product>,
    lookup_error: Option<String>,
    purchase_error: Option<String>,
    cart: Cart,
    identity: TerminalIdentity,
    loading: bool,
    lookup_seq: u64,
    settled_total: Option<Money>,
}

impl CheckoutSession {
    /// Creates a fresh session with default terminal identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for a specific terminal.
    pub fn with_identity(identity: TerminalIdentity) -> Self {
        CheckoutSession {
            identity,
            ..Self::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The scanned-code input field.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The currently resolved product, if any.
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// The last lookup failure message. Mutually exclusive with a resolved
    /// product - shown in the same display slot.
    pub fn lookup_error(&self) -> Option<&str> {
        self.lookup_error.as_deref()
    }

    /// The last purchase failure message, if the previous submission was
    /// rejected or failed in transport.
    pub fn purchase_error(&self) -> Option<&str> {
        self.purchase_error.as_deref()
    }

    /// The purchase list.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Terminal identity attached to submissions.
    pub fn identity(&self) -> &TerminalIdentity {
        &self.identity
    }

    /// True while a network call is outstanding. Dependent controls are
    /// disabled while set.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The settled total of the last successful purchase, while the result
    /// popup is visible.
    pub fn settled_total(&self) -> Option<Money> {
        self.settled_total
    }

    // =========================================================================
    // Operator Input
    // =========================================================================

    /// Updates the scanned-code field.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Replaces the terminal identity after validating presence of all
    /// three fields.
    pub fn set_identity(&mut self, identity: TerminalIdentity) -> CoreResult<()> {
        validation::validate_identity(&identity)?;
        self.identity = identity;
        Ok(())
    }

    // =========================================================================
    // Product Resolver
    // =========================================================================

    /// Starts a product lookup for the current code.
    ///
    /// Returns the ticket and the code to fetch, or `None` when the action
    /// is refused (a call is already outstanding, or the code is empty or
    /// malformed).
    ///
    /// The prior product/error are cleared here, before the request
    /// resolves, so stale data is never shown during flight.
    pub fn begin_lookup(&mut self) -> Option<(LookupTicket, String)> {
        if self.loading {
            return None;
        }
        let code = self.code.trim();
        if validation::validate_scan_code(code).is_err() {
            return None;
        }

        self.product = None;
        self.lookup_error = None;
        self.loading = true;
        self.lookup_seq += 1;

        Some((LookupTicket(self.lookup_seq), code.to_string()))
    }

    /// Feeds a lookup outcome back into the session.
    ///
    /// ## Staleness Guard
    /// If `ticket` is not the current one - the lookup was superseded by a
    /// newer scan or the session moved on - the outcome is discarded whole:
    /// no product, no error, and no loading change (the flag belongs to the
    /// newer request).
    pub fn apply_lookup(&mut self, ticket: LookupTicket, outcome: Result<Option<Product>, String>) {
        if ticket.0 != self.lookup_seq {
            return;
        }

        self.loading = false;
        match outcome {
            Ok(Some(product)) => {
                self.lookup_error = None;
                self.product = Some(product);
            }
            Ok(None) => {
                self.product = None;
                self.lookup_error = Some(MSG_PRODUCT_NOT_REGISTERED.to_string());
            }
            Err(message) => {
                self.product = None;
                self.lookup_error = Some(message);
            }
        }
    }

    // =========================================================================
    // Cart Aggregator
    // =========================================================================

    /// Adds the resolved product to the purchase list.
    ///
    /// No-op without a resolved product. On success the scanned code and the
    /// product/error display are cleared, ready for the next scan.
    pub fn add_to_list(&mut self) -> CoreResult<()> {
        let Some(product) = self.product.clone() else {
            return Ok(());
        };

        self.cart.add(product)?;
        self.code.clear();
        self.product = None;
        self.lookup_error = None;
        Ok(())
    }

    /// Adjusts a line quantity by `delta`; a line reaching qty <= 0 is
    /// removed.
    pub fn change_qty(&mut self, product_id: i64, delta: i64) -> CoreResult<()> {
        self.cart.change_qty(product_id, delta)
    }

    /// Removes a line unconditionally; no-op when absent.
    pub fn remove_item(&mut self, product_id: i64) {
        self.cart.remove(product_id);
    }

    // =========================================================================
    // Purchase Submitter
    // =========================================================================

    /// Starts a purchase submission for the current list.
    ///
    /// Refuses (returns `None`) when the list is empty or a call is already
    /// outstanding. Clears any previous purchase error.
    pub fn begin_purchase(&mut self) -> Option<PurchaseDraft> {
        if self.loading || self.cart.is_empty() {
            return None;
        }

        self.purchase_error = None;
        self.loading = true;

        Some(PurchaseDraft {
            identity: self.identity.clone(),
            lines: self
                .cart
                .lines()
                .iter()
                .map(|l| (l.product.id, l.qty))
                .collect(),
        })
    }

    /// Feeds the purchase outcome back into the session.
    ///
    /// - Accepted: the settled total is captured for the result popup and
    ///   the list is cleared wholesale
    /// - Rejected or transport failure: the list is left intact and a
    ///   distinct purchase error is surfaced to the operator
    pub fn apply_purchase(&mut self, outcome: Result<PurchaseOutcome, String>) {
        self.loading = false;
        match outcome {
            Ok(PurchaseOutcome::Accepted { total }) => {
                self.settled_total = Some(total);
                self.cart.clear();
            }
            Ok(PurchaseOutcome::Rejected) => {
                self.purchase_error = Some("購入が受け付けられませんでした".to_string());
            }
            Err(message) => {
                self.purchase_error = Some(message);
            }
        }
    }

    /// Dismisses the settled-total popup.
    ///
    /// Clears the result display, the scanned code, and any resolved
    /// product/error, returning the session to a ready-to-scan state. The
    /// list is unaffected (it was already cleared on success). Bumps the
    /// lookup sequence so any still-in-flight lookup resolves stale.
    pub fn dismiss_result(&mut self) {
        self.settled_total = None;
        self.code.clear();
        self.product = None;
        self.lookup_error = None;
        self.lookup_seq += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn tea() -> Product {
        Product {
            id: 1,
            code: "4901777300446".to_string(),
            name: "お茶".to_string(),
            price: Money::from_yen(150),
        }
    }

    /// Drives one lookup to completion with the given outcome.
    fn resolve(session: &mut CheckoutSession, outcome: Result<Option<Product>, String>) {
        let (ticket, _code) = session.begin_lookup().expect("lookup should start");
        session.apply_lookup(ticket, outcome);
    }

    #[test]
    fn test_lookup_found() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");

        let (ticket, code) = session.begin_lookup().unwrap();
        assert_eq!(code, "4901777300446");
        assert!(session.is_loading());
        assert!(session.product().is_none());

        session.apply_lookup(ticket, Ok(Some(tea())));
        assert!(!session.is_loading());
        assert_eq!(session.product().unwrap().name, "お茶");
        assert!(session.lookup_error().is_none());
    }

    #[test]
    fn test_lookup_not_registered() {
        let mut session = CheckoutSession::new();
        session.set_code("0000000000000");
        resolve(&mut session, Ok(None));

        assert!(session.product().is_none());
        assert_eq!(session.lookup_error(), Some(MSG_PRODUCT_NOT_REGISTERED));
        // Cart untouched by a failed lookup
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_lookup_transport_failure_surfaces_message() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        resolve(&mut session, Err("connection refused".to_string()));

        assert!(session.product().is_none());
        assert_eq!(session.lookup_error(), Some("connection refused"));
    }

    #[test]
    fn test_lookup_refused_when_code_empty() {
        let mut session = CheckoutSession::new();
        assert!(session.begin_lookup().is_none());
        session.set_code("   ");
        assert!(session.begin_lookup().is_none());
    }

    #[test]
    fn test_lookup_refused_while_loading() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        let _ticket = session.begin_lookup().unwrap();

        // Second trigger while in flight is a no-op
        assert!(session.begin_lookup().is_none());
    }

    #[test]
    fn test_lookup_clears_previous_result_before_flight() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        assert!(session.product().is_some());

        // The moment a new lookup starts, the old product must be gone
        session.set_code("4901777300447");
        let _inflight = session.begin_lookup().unwrap();
        assert!(session.product().is_none());
        assert!(session.lookup_error().is_none());
    }

    #[test]
    fn test_stale_lookup_response_is_discarded() {
        let mut session = CheckoutSession::new();
        session.set_code("1111111111111");
        let (stale_ticket, _) = session.begin_lookup().unwrap();

        // The session moves on before the response lands
        session.dismiss_result();

        session.set_code("4901777300446");
        let (current_ticket, _) = session.begin_lookup().unwrap();

        // Late response for the first request must not overwrite anything,
        // including the loading flag of the newer request
        session.apply_lookup(stale_ticket, Ok(Some(tea())));
        assert!(session.product().is_none());
        assert!(session.is_loading());

        session.apply_lookup(current_ticket, Ok(Some(tea())));
        assert!(!session.is_loading());
        assert_eq!(session.product().unwrap().id, 1);
    }

    #[test]
    fn test_add_without_product_is_noop() {
        let mut session = CheckoutSession::new();
        session.add_to_list().unwrap();
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_clears_scan_state() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));

        session.add_to_list().unwrap();
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.code(), "");
        assert!(session.product().is_none());
        assert!(session.lookup_error().is_none());
    }

    #[test]
    fn test_repeated_add_merges() {
        let mut session = CheckoutSession::new();
        for _ in 0..2 {
            session.set_code("4901777300446");
            resolve(&mut session, Ok(Some(tea())));
            session.add_to_list().unwrap();
        }

        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().lines()[0].qty, 2);
    }

    #[test]
    fn test_purchase_refused_when_empty_or_loading() {
        let mut session = CheckoutSession::new();
        assert!(session.begin_purchase().is_none());

        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        session.add_to_list().unwrap();

        // In-flight lookup blocks purchase too (shared loading flag)
        session.set_code("4901777300447");
        let (ticket, _) = session.begin_lookup().unwrap();
        assert!(session.begin_purchase().is_none());
        session.apply_lookup(ticket, Ok(None));

        assert!(session.begin_purchase().is_some());
    }

    #[test]
    fn test_purchase_draft_contents() {
        let mut session = CheckoutSession::new();
        for _ in 0..2 {
            session.set_code("4901777300446");
            resolve(&mut session, Ok(Some(tea())));
            session.add_to_list().unwrap();
        }

        let draft = session.begin_purchase().unwrap();
        assert_eq!(draft.identity.employee_code, "EMP001");
        assert_eq!(draft.identity.store_code, "30");
        assert_eq!(draft.identity.pos_id, "90");
        assert_eq!(draft.lines, vec![(1, 2)]);
        assert!(session.is_loading());
    }

    #[test]
    fn test_purchase_accepted_clears_cart_and_shows_total() {
        let mut session = CheckoutSession::new();
        for _ in 0..2 {
            session.set_code("4901777300446");
            resolve(&mut session, Ok(Some(tea())));
            session.add_to_list().unwrap();
        }

        let _draft = session.begin_purchase().unwrap();
        session.apply_purchase(Ok(PurchaseOutcome::Accepted {
            total: Money::from_yen(330),
        }));

        assert!(!session.is_loading());
        assert_eq!(session.settled_total(), Some(Money::from_yen(330)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_purchase_rejected_keeps_cart() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        session.add_to_list().unwrap();

        let _draft = session.begin_purchase().unwrap();
        session.apply_purchase(Ok(PurchaseOutcome::Rejected));

        assert!(!session.is_loading());
        assert!(session.settled_total().is_none());
        assert_eq!(session.cart().len(), 1);
        assert!(session.purchase_error().is_some());
    }

    #[test]
    fn test_purchase_transport_failure_keeps_cart() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        session.add_to_list().unwrap();

        let _draft = session.begin_purchase().unwrap();
        session.apply_purchase(Err("connection reset".to_string()));

        assert!(!session.is_loading());
        assert_eq!(session.purchase_error(), Some("connection reset"));
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn test_dismiss_clears_scan_state_not_cart() {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        session.add_to_list().unwrap();

        let _draft = session.begin_purchase().unwrap();
        session.apply_purchase(Ok(PurchaseOutcome::Accepted {
            total: Money::from_yen(165),
        }));

        session.set_code("leftover");
        session.dismiss_result();

        assert!(session.settled_total().is_none());
        assert_eq!(session.code(), "");
        assert!(session.product().is_none());
        assert!(session.lookup_error().is_none());
        // Cart already cleared by the successful purchase, unaffected here
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_full_scenario() {
        // Scan お茶 twice, purchase, settled total ¥330
        let mut session = CheckoutSession::new();

        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        session.add_to_list().unwrap();

        session.set_code("4901777300446");
        resolve(&mut session, Ok(Some(tea())));
        session.add_to_list().unwrap();

        assert_eq!(session.cart().lines()[0].qty, 2);
        assert_eq!(session.cart().subtotal().yen(), 300);
        assert_eq!(session.cart().total().yen(), 330);

        let draft = session.begin_purchase().unwrap();
        assert_eq!(draft.lines, vec![(1, 2)]);

        session.apply_purchase(Ok(PurchaseOutcome::Accepted {
            total: Money::from_yen(330),
        }));
        assert_eq!(session.settled_total().unwrap().yen(), 330);
        assert!(session.cart().is_empty());

        session.dismiss_result();
        assert!(session.settled_total().is_none());
    }

    #[test]
    fn test_set_identity_requires_all_fields() {
        let mut session = CheckoutSession::new();
        let err = session.set_identity(TerminalIdentity {
            store_code: "".to_string(),
            pos_id: "90".to_string(),
            employee_code: "EMP001".to_string(),
        });
        assert!(err.is_err());

        session
            .set_identity(TerminalIdentity {
                store_code: "31".to_string(),
                pos_id: "91".to_string(),
                employee_code: "EMP002".to_string(),
            })
            .unwrap();
        assert_eq!(session.identity().store_code, "31");
    }
}
