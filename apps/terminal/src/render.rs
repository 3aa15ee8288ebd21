//! # Screen Rendering
//!
//! Pure formatters turning session state into terminal text. Nothing here
//! touches I/O, so every screen is testable as a plain string.

use regi_core::{Cart, CheckoutSession, Money};

/// Renders the full register screen for the current session state.
pub fn screen(session: &CheckoutSession) -> String {
    if let Some(total) = session.settled_total() {
        return settled_popup(total);
    }

    let mut out = String::new();
    out.push_str(&product_slot(session));
    out.push('\n');
    out.push_str(&purchase_list(session.cart()));
    if let Some(message) = session.purchase_error() {
        out.push('\n');
        out.push_str(&format!("!! {message}"));
    }
    out
}

/// The product display slot: the resolved product, the lookup error, or a
/// scan prompt. One slot, mutually exclusive contents.
pub fn product_slot(session: &CheckoutSession) -> String {
    if session.is_loading() {
        return "通信中...".to_string();
    }
    if let Some(product) = session.product() {
        return format!("{}  {}", product.name, product.price);
    }
    if let Some(message) = session.lookup_error() {
        return format!("!! {message}");
    }
    "コードをスキャンしてください (scan <code>)".to_string()
}

/// The purchase list with live derived totals.
pub fn purchase_list(cart: &Cart) -> String {
    let mut out = String::new();
    out.push_str("購入リスト\n");
    out.push_str("  商品名            数量  単価    小計\n");

    if cart.is_empty() {
        out.push_str("  (空)\n");
    } else {
        for line in cart.lines() {
            out.push_str(&format!(
                "  [{}] {}  x{}  {}  {}\n",
                line.product.id,
                line.product.name,
                line.qty,
                line.product.price,
                line.line_total(),
            ));
        }
    }

    out.push_str(&format!(
        "  小計 {}   消費税 {}   合計 {}",
        cart.subtotal(),
        cart.tax(),
        cart.total(),
    ));
    out
}

/// The settled-total popup shown after a successful purchase.
pub fn settled_popup(total: Money) -> String {
    format!(
        "┌──────────────────────────────┐\n\
         │  購入が完了しました          │\n\
         │  合計金額（税込） {total}\n\
         └──────────────────────────────┘\n\
         (ok で閉じる)"
    )
}

/// The identity line shown by the `id` command.
pub fn identity_line(session: &CheckoutSession) -> String {
    let id = session.identity();
    format!(
        "店舗 {} / POS {} / 担当 {}",
        id.store_code, id.pos_id, id.employee_code
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use regi_core::Product;

    fn session_with_tea() -> CheckoutSession {
        let mut session = CheckoutSession::new();
        session.set_code("4901777300446");
        let (ticket, _) = session.begin_lookup().unwrap();
        session.apply_lookup(
            ticket,
            Ok(Some(Product {
                id: 1,
                code: "4901777300446".to_string(),
                name: "お茶".to_string(),
                price: Money::from_yen(150),
            })),
        );
        session
    }

    #[test]
    fn test_product_slot_shows_name_and_price() {
        let session = session_with_tea();
        assert_eq!(product_slot(&session), "お茶  ¥150");
    }

    #[test]
    fn test_product_slot_shows_lookup_error() {
        let mut session = CheckoutSession::new();
        session.set_code("0000000000000");
        let (ticket, _) = session.begin_lookup().unwrap();
        session.apply_lookup(ticket, Ok(None));
        assert_eq!(product_slot(&session), "!! 商品がマスタ未登録です");
    }

    #[test]
    fn test_empty_list_renders_zero_totals() {
        let rendered = purchase_list(&Cart::new());
        assert!(rendered.contains("(空)"));
        assert!(rendered.contains("小計 ¥0   消費税 ¥0   合計 ¥0"));
    }

    #[test]
    fn test_list_totals() {
        // Two units of the same product on one line
        let mut session = CheckoutSession::new();
        for _ in 0..2 {
            session.set_code("4901777300446");
            let (ticket, _) = session.begin_lookup().unwrap();
            session.apply_lookup(
                ticket,
                Ok(Some(Product {
                    id: 1,
                    code: "4901777300446".to_string(),
                    name: "お茶".to_string(),
                    price: Money::from_yen(150),
                })),
            );
            session.add_to_list().unwrap();
        }

        let rendered = purchase_list(session.cart());
        assert!(rendered.contains("お茶  x2  ¥150  ¥300"));
        assert!(rendered.contains("小計 ¥300   消費税 ¥30   合計 ¥330"));
    }

    #[test]
    fn test_settled_popup_shows_total() {
        let popup = settled_popup(Money::from_yen(495));
        assert!(popup.contains("合計金額（税込） ¥495"));
    }

    #[test]
    fn test_screen_prefers_popup() {
        let mut session = session_with_tea();
        session.add_to_list().unwrap();
        let _draft = session.begin_purchase().unwrap();
        session.apply_purchase(Ok(regi_core::PurchaseOutcome::Accepted {
            total: Money::from_yen(165),
        }));

        let rendered = screen(&session);
        assert!(rendered.contains("合計金額（税込） ¥165"));
        assert!(!rendered.contains("購入リスト"));
    }

    #[test]
    fn test_identity_line() {
        let session = CheckoutSession::new();
        assert_eq!(identity_line(&session), "店舗 30 / POS 90 / 担当 EMP001");
    }
}
