//! # Wire Contracts
//!
//! Request/response body types for the two backend endpoints, with the
//! exact field names the backend expects.
//!
//! ## Purchase Submission
//! ```text
//! POST {base}/purchase
//! {
//!   "emp_cd":   "EMP001",
//!   "store_cd": "30",
//!   "pos_no":   "90",
//!   "items": [ { "prd_id": 1, "qty": 2 } ]
//! }
//!
//! → { "ok": true, "total": 330 }
//! ```
//!
//! The product-lookup response body deserializes directly into
//! [`regi_core::Product`] (`{ id, code, name, price }`); an empty or `null`
//! body means "not found", handled in the client.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use regi_core::{Money, PurchaseDraft};

// =============================================================================
// Purchase Request
// =============================================================================

/// One purchase line on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// Server-assigned product id.
    pub prd_id: i64,

    /// Quantity purchased.
    pub qty: i64,
}

/// The purchase submission body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Employee code of the operator.
    pub emp_cd: String,

    /// Store code.
    pub store_cd: String,

    /// POS terminal id.
    pub pos_no: String,

    /// Purchase lines, in list order.
    pub items: Vec<PurchaseLine>,
}

impl From<PurchaseDraft> for PurchaseRequest {
    fn from(draft: PurchaseDraft) -> Self {
        PurchaseRequest {
            emp_cd: draft.identity.employee_code,
            store_cd: draft.identity.store_code,
            pos_no: draft.identity.pos_id,
            items: draft
                .lines
                .into_iter()
                .map(|(prd_id, qty)| PurchaseLine { prd_id, qty })
                .collect(),
        }
    }
}

// =============================================================================
// Purchase Response
// =============================================================================

/// The purchase submission response.
///
/// `ok` is the acknowledgement flag; `total` is the settled tax-inclusive
/// amount and is only meaningful when `ok` is true.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PurchaseResponse {
    /// Explicit acknowledgement flag.
    #[serde(default)]
    pub ok: bool,

    /// Settled total in yen. The backend is loose here and may send a
    /// number or a numeric string; both are accepted.
    #[serde(default, deserialize_with = "deserialize_total")]
    pub total: Option<Money>,
}

/// Accepts `total` as a JSON number or a numeric string.
fn deserialize_total<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(value) = value else {
        return Ok(None);
    };

    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => {
            if let Some(yen) = n.as_i64() {
                return Ok(Some(Money::from_yen(yen)));
            }
            // Integral floats still coerce; anything fractional is a
            // malformed amount
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 => Ok(Some(Money::from_yen(f as i64))),
                _ => Err(de::Error::custom(format!("total is not a whole amount: {n}"))),
            }
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|yen| Some(Money::from_yen(yen)))
            .map_err(|_| de::Error::custom(format!("total is not numeric: {s:?}"))),
        other => Err(de::Error::custom(format!(
            "total has unexpected type: {other}"
        ))),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use regi_core::TerminalIdentity;

    #[test]
    fn test_purchase_request_wire_shape() {
        let request = PurchaseRequest {
            emp_cd: "EMP001".to_string(),
            store_cd: "30".to_string(),
            pos_no: "90".to_string(),
            items: vec![PurchaseLine { prd_id: 1, qty: 2 }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "emp_cd": "EMP001",
                "store_cd": "30",
                "pos_no": "90",
                "items": [ { "prd_id": 1, "qty": 2 } ]
            })
        );
    }

    #[test]
    fn test_request_from_draft() {
        let draft = PurchaseDraft {
            identity: TerminalIdentity::default(),
            lines: vec![(1, 2), (7, 1)],
        };

        let request = PurchaseRequest::from(draft);
        assert_eq!(request.emp_cd, "EMP001");
        assert_eq!(request.store_cd, "30");
        assert_eq!(request.pos_no, "90");
        assert_eq!(
            request.items,
            vec![
                PurchaseLine { prd_id: 1, qty: 2 },
                PurchaseLine { prd_id: 7, qty: 1 },
            ]
        );
    }

    #[test]
    fn test_response_total_as_number() {
        let response: PurchaseResponse =
            serde_json::from_str(r#"{"ok":true,"total":495}"#).unwrap();
        assert!(response.ok);
        assert_eq!(response.total, Some(Money::from_yen(495)));
    }

    #[test]
    fn test_response_total_as_string() {
        let response: PurchaseResponse =
            serde_json::from_str(r#"{"ok":true,"total":"495"}"#).unwrap();
        assert_eq!(response.total, Some(Money::from_yen(495)));
    }

    #[test]
    fn test_response_rejected() {
        let response: PurchaseResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert!(!response.ok);
        assert_eq!(response.total, None);

        // A body with no acknowledgement at all also reads as rejected
        let response: PurchaseResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!response.ok);
    }

    #[test]
    fn test_response_fractional_total_is_malformed() {
        let result = serde_json::from_str::<PurchaseResponse>(r#"{"ok":true,"total":495.5}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<PurchaseResponse>(r#"{"ok":true,"total":"abc"}"#);
        assert!(result.is_err());
    }
}
