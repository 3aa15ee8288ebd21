//! # Validation Module
//!
//! Input validation utilities for Regi POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal input parsing (apps/terminal)                        │
//! │  ├── Token counts, integer parsing                                      │
//! │  └── Immediate operator feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                        │
//! │  ├── Scan code shape, identity presence, quantity bounds                │
//! │  └── Called from the session before state changes                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend (product master, transaction store)                   │
//! │  └── Authoritative checks; its verdict wins                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::TerminalIdentity;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a scan code before a lookup is issued.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
///
/// The backend decides whether the code exists; this only rejects input
/// that could never be a code.
pub fn validate_scan_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates terminal identity: presence of all three fields.
///
/// Free-text beyond that; no format checks.
pub fn validate_identity(identity: &TerminalIdentity) -> ValidationResult<()> {
    let fields = [
        ("store_code", &identity.store_code),
        ("pos_id", &identity.pos_id),
        ("employee_code", &identity.employee_code),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: name.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
