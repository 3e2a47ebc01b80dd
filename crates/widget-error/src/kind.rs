//! The closed checkout error taxonomy.
//!
//! ```text
//! WidgetError
//! ├─ SupplierError
//! │   ├─ NotManufacturedError
//! │   ├─ ProductionDelayedError
//! │   └─ ShippingDelayedError
//! └─ CheckoutError
//!     ├─ InventoryError
//!     │   └─ OutOfStockError
//!     └─ PricingError
//!         ├─ InvalidCouponCodeError
//!         └─ NoStackCouponError
//! ```
//!
//! Every kind inherits the root's `500 Internal Server Error` unless its row in
//! the defaults table says otherwise. Only the coupon errors are client-caused.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{WidgetError, WidgetErrorBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    WidgetError,
    SupplierError,
    NotManufacturedError,
    ProductionDelayedError,
    ShippingDelayedError,
    CheckoutError,
    InventoryError,
    OutOfStockError,
    PricingError,
    InvalidCouponCodeError,
    NoStackCouponError,
}

/// Fixed metadata attached to every [`ErrorKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindDefaults {
    pub severity: StatusCode,
    pub internal_message: &'static str,
    pub user_message: &'static str,
}

const fn defaults(internal_message: &'static str, user_message: &'static str) -> KindDefaults {
    KindDefaults {
        severity: StatusCode::INTERNAL_SERVER_ERROR,
        internal_message,
        user_message,
    }
}

const fn client_defaults(internal_message: &'static str, user_message: &'static str) -> KindDefaults {
    KindDefaults {
        severity: StatusCode::BAD_REQUEST,
        internal_message,
        user_message,
    }
}

// Indexed by `ErrorKind as usize`; order must follow the enum declaration.
static DEFAULTS: [KindDefaults; ErrorKind::ALL.len()] = [
    defaults("Generic widget exception.", "Internal error."),
    defaults("Exception occurred on the supplier's end.", "Supplier error."),
    defaults("Product is no longer manufactured.", "Product no longer manufactured."),
    defaults("Production of the product is delayed.", "Production delayed."),
    defaults("Shipping of the product is delayed.", "Shipping delayed."),
    defaults("Error during the checkout process.", "Checkout error."),
    defaults("Inventory error.", "Inventory error."),
    defaults("Item is out of stock.", "Item out of stock."),
    defaults("Pricing error.", "Pricing error."),
    client_defaults("Coupon code is invalid.", "Invalid coupon code."),
    client_defaults(
        "Coupon can not be stacked with other coupons.",
        "Cannot stack coupon.",
    ),
];

impl ErrorKind {
    /// Every kind, root first, in pre-order.
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::WidgetError,
        ErrorKind::SupplierError,
        ErrorKind::NotManufacturedError,
        ErrorKind::ProductionDelayedError,
        ErrorKind::ShippingDelayedError,
        ErrorKind::CheckoutError,
        ErrorKind::InventoryError,
        ErrorKind::OutOfStockError,
        ErrorKind::PricingError,
        ErrorKind::InvalidCouponCodeError,
        ErrorKind::NoStackCouponError,
    ];

    /// Tag name, as reported in payloads and diagnostic logs.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::WidgetError => "WidgetError",
            ErrorKind::SupplierError => "SupplierError",
            ErrorKind::NotManufacturedError => "NotManufacturedError",
            ErrorKind::ProductionDelayedError => "ProductionDelayedError",
            ErrorKind::ShippingDelayedError => "ShippingDelayedError",
            ErrorKind::CheckoutError => "CheckoutError",
            ErrorKind::InventoryError => "InventoryError",
            ErrorKind::OutOfStockError => "OutOfStockError",
            ErrorKind::PricingError => "PricingError",
            ErrorKind::InvalidCouponCodeError => "InvalidCouponCodeError",
            ErrorKind::NoStackCouponError => "NoStackCouponError",
        }
    }

    pub fn defaults(self) -> &'static KindDefaults {
        &DEFAULTS[self as usize]
    }

    pub fn severity(self) -> StatusCode {
        self.defaults().severity
    }

    pub fn default_internal_message(self) -> &'static str {
        self.defaults().internal_message
    }

    pub fn default_user_message(self) -> &'static str {
        self.defaults().user_message
    }

    /// Direct parent in the taxonomy; `None` for the root.
    pub fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::WidgetError => None,
            ErrorKind::SupplierError | ErrorKind::CheckoutError => Some(ErrorKind::WidgetError),
            ErrorKind::NotManufacturedError
            | ErrorKind::ProductionDelayedError
            | ErrorKind::ShippingDelayedError => Some(ErrorKind::SupplierError),
            ErrorKind::InventoryError | ErrorKind::PricingError => Some(ErrorKind::CheckoutError),
            ErrorKind::OutOfStockError => Some(ErrorKind::InventoryError),
            ErrorKind::InvalidCouponCodeError | ErrorKind::NoStackCouponError => {
                Some(ErrorKind::PricingError)
            }
        }
    }

    /// Walks from the direct parent up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = ErrorKind> {
        std::iter::successors(self.parent(), |k| k.parent())
    }

    /// Reflexive subtype test: a kind `is_a` itself and each of its ancestors.
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        self == ancestor || self.ancestors().any(|k| k == ancestor)
    }

    pub fn children(self) -> impl Iterator<Item = ErrorKind> {
        Self::ALL
            .into_iter()
            .filter(move |k| k.parent() == Some(self))
    }

    pub fn is_leaf(self) -> bool {
        self.children().next().is_none()
    }

    /// Construct an instance of this kind with default messages.
    #[track_caller]
    pub fn error(self) -> WidgetError {
        WidgetError::new(self)
    }

    pub fn builder(self) -> WidgetErrorBuilder {
        WidgetError::builder(self)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_table_follows_declaration_order() {
        for (i, kind) in ErrorKind::ALL.into_iter().enumerate() {
            assert_eq!(kind as usize, i, "{kind} out of place in ALL");
        }
    }

    #[test]
    fn only_coupon_errors_are_client_errors() {
        let client: Vec<_> = ErrorKind::ALL
            .into_iter()
            .filter(|k| k.severity() == StatusCode::BAD_REQUEST)
            .collect();
        assert_eq!(
            client,
            vec![ErrorKind::InvalidCouponCodeError, ErrorKind::NoStackCouponError]
        );
        let server = ErrorKind::ALL
            .into_iter()
            .filter(|k| k.severity() == StatusCode::INTERNAL_SERVER_ERROR)
            .count();
        assert_eq!(server, 9);
    }

    #[test]
    fn hierarchy_queries() {
        assert_eq!(ErrorKind::WidgetError.parent(), None);
        assert!(ErrorKind::OutOfStockError.is_a(ErrorKind::CheckoutError));
        assert!(ErrorKind::OutOfStockError.is_a(ErrorKind::OutOfStockError));
        assert!(!ErrorKind::OutOfStockError.is_a(ErrorKind::SupplierError));
        assert!(!ErrorKind::CheckoutError.is_a(ErrorKind::PricingError));

        let chain: Vec<_> = ErrorKind::NoStackCouponError.ancestors().collect();
        assert_eq!(
            chain,
            vec![
                ErrorKind::PricingError,
                ErrorKind::CheckoutError,
                ErrorKind::WidgetError
            ]
        );

        let supplier: Vec<_> = ErrorKind::SupplierError.children().collect();
        assert_eq!(supplier.len(), 3);
        assert!(ErrorKind::ShippingDelayedError.is_leaf());
        assert!(!ErrorKind::InventoryError.is_leaf());
    }

    #[test]
    fn every_kind_descends_from_root() {
        for kind in ErrorKind::ALL {
            assert!(kind.is_a(ErrorKind::WidgetError));
        }
    }

    #[test]
    fn display_is_tag_name() {
        assert_eq!(ErrorKind::PricingError.to_string(), "PricingError");
    }
}
