use std::ops::{Deref, DerefMut};

use chrono::NaiveDate;

/// Explicit pricing context passed to every price computation. Replaces
/// any ambient per-request state: callers that need a different reference
/// date hand a modified context down the call chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceContext {
    purchase_date: Option<NaiveDate>,
}

impl PriceContext {
    /// Context with no purchase date; computations fall back to today.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context pinned to a known purchase date.
    pub fn with_purchase_date(purchase_date: NaiveDate) -> Self {
        Self {
            purchase_date: Some(purchase_date),
        }
    }

    /// The purchase date carried by the context, if any.
    pub fn purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }

    /// The date price validity is evaluated against: the purchase date
    /// when set, otherwise today.
    pub fn reference_date(&self) -> NaiveDate {
        self.purchase_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Temporarily override the purchase date. The previous value is
    /// restored when the returned guard is dropped, including on early
    /// returns.
    pub fn scoped_purchase_date(
        &mut self,
        purchase_date: Option<NaiveDate>,
    ) -> PurchaseDateGuard<'_> {
        let previous = std::mem::replace(&mut self.purchase_date, purchase_date);
        PurchaseDateGuard {
            context: self,
            previous,
        }
    }
}

/// Scope guard for a purchase date override on a [`PriceContext`].
pub struct PurchaseDateGuard<'a> {
    context: &'a mut PriceContext,
    previous: Option<NaiveDate>,
}

impl Deref for PurchaseDateGuard<'_> {
    type Target = PriceContext;

    fn deref(&self) -> &PriceContext {
        self.context
    }
}

impl DerefMut for PurchaseDateGuard<'_> {
    fn deref_mut(&mut self) -> &mut PriceContext {
        self.context
    }
}

impl Drop for PurchaseDateGuard<'_> {
    fn drop(&mut self) {
        self.context.purchase_date = self.previous;
    }
}
