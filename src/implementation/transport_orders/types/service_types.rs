//! Service types for transport orders.
//!
//! The order service owns the order list and the storage slot it is
//! persisted to; the filter and page types drive the order table.

use std::sync::{Arc, Mutex};

use super::{basic_types::TransportStatus, main_order_types::TransportOrder};
use crate::{implementation::storage::OrderStore, types::TransportConfig};

/// Transport order repository service.
#[derive(Debug)]
pub struct TransportOrderService<S: OrderStore> {
    /// Persistence slot backend.
    pub(crate) store:  S,
    /// Orders in insertion order.
    pub(crate) orders: Arc<Mutex<Vec<TransportOrder>>>,
    /// Service configuration.
    pub(crate) config: TransportConfig,
}

/// Payment filter over an order's deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    /// No payment filtering.
    #[default]
    All,
    /// Every delivery is paid.
    Paid,
    /// At least one delivery is unpaid.
    Unpaid,
}

/// Order table filter.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive substring of the order code or driver name.
    pub search:  Option<String>,
    /// Filter by status.
    pub status:  Option<TransportStatus>,
    /// Filter by payment state.
    pub payment: PaymentFilter,
}

impl OrderFilter {
    /// Creates an empty filter matching every order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub fn with_status(mut self, status: TransportStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the payment filter.
    #[must_use]
    pub fn with_payment(mut self, payment: PaymentFilter) -> Self {
        self.payment = payment;
        self
    }
}

/// One page of filtered orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPage {
    /// Orders on this page.
    pub orders:      Vec<TransportOrder>,
    /// 1-based page number after clamping.
    pub page:        usize,
    /// Page size.
    pub per_page:    usize,
    /// Number of pages; zero when nothing matches.
    pub total_pages: usize,
    /// Number of matching orders.
    pub total_count: usize,
}
