//! Service implementation.
//!
//! Business logic implementations for the TransportOrderService type.
//! Every mutation is applied to a copy of the order list, persisted, and
//! only then published, so readers never observe a state the storage slot
//! does not hold.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::super::types::{
    basic_types::{DeliveryId, PaymentStatus, TransportOrderId, TransportStatus},
    main_order_types::{TransportOrder, TransportOrderDraft, ValidatedOrder},
    service_types::{OrderFilter, OrderPage, PaymentFilter, TransportOrderService},
};
use super::validator::TransportOrderValidator;
use crate::{
    errors::TransportError,
    implementation::storage::{OrderStore, load_orders, save_orders},
    types::TransportConfig,
};

impl<S: OrderStore> TransportOrderService<S> {
    /// Opens the service, reading the order list from the configured slot.
    pub fn open(store: S, config: TransportConfig) -> Result<Self, TransportError> {
        let orders = load_orders(&store, &config.storage_key, config.seed_sample_order)?;
        Ok(Self { store, orders: Arc::new(Mutex::new(orders)), config })
    }

    /// Service configuration.
    #[must_use]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validator configured for this service.
    #[must_use]
    pub fn validator(&self) -> TransportOrderValidator {
        TransportOrderValidator::with_district_catalog(self.config.enforce_district_catalog)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<TransportOrder>>, TransportError> {
        self.orders.lock().map_err(|_| TransportError::LockError)
    }

    /// Persists `next` and publishes it as the current list.
    fn commit(
        &self, current: &mut MutexGuard<'_, Vec<TransportOrder>>, next: Vec<TransportOrder>,
    ) -> Result<(), TransportError> {
        save_orders(&self.store, &self.config.storage_key, &next)?;
        **current = next;
        Ok(())
    }

    fn validate(&self, draft: &TransportOrderDraft) -> Result<ValidatedOrder, TransportError> {
        self.validator().validate(draft).map_err(|err| {
            debug!(error = %err, "transport order draft rejected");
            TransportError::Validation(err)
        })
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Snapshot of all orders in insertion order.
    pub fn list(&self) -> Result<Vec<TransportOrder>, TransportError> {
        Ok(self.lock()?.clone())
    }

    /// Number of orders.
    pub fn len(&self) -> Result<usize, TransportError> {
        Ok(self.lock()?.len())
    }

    /// Whether there are no orders.
    pub fn is_empty(&self) -> Result<bool, TransportError> {
        Ok(self.lock()?.is_empty())
    }

    /// Gets an order by ID.
    pub fn get(&self, id: &TransportOrderId) -> Result<TransportOrder, TransportError> {
        self.lock()?
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| TransportError::OrderNotFound(id.0.clone()))
    }

    /// Display code the next created order will receive.
    pub fn next_order_code(&self) -> Result<String, TransportError> {
        let count = self.lock()?.len();
        Ok(self.config.order_code(count + 1))
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Validates a draft and appends it as a new confirmed order dated today.
    pub fn create(&self, draft: &TransportOrderDraft) -> Result<TransportOrder, TransportError> {
        self.create_dated(draft, Local::now().date_naive())
    }

    /// Validates a draft and appends it as a new confirmed order.
    pub fn create_dated(
        &self, draft: &TransportOrderDraft, created_date: NaiveDate,
    ) -> Result<TransportOrder, TransportError> {
        let validated = self.validate(draft)?;

        let mut orders = self.lock()?;
        // Codes follow the list length, so a deletion can lead to a reused code.
        let order_code = self.config.order_code(orders.len() + 1);
        let order = validated.into_order(
            TransportOrderId::generate(),
            order_code,
            TransportStatus::Confirmed,
            created_date,
        );

        let mut next = orders.clone();
        next.push(order.clone());
        self.commit(&mut orders, next)?;

        info!(
            id = %order.id,
            order_code = %order.order_id,
            deliveries = order.deliveries.len(),
            total_packages = order.total_packages,
            "transport order created"
        );
        Ok(order)
    }

    /// Validates a draft and replaces the editable fields of an order.
    ///
    /// ID, display code, status and creation date are kept.
    pub fn update(
        &self, id: &TransportOrderId, draft: &TransportOrderDraft,
    ) -> Result<TransportOrder, TransportError> {
        let validated = self.validate(draft)?;

        let mut orders = self.lock()?;
        let idx = position(&orders, id)?;
        let existing = &orders[idx];
        let updated = validated.into_order(
            existing.id.clone(),
            existing.order_id.clone(),
            existing.status,
            existing.created_date,
        );

        let mut next = orders.clone();
        next[idx] = updated.clone();
        self.commit(&mut orders, next)?;

        info!(id = %updated.id, order_code = %updated.order_id, "transport order updated");
        Ok(updated)
    }

    /// Removes an order and returns it.
    pub fn delete(&self, id: &TransportOrderId) -> Result<TransportOrder, TransportError> {
        let mut orders = self.lock()?;
        let idx = position(&orders, id)?;

        let mut next = orders.clone();
        let removed = next.remove(idx);
        self.commit(&mut orders, next)?;

        info!(id = %removed.id, order_code = %removed.order_id, "transport order deleted");
        Ok(removed)
    }

    /// Sets the dispatch status. Any status may follow any other.
    pub fn update_status(
        &self, id: &TransportOrderId, status: TransportStatus,
    ) -> Result<TransportOrder, TransportError> {
        let mut orders = self.lock()?;
        let idx = position(&orders, id)?;

        let mut next = orders.clone();
        let previous = next[idx].status;
        next[idx].status = status;
        let updated = next[idx].clone();
        self.commit(&mut orders, next)?;

        info!(
            id = %updated.id,
            from = %previous,
            to = %status,
            "transport order status changed"
        );
        Ok(updated)
    }

    /// Sets the payment status of one delivery.
    pub fn update_payment_status(
        &self, order_id: &TransportOrderId, delivery_id: &DeliveryId, status: PaymentStatus,
    ) -> Result<TransportOrder, TransportError> {
        let mut orders = self.lock()?;
        let idx = position(&orders, order_id)?;

        let mut next = orders.clone();
        let delivery = next[idx]
            .deliveries
            .iter_mut()
            .find(|d| &d.id == delivery_id)
            .ok_or_else(|| TransportError::DeliveryNotFound {
                scope:       order_id.0.clone(),
                delivery_id: delivery_id.0.clone(),
            })?;
        delivery.payment_status = status;
        let updated = next[idx].clone();
        self.commit(&mut orders, next)?;

        info!(
            id = %updated.id,
            delivery = %delivery_id,
            payment = %status,
            "delivery payment status changed"
        );
        Ok(updated)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Orders matching a filter, in insertion order.
    pub fn search(&self, filter: &OrderFilter) -> Result<Vec<TransportOrder>, TransportError> {
        let orders = self.lock()?;
        Ok(orders.iter().filter(|o| matches_filter(o, filter)).cloned().collect())
    }

    /// One page of orders matching a filter.
    ///
    /// Pages are 1-based and the requested page is clamped into range. A
    /// `per_page` of zero uses the configured default page size.
    pub fn page(
        &self, filter: &OrderFilter, page: usize, per_page: usize,
    ) -> Result<OrderPage, TransportError> {
        let per_page = if per_page == 0 { self.config.default_page_size.max(1) } else { per_page };
        let matching = self.search(filter)?;
        let total_count = matching.len();
        let total_pages = total_count.div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));

        let orders = matching.into_iter().skip((page - 1) * per_page).take(per_page).collect();

        Ok(OrderPage { orders, page, per_page, total_pages, total_count })
    }
}

fn position(orders: &[TransportOrder], id: &TransportOrderId) -> Result<usize, TransportError> {
    orders
        .iter()
        .position(|o| &o.id == id)
        .ok_or_else(|| TransportError::OrderNotFound(id.0.clone()))
}

/// Matches an order against a filter.
fn matches_filter(order: &TransportOrder, filter: &OrderFilter) -> bool {
    if let Some(term) = &filter.search
        && !order.matches_search(term)
    {
        return false;
    }

    if let Some(status) = filter.status
        && order.status != status
    {
        return false;
    }

    match filter.payment {
        PaymentFilter::All => true,
        PaymentFilter::Paid => order.is_fully_paid(),
        PaymentFilter::Unpaid => order.has_unpaid_delivery(),
    }
}
