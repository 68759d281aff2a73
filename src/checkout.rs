//! Simulated payment flow.
//!
//! A three-state linear machine standing in for a real payment gateway:
//! `Idle -> Processing -> Succeeded`. The simulation never fails and offers
//! no cancellation once processing begins. The cart is cleared exactly on
//! the `Processing -> Succeeded` edge, never earlier, and the final step
//! yields a redirect back to the catalog root.

use crate::cart::CartStore;
use crate::error::{Result, StoreError};
use crate::storage::KeyValueStore;
use std::thread;
use std::time::Duration;

/// Where the UI should navigate after a checkout step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The catalog root (`/`).
    CatalogRoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Waiting for the user to trigger payment.
    Idle,
    /// Payment in flight; not cancellable.
    Processing,
    /// Payment settled and cart cleared.
    Succeeded,
}

/// One checkout attempt for one user's cart.
///
/// Delays are injected by the builder (2 s each by default, matching the
/// original's fixed `setTimeout`s) so tests can run with zero delay.
pub struct CheckoutSimulator<'a> {
    cart: CartStore<'a>,
    username: String,
    state: CheckoutState,
    processing_delay: Duration,
    redirect_delay: Duration,
}

impl<'a> CheckoutSimulator<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        username: &str,
        processing_delay: Duration,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            cart: CartStore::new(store),
            username: username.to_string(),
            state: CheckoutState::Idle,
            processing_delay,
            redirect_delay,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// `Idle -> Processing`. No side effects yet.
    pub fn begin(&mut self) -> Result<()> {
        if self.state != CheckoutState::Idle {
            return Err(StoreError::InvalidState(
                "payment already initiated".to_string(),
            ));
        }
        self.state = CheckoutState::Processing;
        log::debug!("checkout for {}: processing", self.username);
        Ok(())
    }

    /// `Processing -> Succeeded`: wait out the processing delay, then clear
    /// the user's cart.
    pub fn settle(&mut self) -> Result<()> {
        if self.state != CheckoutState::Processing {
            return Err(StoreError::InvalidState(
                "no payment in flight".to_string(),
            ));
        }
        thread::sleep(self.processing_delay);
        self.cart.clear(&self.username)?;
        self.state = CheckoutState::Succeeded;
        log::debug!("checkout for {}: succeeded, cart cleared", self.username);
        Ok(())
    }

    /// Wait out the post-success delay and return the catalog redirect.
    pub fn finish(&mut self) -> Result<Redirect> {
        if self.state != CheckoutState::Succeeded {
            return Err(StoreError::InvalidState(
                "payment has not succeeded".to_string(),
            ));
        }
        thread::sleep(self.redirect_delay);
        Ok(Redirect::CatalogRoot)
    }

    /// Run the whole flow: begin, settle, finish.
    pub fn pay(&mut self) -> Result<Redirect> {
        self.begin()?;
        self.settle()?;
        self.finish()
    }
}
