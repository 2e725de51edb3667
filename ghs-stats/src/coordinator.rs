//! Last-write-wins publication of dashboard snapshots.
//!
//! The [`Coordinator`] owns the current [`FilterState`] and the most
//! recently published [`DashboardSnapshot`]. Each filter change is stamped
//! with a new generation number and returned as a [`Ticket`]. A snapshot
//! computed for a ticket is published only if no newer ticket has been
//! issued in the meantime; otherwise it is dropped. Readers therefore never
//! see results computed for a superseded filter state.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ghs_data::Dataset;
//! use ghs_stats::{Coordinator, FilterEvent, Metric};
//!
//! let dataset = Arc::new(Dataset::from_csv_str("\
//! country,disease_name,year,gender,mortality_rate,recovery_rate,incidence_rate,population_affected,treatment_type,healthcare_access,per_capita_income_usd,age_group,improvement_in_5_years
//! Italy,Cholera,2013,Male,7.2,82.1,12.4,471007,Medication,57.3,8908,0-18,2.3
//! ").unwrap());
//! let coordinator = Coordinator::new(dataset);
//!
//! let stale = coordinator.dispatch(FilterEvent::TrendMetric(Metric::RecoveryRate));
//! let fresh = coordinator.dispatch(FilterEvent::TrendMetric(Metric::IncidenceRate));
//! assert!(coordinator.compute(&stale).is_none());
//! assert!(coordinator.compute(&fresh).is_some());
//! ```

use crate::filter::{FilterEvent, FilterState};
use crate::snapshot::DashboardSnapshot;
use ghs_data::Dataset;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// A filter state stamped with the generation it was issued at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub filter: FilterState,
}

#[derive(Debug)]
struct Latest {
    generation: u64,
    filter: FilterState,
}

/// Coordinates filter changes and snapshot publication for one session.
#[derive(Debug)]
pub struct Coordinator {
    dataset: Arc<Dataset>,
    latest: Mutex<Latest>,
    published: RwLock<Option<Arc<DashboardSnapshot>>>,
}

impl Coordinator {
    /// Start a session with the default filter state and nothing published.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let filter = FilterState::for_dataset(&dataset);
        Self {
            dataset,
            latest: Mutex::new(Latest {
                generation: 0,
                filter,
            }),
            published: RwLock::new(None),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// The filter state of the most recently issued ticket.
    pub fn filter(&self) -> FilterState {
        self.lock_latest().filter.clone()
    }

    /// A ticket for the current filter state without changing it.
    pub fn current_ticket(&self) -> Ticket {
        let latest = self.lock_latest();
        Ticket {
            generation: latest.generation,
            filter: latest.filter.clone(),
        }
    }

    /// Apply one user interaction and issue a ticket for the new state.
    pub fn dispatch(&self, event: FilterEvent) -> Ticket {
        let mut latest = self.lock_latest();
        let filter = latest.filter.apply(event);
        Self::issue(&mut latest, filter)
    }

    /// Replace the whole filter state and issue a ticket for it.
    pub fn submit(&self, filter: FilterState) -> Ticket {
        let mut latest = self.lock_latest();
        Self::issue(&mut latest, filter)
    }

    fn issue(latest: &mut Latest, filter: FilterState) -> Ticket {
        latest.generation += 1;
        latest.filter = filter;
        Ticket {
            generation: latest.generation,
            filter: latest.filter.clone(),
        }
    }

    /// True when no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.lock_latest().generation == ticket.generation
    }

    /// Compute the snapshot for `ticket` and publish it if still current.
    ///
    /// Reuses unaffected panels of the last published snapshot. Returns
    /// `None` when the ticket was superseded before or during computation.
    pub fn compute(&self, ticket: &Ticket) -> Option<Arc<DashboardSnapshot>> {
        if !self.is_current(ticket) {
            log::debug!(
                "[GHS] coordinator: skipping superseded generation {}",
                ticket.generation
            );
            return None;
        }
        let snapshot = match self.current() {
            Some(previous) => previous.update(&self.dataset, &ticket.filter, ticket.generation),
            None => DashboardSnapshot::compute(&self.dataset, &ticket.filter, ticket.generation),
        };
        self.publish(snapshot)
    }

    /// Publish `snapshot` if its generation is still the latest issued.
    pub fn publish(&self, snapshot: DashboardSnapshot) -> Option<Arc<DashboardSnapshot>> {
        // Holding `latest` keeps a dispatch from slipping in between the
        // generation check and the write.
        let latest = self.lock_latest();
        if snapshot.generation != latest.generation {
            log::debug!(
                "[GHS] coordinator: discarding stale generation {} (latest {})",
                snapshot.generation,
                latest.generation
            );
            return None;
        }
        let snapshot = Arc::new(snapshot);
        let mut published = self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *published = Some(Arc::clone(&snapshot));
        log::info!(
            "[GHS] coordinator: published generation {} ({} rows)",
            snapshot.generation,
            snapshot.filtered_rows
        );
        Some(snapshot)
    }

    /// The most recently published snapshot, if any.
    pub fn current(&self) -> Option<Arc<DashboardSnapshot>> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lock_latest(&self) -> MutexGuard<'_, Latest> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
