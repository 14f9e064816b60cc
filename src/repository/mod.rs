//! Repository layer for snapshot persistence

pub mod checklists;
pub mod expenses;
pub mod itineraries;
pub mod preferences;
pub mod snapshot;
pub mod trips;

pub use snapshot::SnapshotStore;

/// Main repository struct holding the snapshot store
#[derive(Clone)]
pub struct Repository {
    pub store: SnapshotStore,
    pub trips: trips::TripsRepository,
    pub itineraries: itineraries::ItinerariesRepository,
    pub expenses: expenses::ExpensesRepository,
    pub checklists: checklists::ChecklistsRepository,
    pub preferences: preferences::PreferencesRepository,
}

impl Repository {
    /// Create a new repository with the given snapshot store
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            trips: trips::TripsRepository::new(store.clone()),
            itineraries: itineraries::ItinerariesRepository::new(store.clone()),
            expenses: expenses::ExpensesRepository::new(store.clone()),
            checklists: checklists::ChecklistsRepository::new(store.clone()),
            preferences: preferences::PreferencesRepository::new(store.clone()),
            store,
        }
    }
}
