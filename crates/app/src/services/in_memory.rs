//! In-memory persistence context used by the service tests.
//!
//! Mirrors the staging semantics of the real adapter: reads hit the shared
//! map immediately, writes are queued and applied on `complete`.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use catchup_domain::car::{Car, NewCar};
use catchup_domain::error::CatchUpError;
use catchup_domain::id::CarId;
use catchup_domain::time;

use crate::ports::{Change, Completion, PersistenceContext, Repository, UnitOfWork};

#[derive(Default)]
struct Shared {
    rows: BTreeMap<CarId, Car>,
    last_id: i64,
    commits: usize,
    lookups: usize,
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryContext {
    shared: Arc<Mutex<Shared>>,
}

impl InMemoryContext {
    /// Number of completed units of work.
    pub(crate) fn commits(&self) -> usize {
        self.shared.lock().unwrap().commits
    }

    /// Number of `find_by_id` calls served.
    pub(crate) fn lookups(&self) -> usize {
        self.shared.lock().unwrap().lookups
    }

    pub(crate) fn len(&self) -> usize {
        self.shared.lock().unwrap().rows.len()
    }

    pub(crate) fn get(&self, id: CarId) -> Option<Car> {
        self.shared.lock().unwrap().rows.get(&id).cloned()
    }
}

impl PersistenceContext for InMemoryContext {
    type UnitOfWork = InMemoryUnitOfWork;

    fn begin(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            shared: Arc::clone(&self.shared),
            cars: InMemoryCarRepository {
                shared: Arc::clone(&self.shared),
                pending: Vec::new(),
            },
        }
    }
}

pub(crate) struct InMemoryCarRepository {
    shared: Arc<Mutex<Shared>>,
    pending: Vec<Change<Car>>,
}

impl Repository<Car> for InMemoryCarRepository {
    fn add(&mut self, draft: NewCar) {
        self.pending.push(Change::Add(draft));
    }

    fn find_by_id(
        &self,
        id: CarId,
    ) -> impl Future<Output = Result<Option<Car>, CatchUpError>> + Send {
        let mut shared = self.shared.lock().unwrap();
        shared.lookups += 1;
        let result = shared.rows.get(&id).cloned();
        drop(shared);
        async { Ok(result) }
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<Car>, CatchUpError>> + Send {
        let result: Vec<Car> = self.shared.lock().unwrap().rows.values().cloned().collect();
        async { Ok(result) }
    }

    fn update(&mut self, entity: Car) {
        self.pending.push(Change::Update(entity));
    }

    fn remove(&mut self, entity: Car) {
        self.pending.push(Change::Remove(entity));
    }
}

pub(crate) struct InMemoryUnitOfWork {
    shared: Arc<Mutex<Shared>>,
    cars: InMemoryCarRepository,
}

impl UnitOfWork for InMemoryUnitOfWork {
    type Cars = InMemoryCarRepository;

    fn cars(&mut self) -> &mut InMemoryCarRepository {
        &mut self.cars
    }

    fn complete(self) -> impl Future<Output = Result<Completion<Car>, CatchUpError>> + Send {
        let mut shared = self.shared.lock().unwrap();
        shared.commits += 1;

        let mut affected = 0;
        let mut written = Vec::new();
        for change in self.cars.pending {
            match change {
                Change::Add(draft) => {
                    shared.last_id += 1;
                    let now = time::now();
                    let car = Car {
                        id: CarId::new(shared.last_id),
                        model: draft.model,
                        color: draft.color,
                        created_at: now,
                        updated_at: now,
                    };
                    shared.rows.insert(car.id, car.clone());
                    affected += 1;
                    written.push(car);
                }
                Change::Update(mut car) => {
                    if let Some(existing) = shared.rows.get_mut(&car.id) {
                        car.created_at = existing.created_at;
                        car.updated_at = time::now();
                        *existing = car.clone();
                        affected += 1;
                        written.push(car);
                    }
                }
                Change::Remove(car) => {
                    if shared.rows.remove(&car.id).is_some() {
                        affected += 1;
                    }
                }
            }
        }
        drop(shared);

        async move { Ok(Completion::new(affected, written)) }
    }
}
