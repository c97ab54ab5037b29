use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::outgoing::{
    CalculationQuery, CalculationQueryError, CalculationRepository, CalculationRepositoryError,
    NewCalculation, PageRequest, PageResult,
};

#[derive(Default)]
struct Inner {
    rows: Vec<Calculation>,
    /// When set, inserts for owners outside it fail like a foreign key would.
    known_owners: Option<HashSet<UserId>>,
}

/// Vec-backed store that honours the same ownership and ordering rules as the
/// Postgres adapters. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryCalculations {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryCalculations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known_owners(owners: impl IntoIterator<Item = UserId>) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().known_owners = Some(owners.into_iter().collect());
        store
    }

    pub fn register_owner(&self, owner: UserId) {
        if let Some(known) = self.inner.lock().unwrap().known_owners.as_mut() {
            known.insert(owner);
        }
    }

    /// Mirrors `ON DELETE CASCADE` when an owner is removed.
    pub fn remove_owner(&self, owner: UserId) {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.retain(|c| c.owner != owner);
        if let Some(known) = inner.known_owners.as_mut() {
            known.remove(&owner);
        }
    }

    pub fn seed(&self, calculation: Calculation) {
        self.inner.lock().unwrap().rows.push(calculation);
    }

    pub fn snapshot(&self) -> Vec<Calculation> {
        self.inner.lock().unwrap().rows.clone()
    }

    fn owned_oldest_first(&self, owner: UserId) -> Vec<Calculation> {
        let mut rows: Vec<Calculation> = self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        rows
    }
}

#[async_trait]
impl CalculationRepository for InMemoryCalculations {
    async fn insert(&self, data: NewCalculation) -> Result<Calculation, CalculationRepositoryError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(known) = &inner.known_owners {
            if !known.contains(&data.owner) {
                return Err(CalculationRepositoryError::OwnerNotFound);
            }
        }

        let calculation = Calculation {
            id: Uuid::new_v4(),
            owner: data.owner,
            operation: data.operation,
            operand1: data.operand1,
            operand2: data.operand2,
            result: data.result,
            created_at: Utc::now(),
        };
        inner.rows.push(calculation.clone());
        Ok(calculation)
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), CalculationRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|c| !(c.id == id && c.owner == owner));

        if inner.rows.len() == before {
            Err(CalculationRepositoryError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn delete_all_by_owner(&self, owner: UserId) -> Result<u64, CalculationRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|c| c.owner != owner);
        Ok((before - inner.rows.len()) as u64)
    }
}

#[async_trait]
impl CalculationQuery for InMemoryCalculations {
    async fn get_by_id(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<Calculation, CalculationQueryError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|c| c.id == id && c.owner == owner)
            .cloned()
            .ok_or(CalculationQueryError::NotFound)
    }

    async fn list(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Calculation>, CalculationQueryError> {
        let rows = self.owned_oldest_first(owner);
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect();

        Ok(PageResult {
            items,
            skip: page.skip,
            limit: page.limit,
            total,
        })
    }

    async fn recent(
        &self,
        owner: UserId,
        limit: u64,
    ) -> Result<Vec<Calculation>, CalculationQueryError> {
        let mut rows = self.owned_oldest_first(owner);
        rows.reverse();
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn all(&self, owner: UserId) -> Result<Vec<Calculation>, CalculationQueryError> {
        Ok(self.owned_oldest_first(owner))
    }
}
