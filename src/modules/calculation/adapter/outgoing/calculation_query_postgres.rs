use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::{Calculation, Operation};
use crate::modules::calculation::application::ports::outgoing::calculation_query::{
    CalculationQuery, CalculationQueryError, PageRequest, PageResult,
};

use super::sea_orm_entity::calculations::{Column, Entity, Model};

#[derive(Clone)]
pub struct CalculationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CalculationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn owned_by(owner: UserId) -> Select<Entity> {
        let owner_uuid: Uuid = owner.into();
        Entity::find().filter(Column::UserId.eq(owner_uuid))
    }
}

#[async_trait]
impl CalculationQuery for CalculationQueryPostgres {
    async fn get_by_id(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<Calculation, CalculationQueryError> {
        let model = Self::owned_by(owner)
            .filter(Column::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CalculationQueryError::NotFound)?;

        model_to_calculation(model)
    }

    async fn list(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Calculation>, CalculationQueryError> {
        let query = Self::owned_by(owner)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.skip)
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models_to_calculations(models)?,
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
        let models = Self::owned_by(owner)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models_to_calculations(models)
    }

    async fn all(&self, owner: UserId) -> Result<Vec<Calculation>, CalculationQueryError> {
        let models = Self::owned_by(owner)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models_to_calculations(models)
    }
}

fn map_db_err(e: DbErr) -> CalculationQueryError {
    CalculationQueryError::DatabaseError(e.to_string())
}

fn models_to_calculations(models: Vec<Model>) -> Result<Vec<Calculation>, CalculationQueryError> {
    models.into_iter().map(model_to_calculation).collect()
}

fn model_to_calculation(model: Model) -> Result<Calculation, CalculationQueryError> {
    let operation: Operation = model.operation.parse().map_err(|_| {
        CalculationQueryError::CorruptRow(format!(
            "calculation {} has unknown operation '{}'",
            model.id, model.operation
        ))
    })?;

    Ok(Calculation {
        id: model.id,
        owner: UserId::from(model.user_id),
        operation,
        operand1: model.operand1,
        operand2: model.operand2,
        result: model.result,
        created_at: model.created_at.with_timezone(&Utc),
    })
}
