use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::outgoing::calculation_repository::{
    CalculationRepository, CalculationRepositoryError, NewCalculation,
};
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

use super::sea_orm_entity::calculations::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct CalculationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CalculationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CalculationRepository for CalculationRepositoryPostgres {
    async fn insert(&self, data: NewCalculation) -> Result<Calculation, CalculationRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            operation: Set(data.operation.as_str().to_string()),
            operand1: Set(data.operand1),
            operand2: Set(data.operand2),
            result: Set(data.result),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        Ok(Calculation {
            id: inserted.id,
            owner: UserId::from(inserted.user_id),
            operation: data.operation,
            operand1: inserted.operand1,
            operand2: inserted.operand2,
            result: inserted.result,
            created_at: inserted.created_at.with_timezone(&Utc),
        })
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), CalculationRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let res = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CalculationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_all_by_owner(&self, owner: UserId) -> Result<u64, CalculationRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let res = Entity::delete_many()
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected)
    }
}

fn map_insert_err(e: DbErr) -> CalculationRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::ForeignKey(_)) => CalculationRepositoryError::OwnerNotFound,
        _ => map_db_err(e),
    }
}

fn map_db_err(e: DbErr) -> CalculationRepositoryError {
    CalculationRepositoryError::DatabaseError(e.to_string())
}
