use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserError, FetchUserOutput, FetchUserProfileUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationCommand, CreateCalculationError, CreateCalculationUseCase,
    DeleteCalculationError, DeleteCalculationUseCase, GetCalculationsError,
    GetCalculationsUseCase, GetSingleCalculationError, GetSingleCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::{PageRequest, PageResult};
use crate::modules::history::application::domain::statistics::CalculationStatistics;
use crate::modules::history::application::ports::incoming::use_cases::{
    CalculationHistory, ClearHistoryError, ClearHistoryUseCase, GetHistoryError,
    GetHistoryUseCase, GetStatisticsError, GetStatisticsUseCase, HistoryRequest,
};

// Placeholders for the slots a test does not exercise.

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, user_id: UserId) -> Result<FetchUserOutput, FetchUserError> {
        Err(FetchUserError::UserNotFound(user_id))
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCalculationUseCase;

#[async_trait]
impl CreateCalculationUseCase for StubCreateCalculationUseCase {
    async fn execute(
        &self,
        _command: CreateCalculationCommand,
    ) -> Result<Calculation, CreateCalculationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCalculationsUseCase;

#[async_trait]
impl GetCalculationsUseCase for StubGetCalculationsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Calculation>, GetCalculationsError> {
        Ok(PageResult {
            items: vec![],
            skip: page.skip,
            limit: page.limit,
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleCalculationUseCase;

#[async_trait]
impl GetSingleCalculationUseCase for StubGetSingleCalculationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
    ) -> Result<Calculation, GetSingleCalculationError> {
        Err(GetSingleCalculationError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCalculationUseCase;

#[async_trait]
impl DeleteCalculationUseCase for StubDeleteCalculationUseCase {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteCalculationError> {
        Err(DeleteCalculationError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetHistoryUseCase;

#[async_trait]
impl GetHistoryUseCase for StubGetHistoryUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _request: HistoryRequest,
    ) -> Result<CalculationHistory, GetHistoryError> {
        Ok(CalculationHistory {
            total_calculations: 0,
            calculations: vec![],
        })
    }
}

#[derive(Default, Clone)]
pub struct StubGetStatisticsUseCase;

#[async_trait]
impl GetStatisticsUseCase for StubGetStatisticsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<CalculationStatistics, GetStatisticsError> {
        Ok(CalculationStatistics::empty())
    }
}

#[derive(Default, Clone)]
pub struct StubClearHistoryUseCase;

#[async_trait]
impl ClearHistoryUseCase for StubClearHistoryUseCase {
    async fn execute(&self, _owner: UserId) -> Result<u64, ClearHistoryError> {
        unimplemented!("Not used in this test")
    }
}
