use crate::auth::application::use_cases::create_user::ICreateUserUseCase;
use crate::auth::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::auth::application::use_cases::fetch_profile::FetchUserProfileUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::calculation::application::calculation_use_cases::CalculationUseCases;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationUseCase, DeleteCalculationUseCase, GetCalculationsUseCase,
    GetSingleCalculationUseCase,
};
use crate::modules::calculation::application::service::{
    CreateCalculationService, DeleteCalculationService, GetCalculationsService,
    GetSingleCalculationService,
};
use crate::modules::history::application::history_use_cases::HistoryUseCases;
use crate::modules::history::application::ports::incoming::use_cases::{
    ClearHistoryUseCase, GetHistoryUseCase, GetStatisticsUseCase,
};
use crate::modules::history::application::service::{
    ClearHistoryService, GetHistoryService, GetStatisticsService,
};
use crate::tests::support::in_memory_calculations::InMemoryCalculations;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    calculation: CalculationUseCases,
    history: HistoryUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_user_profile: Arc::new(StubFetchUserProfileUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            calculation: CalculationUseCases {
                create: Arc::new(StubCreateCalculationUseCase),
                get_list: Arc::new(StubGetCalculationsUseCase),
                get_single: Arc::new(StubGetSingleCalculationUseCase),
                delete: Arc::new(StubDeleteCalculationUseCase),
            },
            history: HistoryUseCases {
                get_history: Arc::new(StubGetHistoryUseCase),
                get_statistics: Arc::new(StubGetStatisticsUseCase),
                clear: Arc::new(StubClearHistoryUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl ICreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_create_calculation(
        mut self,
        uc: impl CreateCalculationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.calculation.create = Arc::new(uc);
        self
    }

    pub fn with_get_calculations(
        mut self,
        uc: impl GetCalculationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.calculation.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_calculation(
        mut self,
        uc: impl GetSingleCalculationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.calculation.get_single = Arc::new(uc);
        self
    }

    pub fn with_delete_calculation(
        mut self,
        uc: impl DeleteCalculationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.calculation.delete = Arc::new(uc);
        self
    }

    pub fn with_get_history(mut self, uc: impl GetHistoryUseCase + Send + Sync + 'static) -> Self {
        self.history.get_history = Arc::new(uc);
        self
    }

    pub fn with_get_statistics(
        mut self,
        uc: impl GetStatisticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.history.get_statistics = Arc::new(uc);
        self
    }

    pub fn with_clear_history(
        mut self,
        uc: impl ClearHistoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.history.clear = Arc::new(uc);
        self
    }

    /// Runs the real calculation and history services over `store`.
    pub fn with_calculation_store(mut self, store: InMemoryCalculations) -> Self {
        self.calculation = CalculationUseCases {
            create: Arc::new(CreateCalculationService::new(store.clone())),
            get_list: Arc::new(GetCalculationsService::new(store.clone())),
            get_single: Arc::new(GetSingleCalculationService::new(store.clone())),
            delete: Arc::new(DeleteCalculationService::new(store.clone())),
        };
        self.history = HistoryUseCases {
            get_history: Arc::new(GetHistoryService::new(store.clone())),
            get_statistics: Arc::new(GetStatisticsService::new(store.clone())),
            clear: Arc::new(ClearHistoryService::new(store)),
        };
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_user_profile_use_case: self.fetch_user_profile,
            delete_user_use_case: self.delete_user,
            calculation: self.calculation,
            history: self.history,
        })
    }
}
