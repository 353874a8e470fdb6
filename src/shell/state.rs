use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::use_cases::list_activities::handler::ListActivitiesHandler;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::unregister::handler::UnregisterHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListActivitiesHandler<dyn ActivityStore>>,
    pub sign_up_handler: Arc<SignUpHandler<dyn ActivityStore>>,
    pub unregister_handler: Arc<UnregisterHandler<dyn ActivityStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            list_handler: Arc::new(ListActivitiesHandler::new(store.clone())),
            sign_up_handler: Arc::new(SignUpHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterHandler::new(store)),
        }
    }
}
