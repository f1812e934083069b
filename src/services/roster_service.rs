use tracing::{debug, info, warn};

use crate::database::activity_store::{ActivityCatalog, ActivityStore};
use crate::error::Result;
use crate::models::MessageResponse;

pub fn list_activities(store: &ActivityStore) -> ActivityCatalog {
    store.list_all()
}

pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse> {
    match store.enroll(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, "signed up");
            debug!(activity = %activity_name, email = %email, "participant added");
            Ok(MessageResponse::signed_up(email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub fn withdraw(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse> {
    match store.withdraw(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, "withdrawn");
            debug!(activity = %activity_name, email = %email, "participant removed");
            Ok(MessageResponse::removed(email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, "withdraw rejected: {}", e);
            Err(e)
        }
    }
}
