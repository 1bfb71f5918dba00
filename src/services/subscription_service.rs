use crate::database::{MongoDb, SUBSCRIPTIONS};
use crate::models::Subscription;
use crate::utils::AppError;
use mongodb::bson::{doc, DateTime as BsonDateTime};

/// Newsletter subscription with an explicit pre-insert duplicate check.
/// The lookup-then-insert is not atomic; the collection index is
/// non-unique, so a race can slip a duplicate through, matching the
/// behavior the frontend was built against.
pub async fn subscribe(db: &MongoDb, email: &str) -> Result<(), AppError> {
    let collection = db.collection::<Subscription>(SUBSCRIPTIONS);

    let existing = collection
        .find_one(doc! { "email": email })
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

    if existing.is_some() {
        return Err(AppError::ValidationConflict(
            "This email is already subscribed".to_string(),
        ));
    }

    let subscription = Subscription {
        email: email.to_string(),
        created_at: BsonDateTime::now(),
    };

    collection
        .insert_one(&subscription)
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

    log::info!("✅ New subscriber: {}", email);

    Ok(())
}
