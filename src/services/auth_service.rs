use crate::database::{MongoDb, USERS};
use crate::models::{SignInRequest, SignUpRequest, User};
use crate::utils::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};
use mongodb::bson::doc;

/// Hashes the password and stores the new user. Email uniqueness is not
/// enforced here; the store keeps whatever sign-ups arrive.
pub async fn sign_up(db: &MongoDb, request: &SignUpRequest) -> Result<User, AppError> {
    let hashed_password = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AppError::StorageUnavailable(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: None,
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        password: hashed_password,
        goals: request.goals.clone(),
    };

    db.collection::<User>(USERS)
        .insert_one(&user)
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

    log::info!("✅ User registered: {}", user.email);

    Ok(user)
}

/// Looks the user up by email and verifies the password against the
/// stored bcrypt hash. bcrypt's verify does the constant-time-safe
/// comparison; the plaintext is never compared directly.
pub async fn sign_in(db: &MongoDb, request: &SignInRequest) -> Result<User, AppError> {
    let user = db
        .collection::<User>(USERS)
        .find_one(doc! { "email": &request.email })
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let valid = verify(&request.password, &user.password)
        .map_err(|e| AppError::Unauthorized(format!("Password verification error: {}", e)))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    Ok(user)
}

pub fn welcome_email(first_name: &str) -> String {
    format!(
        "<div style=\"font-family:sans-serif\">\
         <h2>Welcome to FitLife!</h2>\
         <p>Hi {},</p>\
         <p>Your account is ready. Book an appointment, request a diet plan, \
         or chat with our assistant whenever you like.</p>\
         <p>- The FitLife Team</p></div>",
        first_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost; the crate keeps it private.
    const MIN_COST: u32 = 4;

    #[test]
    fn test_password_hash_round_trip() {
        // MIN_COST keeps the test fast; the hash/verify contract is the same.
        let hashed = hash("secret123", MIN_COST).unwrap();
        assert_ne!(hashed, "secret123");
        assert!(verify("secret123", &hashed).unwrap());
        assert!(!verify("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_welcome_email_addresses_user() {
        let body = welcome_email("Jordan");
        assert!(body.contains("Hi Jordan"));
        assert!(body.contains("Welcome to FitLife"));
    }
}
