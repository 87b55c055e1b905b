use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use serde_json::Value;
use uuid::Uuid;

use freelancehub_backend::auth::password::{hash_password, verify_password};
use freelancehub_backend::entities::user::{UpdateUser, User, UserChanges, UserInsert};
use freelancehub_backend::errors::AppError;
use freelancehub_backend::repositories::user::UserRepository;
use freelancehub_backend::use_cases::users::UserHandler;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn create(&self, user: &UserInsert) -> Result<User, AppError>;
        async fn update(&self, id: &Uuid, changes: &UserChanges) -> Result<Option<User>, AppError>;
        async fn set_password(&self, id: &Uuid, password_hash: &str) -> Result<bool, AppError>;
    }
}

fn stored_user() -> User {
    User {
        id: Uuid::new_v4(),
        username: "sid".to_string(),
        email: "sid@example.com".to_string(),
        password_hash: hash_password("Abc12!").unwrap(),
        college: "Test College".to_string(),
        phone_no: Some("9876543210".to_string()),
        bio: Some("Backend developer".to_string()),
        address: Some("12 College Road".to_string()),
        image_url: Some("https://cdn.example.com/sid.png".to_string()),
        created_at: Utc::now(),
    }
}

fn assert_no_credential(value: &Value) {
    let object = value.as_object().expect("projection serializes to an object");
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("password_hash"));
}

#[actix_rt::test]
async fn own_profile_has_full_fields_but_no_credential() {
    let user = stored_user();
    let actor = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    let handler = UserHandler::new(repo);

    let profile = handler.profile(&actor).await.unwrap();
    let json = serde_json::to_value(&profile).unwrap();

    assert_no_credential(&json);
    assert_eq!(json["username"], "sid");
    assert_eq!(json["college"], "Test College");
    assert_eq!(json["address"], "12 College Road");
}

#[actix_rt::test]
async fn third_party_details_hide_address_and_college() {
    let user = stored_user();
    let user_id = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    let handler = UserHandler::new(repo);

    let details = handler.public_details(&user_id).await.unwrap();
    let json = serde_json::to_value(&details).unwrap();

    assert_no_credential(&json);
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("address"));
    assert!(!object.contains_key("college"));
    assert!(!object.contains_key("created_at"));
    assert_eq!(json["username"], "sid");
    assert_eq!(json["profile_image"], "https://cdn.example.com/sid.png");
}

#[actix_rt::test]
async fn contact_projection_is_email_only() {
    let user = stored_user();
    let user_id = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    let handler = UserHandler::new(repo);

    let contact = handler.contact(&user_id).await.unwrap();
    let json = serde_json::to_value(&contact).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(json["email"], "sid@example.com");
}

#[actix_rt::test]
async fn unknown_user_reads_are_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let handler = UserHandler::new(repo);

    let result = handler.public_details(&Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn update_leaves_omitted_fields_untouched() {
    let user = stored_user();
    let actor = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_update()
        .withf(move |id: &Uuid, changes: &UserChanges| {
            *id == actor
                && changes.username == "siddharth"
                && changes.college == "Test College"
                && changes.password_hash.is_none()
                && changes.phone_no.is_none()
                && changes.bio.is_none()
                && changes.address.is_none()
                && changes.image_url.is_none()
        })
        .returning(move |_, _| {
            let mut updated = user.clone();
            updated.username = "siddharth".to_string();
            Ok(Some(updated))
        });

    let handler = UserHandler::new(repo);

    let profile = handler
        .update_profile(&actor, UpdateUser {
            username: "siddharth".to_string(),
            college: "Test College".to_string(),
            password: None,
            phone_no: None,
            bio: None,
            address: None,
            image: None,
        })
        .await
        .unwrap();

    // stored optional fields survive the merge-patch
    assert_eq!(profile.username, "siddharth");
    assert_eq!(profile.bio.as_deref(), Some("Backend developer"));
    assert_eq!(profile.address.as_deref(), Some("12 College Road"));
}

#[actix_rt::test]
async fn update_rehashes_a_supplied_password() {
    let user = stored_user();
    let actor = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_update()
        .withf(|_id: &Uuid, changes: &UserChanges| {
            match &changes.password_hash {
                Some(hash) => hash != "Xyz34$" && verify_password("Xyz34$", hash).unwrap(),
                None => false,
            }
        })
        .returning(move |_, _| Ok(Some(user.clone())));

    let handler = UserHandler::new(repo);

    let result = handler
        .update_profile(&actor, UpdateUser {
            username: "sid".to_string(),
            college: "Test College".to_string(),
            password: Some("Xyz34$".to_string()),
            phone_no: None,
            bio: None,
            address: None,
            image: None,
        })
        .await;

    assert!(result.is_ok());
}

#[actix_rt::test]
async fn update_requires_username_and_college() {
    let handler = UserHandler::new(MockUserRepo::new());

    let result = handler
        .update_profile(&Uuid::new_v4(), UpdateUser {
            username: "".to_string(),
            college: "".to_string(),
            password: None,
            phone_no: None,
            bio: None,
            address: None,
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn update_rejects_malformed_password() {
    let handler = UserHandler::new(MockUserRepo::new());

    let result = handler
        .update_profile(&Uuid::new_v4(), UpdateUser {
            username: "sid".to_string(),
            college: "Test College".to_string(),
            password: Some("abc".to_string()),
            phone_no: None,
            bio: None,
            address: None,
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
