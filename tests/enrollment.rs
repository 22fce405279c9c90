use student_records::enrollment::{enroll, next_sid, EnrollStudent};
use student_records::error::StudentError;
use student_records::repositories::StudentRepository;
use student_records::storage::LocalStorage;

fn request(firstname: &str, lastname: &str, dni: i64, email: &str) -> EnrollStudent {
    EnrollStudent {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        dni,
        email: email.to_string(),
    }
}

#[tokio::test]
async fn test_enroll_assigns_sequential_sids() {
    let storage = LocalStorage::in_memory().await.unwrap();

    let ada = enroll(&storage.conn, request("Ada", "Lovelace", 1, "ada@example.com"))
        .await
        .unwrap();
    let alan = enroll(&storage.conn, request("Alan", "Turing", 2, "alan@example.com"))
        .await
        .unwrap();

    assert_eq!(ada.sid, 1);
    assert_eq!(alan.sid, 2);
    assert_eq!(StudentRepository::get_last_sid(&storage.conn).await.unwrap(), 2);
}

#[tokio::test]
async fn test_enroll_rejects_duplicate_dni_or_email() {
    let storage = LocalStorage::in_memory().await.unwrap();
    enroll(&storage.conn, request("Ada", "Lovelace", 1, "ada@example.com"))
        .await
        .unwrap();

    let same_dni = enroll(&storage.conn, request("Other", "Person", 1, "other@example.com")).await;
    assert!(matches!(same_dni, Err(StudentError::Duplicate { dni: 1, .. })));

    let same_email = enroll(&storage.conn, request("Other", "Person", 7, "ada@example.com")).await;
    assert!(matches!(same_email, Err(StudentError::Duplicate { dni: 7, .. })));

    assert_eq!(StudentRepository::get_all(&storage.conn).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_enroll_reuses_identity_of_deleted_student_with_fresh_sid() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let ada = enroll(&storage.conn, request("Ada", "Lovelace", 1, "ada@example.com"))
        .await
        .unwrap();
    StudentRepository::soft_delete(&storage.conn, ada.id).await.unwrap();

    let again = enroll(&storage.conn, request("Ada", "Lovelace", 1, "ada@example.com"))
        .await
        .unwrap();
    assert_ne!(again.id, ada.id);
    assert_eq!(again.sid, 2);
}

#[tokio::test]
async fn test_enroll_validates_before_lookup() {
    let storage = LocalStorage::in_memory().await.unwrap();

    let result = enroll(&storage.conn, request("", "Lovelace", 1, "not-an-email")).await;
    match result {
        Err(err) => assert_eq!(err.invalid_fields(), vec!["email", "firstname"]),
        Ok(model) => panic!("expected validation failure, stored {:?}", model),
    }
    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_next_sid_follows_highest_sid() {
    let storage = LocalStorage::in_memory().await.unwrap();
    assert_eq!(next_sid(&storage.conn).await.unwrap(), 1);

    let ada = enroll(&storage.conn, request("Ada", "Lovelace", 1, "ada@example.com"))
        .await
        .unwrap();
    assert_eq!(next_sid(&storage.conn).await.unwrap(), ada.sid + 1);

    // Deleting the newest student does not free its SID
    StudentRepository::soft_delete(&storage.conn, ada.id).await.unwrap();
    assert_eq!(StudentRepository::get_last_sid(&storage.conn).await.unwrap(), ada.sid);
    assert_eq!(next_sid(&storage.conn).await.unwrap(), ada.sid + 1);
}
