use users_core::model::user::new_user_id;
use users_core::{Response, UserRead, UserRow, UserWrite};
use uuid::Uuid;

fn grace() -> UserWrite {
    UserWrite {
        fullname: Some("Grace Hopper".to_string()),
        age: Some(85),
        email: Some("grace@example.com".to_string()),
        location: Some("Arlington".to_string()),
    }
}

#[test]
fn new_user_id_is_a_v4_uuid() {
    let id = new_user_id();
    let parsed = Uuid::parse_str(&id).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
    assert_ne!(new_user_id(), id);
}

#[test]
fn from_row_reorders_age_after_location() {
    let row: UserRow = (
        "id-1".to_string(),
        Some("Grace Hopper".to_string()),
        Some(85),
        Some("grace@example.com".to_string()),
        Some("Arlington".to_string()),
    );

    let user = UserRead::from_row(row);

    assert_eq!(user.id, "id-1");
    assert_eq!(user.fullname.as_deref(), Some("Grace Hopper"));
    assert_eq!(user.email.as_deref(), Some("grace@example.com"));
    assert_eq!(user.location.as_deref(), Some("Arlington"));
    assert_eq!(user.age, Some(85));
    assert_eq!(user.attributes(), grace());
}

#[test]
fn from_write_keeps_submitted_values() {
    let user = UserRead::from_write("id-2", &grace());
    assert_eq!(user.id, "id-2");
    assert_eq!(user.attributes(), grace());
}

#[test]
fn columns_borrow_every_attribute() {
    let write = grace();
    let columns = write.columns();
    assert_eq!(columns.fullname, Some("Grace Hopper"));
    assert_eq!(columns.age, Some(85));
    assert_eq!(columns.email, Some("grace@example.com"));
    assert_eq!(columns.location, Some("Arlington"));
}

#[test]
fn read_shape_serializes_in_wire_field_order() {
    let user = UserRead::from_write("id-3", &grace());

    let json = serde_json::to_string(&user).unwrap();

    assert_eq!(
        json,
        r#"{"id":"id-3","fullname":"Grace Hopper","email":"grace@example.com","location":"Arlington","age":85}"#
    );
}

#[test]
fn write_shape_accepts_missing_and_null_fields() {
    let write: UserWrite =
        serde_json::from_str(r#"{"fullname":null,"age":30,"email":"a@b.c"}"#).unwrap();
    assert_eq!(write.fullname, None);
    assert_eq!(write.age, Some(30));
    assert_eq!(write.email.as_deref(), Some("a@b.c"));
    assert_eq!(write.location, None);
}

#[test]
fn envelope_serializes_message_and_data_only() {
    let user = UserRead::from_write("id-4", &UserWrite::default());
    let found = Response::single("user found", user);
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["message"], "user found");
    assert_eq!(json["data"][0]["id"], "id-4");
    assert!(json["data"][0]["age"].is_null());
    assert_eq!(json.as_object().unwrap().len(), 2);

    let missing = Response::<UserRead>::empty("user does not exist");
    assert!(missing.is_empty());
    assert_eq!(
        serde_json::to_string(&missing).unwrap(),
        r#"{"message":"user does not exist","data":[]}"#
    );
}
