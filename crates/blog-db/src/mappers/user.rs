//! User record <-> model mapper

use blog_core::entities::User;
use blog_core::value_objects::RecordId;

use crate::models::UserModel;

/// Convert UserModel to User record
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: RecordId::new(model.id),
            name: model.name,
            email: model.email,
            password_hash: model.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_column_becomes_hash() {
        let user = User::from(UserModel {
            id: 5,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$argon2id$v=19$stub".to_string(),
        });

        assert_eq!(user.id, RecordId::new(5));
        assert_eq!(user.password_hash, "$argon2id$v=19$stub");
    }
}
