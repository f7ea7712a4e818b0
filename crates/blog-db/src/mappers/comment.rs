//! Comment record <-> model mapper

use blog_core::entities::Comment;
use blog_core::value_objects::RecordId;

use crate::models::CommentModel;

/// Convert CommentModel to Comment record
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            user_id: RecordId::new(model.user_id),
            blog_id: RecordId::new(model.blog_id),
            message: model.message,
            created_date: model.created_date,
        }
    }
}
