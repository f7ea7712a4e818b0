//! Blog record <-> model mapper

use blog_core::entities::Blog;
use blog_core::value_objects::RecordId;

use crate::models::BlogModel;

/// Convert BlogModel to Blog record
impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: RecordId::new(model.id),
            author_id: RecordId::new(model.author_id),
            title: model.title,
            score: model.score,
            created_date: model.created_date,
        }
    }
}
