pub mod auth_mock;
pub mod modal_mock;
pub mod opinion_service_mock;

use opinion_collector::models::opinion::Opinion;

pub fn opinion(product_id: &str, opinion_id: &str, author: &str, content: &str) -> Opinion {
    Opinion {
        product_id: product_id.to_string(),
        opinion_id: opinion_id.to_string(),
        author_name: author.to_string(),
        content: content.to_string(),
        likes: 0,
        dislikes: 0,
        liked: false,
        disliked: false,
    }
}
