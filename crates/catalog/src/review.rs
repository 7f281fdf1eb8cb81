//! Product reviews and admin replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{find_by_id_mut, DomainError, DomainResult, Entity, ProductId, ReviewId, UserId};

/// A shopper's review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub admin_reply: Option<String>,
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Review as submitted by a shopper (id and date are assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn add_review(&mut self, review: NewReview, now: DateTime<Utc>) -> DomainResult<ReviewId> {
        if !(1..=5).contains(&review.rating) {
            return Err(DomainError::validation(format!(
                "rating must be between 1 and 5 (got {})",
                review.rating
            )));
        }
        let id = ReviewId::generate();
        tracing::debug!(review_id = %id, product_id = %review.product_id, "review added");
        self.reviews.push(Review {
            id: id.clone(),
            product_id: review.product_id,
            user_id: review.user_id,
            rating: review.rating,
            comment: review.comment,
            created_at: now,
            admin_reply: None,
        });
        Ok(id)
    }

    pub fn add_admin_reply(&mut self, review_id: &ReviewId, reply: impl Into<String>) -> DomainResult<()> {
        let review = find_by_id_mut(&mut self.reviews, review_id)
            .ok_or_else(|| DomainError::not_found(format!("review {review_id}")))?;
        review.admin_reply = Some(reply.into());
        Ok(())
    }

    pub fn product_reviews(&self, product_id: &ProductId) -> Vec<&Review> {
        self.reviews.iter().filter(|r| &r.product_id == product_id).collect()
    }

    /// Mean rating for a product, `None` when it has no reviews.
    pub fn average_rating(&self, product_id: &ProductId) -> Option<f32> {
        let ratings: Vec<u8> = self
            .reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return None;
        }
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        Some(sum as f32 / ratings.len() as f32)
    }
}
