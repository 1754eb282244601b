use serde::{Deserialize, Serialize};

/// A product review as returned by the opinion service, seen from the
/// current viewer (`liked`/`disliked` describe the viewer's own reaction).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Opinion {
    pub product_id: String,
    pub opinion_id: String,
    pub author_name: String,
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub disliked: bool,
}

/// Payload submitted when creating or editing an opinion.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateOpinionDto {
    pub content: String,
}

impl From<&Opinion> for CreateUpdateOpinionDto {
    fn from(opinion: &Opinion) -> Self {
        Self {
            content: opinion.content.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportOpinionDto {
    pub reason: String,
}

/// The call a reaction click turns into, given the viewer's current flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
    RemoveLike,
    RemoveDislike,
}

impl Reaction {
    pub fn resolve(opinion: &Opinion, positive: bool) -> Self {
        match (positive, opinion.liked, opinion.disliked) {
            (true, false, _) => Reaction::Like,
            (false, _, false) => Reaction::Dislike,
            (true, true, _) => Reaction::RemoveLike,
            (false, _, true) => Reaction::RemoveDislike,
        }
    }

    /// Polarity sent to the service; the same for adding and retracting.
    pub fn positive(self) -> bool {
        matches!(self, Reaction::Like | Reaction::RemoveLike)
    }

    pub fn is_retraction(self) -> bool {
        matches!(self, Reaction::RemoveLike | Reaction::RemoveDislike)
    }
}
