//! Value objects - immutable types that represent domain concepts

mod ids;

pub use ids::{DocumentId, FieldId, IdParseError, RecipientId, TeamId, UserId};
