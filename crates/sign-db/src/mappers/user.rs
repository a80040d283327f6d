//! User and team model -> entity mappers

use sign_core::entities::{Team, User};
use sign_core::value_objects::{TeamId, UserId};

use crate::models::{TeamModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
        }
    }
}

impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: TeamId::new(model.id),
            name: model.name,
            url: model.url,
        }
    }
}
