use serde::{Deserialize, Serialize};

use db::models::{Player, User};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayerResponse {
    pub user: UserResponse,
}

impl From<(Player, User)> for PlayerResponse {
    fn from((_, user): (Player, User)) -> Self {
        PlayerResponse {
            user: UserResponse {
                first_name: user.first_name,
                last_name: user.last_name,
            },
        }
    }
}
