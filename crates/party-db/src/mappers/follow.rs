//! Follow edge mapper

use party_core::UserFollow;

use super::{from_millis, to_millis};
use crate::models::UserFollowDto;

impl From<UserFollowDto> for UserFollow {
    fn from(dto: UserFollowDto) -> Self {
        UserFollow {
            follower_id: dto.follower_id,
            following_id: dto.following_id,
            created_at: from_millis(dto.created_at),
        }
    }
}

impl From<&UserFollow> for UserFollowDto {
    fn from(follow: &UserFollow) -> Self {
        UserFollowDto {
            follower_id: follow.follower_id.clone(),
            following_id: follow.following_id.clone(),
            created_at: to_millis(follow.created_at),
        }
    }
}
