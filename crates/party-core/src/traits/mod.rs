//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AuthRepository, ChatRepository, MediaRepository, PartyRepository, RepoResult, Subscription,
    UserFollowRepository, UserRepository,
};
