//! User entity <-> document mapper

use party_core::{SocialLinks, User, UserSummary};

use super::{date_from_millis, date_to_millis, from_millis, to_millis};
use crate::models::{SocialLinksDto, UserDto, UserSummaryDto};

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            firebase_id: dto.firebase_id,
            email: dto.email,
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            bio: dto.bio,
            birth_date: dto.birth_date.map(date_from_millis),
            avatar_url: dto.avatar_url,
            cover_photo_url: dto.cover_photo_url,
            social_links: dto.social_links.into(),
            tags: dto.tags,
            followers_count: dto.followers_count,
            following_count: dto.following_count,
            is_verified: dto.is_verified,
            is_profile_complete: dto.is_profile_complete,
            created_at: from_millis(dto.created_at),
            updated_at: from_millis(dto.updated_at),
            last_login_at: dto.last_login_at.map(from_millis),
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        UserDto {
            id: user.id.clone(),
            firebase_id: user.firebase_id.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            birth_date: user.birth_date.map(date_to_millis),
            avatar_url: user.avatar_url.clone(),
            cover_photo_url: user.cover_photo_url.clone(),
            social_links: (&user.social_links).into(),
            tags: user.tags.clone(),
            followers_count: user.followers_count,
            following_count: user.following_count,
            is_verified: user.is_verified,
            is_profile_complete: user.is_profile_complete,
            created_at: to_millis(user.created_at),
            updated_at: to_millis(user.updated_at),
            last_login_at: user.last_login_at.map(to_millis),
        }
    }
}

impl From<SocialLinksDto> for SocialLinks {
    fn from(dto: SocialLinksDto) -> Self {
        SocialLinks {
            instagram: dto.instagram,
            tiktok: dto.tiktok,
            twitter: dto.twitter,
            website: dto.website,
        }
    }
}

impl From<&SocialLinks> for SocialLinksDto {
    fn from(links: &SocialLinks) -> Self {
        SocialLinksDto {
            instagram: links.instagram.clone(),
            tiktok: links.tiktok.clone(),
            twitter: links.twitter.clone(),
            website: links.website.clone(),
        }
    }
}

impl From<UserSummaryDto> for UserSummary {
    fn from(dto: UserSummaryDto) -> Self {
        UserSummary {
            id: dto.id,
            username: dto.username,
            display_name: dto.display_name,
            avatar_url: dto.avatar_url,
            is_verified: dto.is_verified,
        }
    }
}

impl From<&UserSummary> for UserSummaryDto {
    fn from(summary: &UserSummary) -> Self {
        UserSummaryDto {
            id: summary.id.clone(),
            username: summary.username.clone(),
            display_name: summary.display_name.clone(),
            avatar_url: summary.avatar_url.clone(),
            is_verified: summary.is_verified,
        }
    }
}
