//! Seed records each page starts from.
//!
//! These are plain constructors so that every page state gets its own fresh
//! copy.

use super::models::{BillingCycle, Plan, RecordId, Role, StreamType, User, UserStatus};

/// Plan highlighted with a "Popular" ribbon on the plans page.
pub const POPULAR_PLAN_ID: RecordId = RecordId(2);

fn user(
    id: u32,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    streams: u32,
    services: &[StreamType],
) -> User {
    User {
        id: RecordId(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        streams,
        services: services.to_vec(),
    }
}

pub fn users() -> Vec<User> {
    use StreamType::*;

    vec![
        user(
            1,
            "Carlos Rodriguez",
            "carlos@example.com",
            Role::Admin,
            UserStatus::Active,
            5,
            &[Rtmp, Hls],
        ),
        user(
            2,
            "Maria Garcia",
            "maria@example.com",
            Role::Reseller,
            UserStatus::Active,
            12,
            &[Rtmp, WebRtc, Vod],
        ),
        user(3, "John Smith", "john@example.com", Role::User, UserStatus::Active, 3, &[Hls]),
        user(4, "Sara Johnson", "sara@example.com", Role::User, UserStatus::Inactive, 0, &[]),
        user(
            5,
            "Michael Brown",
            "michael@example.com",
            Role::Reseller,
            UserStatus::Active,
            8,
            &[Rtmp, Rtsp],
        ),
    ]
}

pub fn plans() -> Vec<Plan> {
    use StreamType::*;

    let features = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Plan {
            id: RecordId(1),
            name: "Basic Plan".to_string(),
            price: 19.99,
            billing_cycle: BillingCycle::Monthly,
            stream_types: vec![Rtmp, Hls],
            max_streams: 1,
            max_viewers: 100,
            storage: "5GB".to_string(),
            features: features(&["720p max", "Customizable player", "Email support"]),
        },
        Plan {
            id: RecordId(2),
            name: "Pro Plan".to_string(),
            price: 49.99,
            billing_cycle: BillingCycle::Monthly,
            stream_types: vec![Rtmp, Hls, WebRtc],
            max_streams: 3,
            max_viewers: 500,
            storage: "25GB".to_string(),
            features: features(&[
                "1080p max",
                "Customizable player",
                "VOD",
                "Priority support",
                "API Access",
            ]),
        },
        Plan {
            id: RecordId(3),
            name: "Enterprise Plan".to_string(),
            price: 99.99,
            billing_cycle: BillingCycle::Monthly,
            stream_types: vec![Rtmp, Hls, WebRtc, Rtsp],
            max_streams: 10,
            max_viewers: 2000,
            storage: "100GB".to_string(),
            features: features(&[
                "4K max",
                "Customizable player",
                "VOD",
                "Shoutcast/Icecast",
                "24/7 support",
                "API Access",
                "White label",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_increasing() {
        let ids: Vec<u32> = users().iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let ids: Vec<u32> = plans().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_popular_plan_exists() {
        assert!(plans().iter().any(|p| p.id == POPULAR_PLAN_ID));
    }
}
