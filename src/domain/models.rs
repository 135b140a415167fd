use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::notifications::Notification;

/// Identifier of a user or plan within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry that can live in a [`Collection`](super::Collection).
///
/// `Fields` is everything except the id; the collection assigns the id when
/// the record is appended.
pub trait Record {
    type Fields;

    fn from_fields(id: RecordId, fields: Self::Fields) -> Self;
    fn id(&self) -> RecordId;
    fn name(&self) -> &str;

    /// Case-insensitive substring match. `query_lower` is already lowercased.
    fn matches(&self, query_lower: &str) -> bool;

    fn added_notice(&self) -> Notification;
    fn removed_notice(&self) -> Notification;
}

/// Declares a closed string-backed enum with `as_str`, `ALL`, `FromStr`
/// and `Display`.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum!(Role {
    Admin => "Admin",
    Reseller => "Reseller",
    User => "User",
});

labelled_enum!(UserStatus {
    Active => "Active",
    Inactive => "Inactive",
});

labelled_enum!(BillingCycle {
    Monthly => "Monthly",
    Quarterly => "Quarterly",
    Annual => "Annual",
});

labelled_enum!(
    /// Streaming protocol or service offered to a user or included in a plan.
    StreamType {
        Rtmp => "RTMP",
        Hls => "HLS",
        WebRtc => "WebRTC",
        Rtsp => "RTSP",
        Vod => "VOD",
        Shoutcast => "Shoutcast",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub streams: u32,
    pub services: Vec<StreamType>,
}

/// Fields collected by the add-user dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Record for User {
    type Fields = NewUser;

    fn from_fields(id: RecordId, fields: NewUser) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            role: fields.role,
            status: UserStatus::Active,
            streams: 0,
            services: Vec::new(),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.email.to_lowercase().contains(query_lower)
    }

    fn added_notice(&self) -> Notification {
        Notification::info(
            "User created",
            format!("{} has been added as {}", self.name, self.role),
        )
    }

    fn removed_notice(&self) -> Notification {
        Notification::error("User removed", format!("{} has been removed", self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: RecordId,
    pub name: String,
    /// `NaN` when the price typed into the dialog could not be parsed.
    pub price: f64,
    pub billing_cycle: BillingCycle,
    pub stream_types: Vec<StreamType>,
    pub max_streams: u32,
    pub max_viewers: u32,
    pub storage: String,
    pub features: Vec<String>,
}

/// Fields collected by the new-plan dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub name: String,
    pub price: f64,
    pub billing_cycle: BillingCycle,
    pub stream_types: Vec<StreamType>,
    pub max_streams: u32,
    pub max_viewers: u32,
    pub storage: String,
    pub features: Vec<String>,
}

impl Plan {
    /// Price as shown on a plan card, e.g. `$19.99`. Unparsed prices show
    /// as `$NaN`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn billing_label(&self) -> String {
        format!("/{}", self.billing_cycle.as_str().to_lowercase())
    }
}

impl Record for Plan {
    type Fields = NewPlan;

    fn from_fields(id: RecordId, fields: NewPlan) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            billing_cycle: fields.billing_cycle,
            stream_types: fields.stream_types,
            max_streams: fields.max_streams,
            max_viewers: fields.max_viewers,
            storage: fields.storage,
            features: fields.features,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }

    fn added_notice(&self) -> Notification {
        Notification::info(
            "Plan created",
            format!("Plan {} has been created successfully", self.name),
        )
    }

    fn removed_notice(&self) -> Notification {
        Notification::error("Plan deleted", format!("Plan {} has been deleted", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_enum_round_trip_through_labels() {
        for (variant, label) in StreamType::ALL.iter().zip(StreamType::LABELS) {
            assert_eq!(variant.as_str(), *label);
            assert_eq!(label.parse::<StreamType>(), Ok(*variant));
        }
        assert!("rtmp".parse::<StreamType>().is_err());
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::from_fields(
            RecordId(7),
            NewUser {
                name: "Test".to_string(),
                email: "t@x.com".to_string(),
                role: Role::User,
            },
        );
        assert_eq!(user.id, RecordId(7));
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.streams, 0);
        assert!(user.services.is_empty());
    }

    #[test]
    fn test_user_matches_name_or_email() {
        let user = User::from_fields(
            RecordId(1),
            NewUser {
                name: "Maria Garcia".to_string(),
                email: "mg@streamly.io".to_string(),
                role: Role::Reseller,
            },
        );
        assert!(user.matches("garcia"));
        assert!(user.matches("streamly"));
        assert!(!user.matches("carlos"));
    }

    #[test]
    fn test_price_label() {
        let mut plan = Plan::from_fields(
            RecordId(1),
            NewPlan {
                name: "Basic".to_string(),
                price: 19.99,
                billing_cycle: BillingCycle::Monthly,
                stream_types: vec![StreamType::Rtmp],
                max_streams: 1,
                max_viewers: 100,
                storage: "5GB".to_string(),
                features: Vec::new(),
            },
        );
        assert_eq!(plan.price_label(), "$19.99");
        assert_eq!(plan.billing_label(), "/monthly");

        plan.price = f64::NAN;
        assert_eq!(plan.price_label(), "$NaN");
    }

    #[test]
    fn test_notices() {
        let user = User::from_fields(
            RecordId(1),
            NewUser {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                role: Role::Admin,
            },
        );
        let added = user.added_notice();
        assert_eq!(added.title, "User created");
        assert_eq!(added.description, "Ana has been added as Admin");
        assert!(user.removed_notice().is_error());
    }
}
