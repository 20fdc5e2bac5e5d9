//! Wire and internal shapes of a GitHub user profile.
//!
//! [`RawProfile`] mirrors the API payload (snake_case keys), [`Profile`] is the
//! same record with camelCase keys. Conversion in either direction moves each
//! field as-is.
use serde::{Deserialize, Serialize};

/// A user record as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: String,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub following_url: String,
    pub gists_url: String,
    pub starred_url: String,
    pub subscriptions_url: String,
    pub organizations_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub received_events_url: String,
    pub r#type: String,
    pub site_admin: Option<bool>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u64,
    pub public_gists: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// A user record with camelCase field names, value-identical to [`RawProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: String,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub following_url: String,
    pub gists_url: String,
    pub starred_url: String,
    pub subscriptions_url: String,
    pub organizations_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub received_events_url: String,
    pub r#type: String,
    pub site_admin: Option<bool>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u64,
    pub public_gists: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Rename every field of `raw` to its camelCase counterpart.
pub fn normalize(raw: RawProfile) -> Profile {
    raw.into()
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Self {
            login: raw.login,
            id: raw.id,
            node_id: raw.node_id,
            avatar_url: raw.avatar_url,
            gravatar_id: raw.gravatar_id,
            url: raw.url,
            html_url: raw.html_url,
            followers_url: raw.followers_url,
            following_url: raw.following_url,
            gists_url: raw.gists_url,
            starred_url: raw.starred_url,
            subscriptions_url: raw.subscriptions_url,
            organizations_url: raw.organizations_url,
            repos_url: raw.repos_url,
            events_url: raw.events_url,
            received_events_url: raw.received_events_url,
            r#type: raw.r#type,
            site_admin: raw.site_admin,
            name: raw.name,
            company: raw.company,
            blog: raw.blog,
            location: raw.location,
            email: raw.email,
            hireable: raw.hireable,
            bio: raw.bio,
            twitter_username: raw.twitter_username,
            public_repos: raw.public_repos,
            public_gists: raw.public_gists,
            followers: raw.followers,
            following: raw.following,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

impl From<Profile> for RawProfile {
    fn from(profile: Profile) -> Self {
        Self {
            login: profile.login,
            id: profile.id,
            node_id: profile.node_id,
            avatar_url: profile.avatar_url,
            gravatar_id: profile.gravatar_id,
            url: profile.url,
            html_url: profile.html_url,
            followers_url: profile.followers_url,
            following_url: profile.following_url,
            gists_url: profile.gists_url,
            starred_url: profile.starred_url,
            subscriptions_url: profile.subscriptions_url,
            organizations_url: profile.organizations_url,
            repos_url: profile.repos_url,
            events_url: profile.events_url,
            received_events_url: profile.received_events_url,
            r#type: profile.r#type,
            site_admin: profile.site_admin,
            name: profile.name,
            company: profile.company,
            blog: profile.blog,
            location: profile.location,
            email: profile.email,
            hireable: profile.hireable,
            bio: profile.bio,
            twitter_username: profile.twitter_username,
            public_repos: profile.public_repos,
            public_gists: profile.public_gists,
            followers: profile.followers,
            following: profile.following,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use convert_case::{Case, Casing};
    use std::collections::BTreeSet;

    fn keys(value: &serde_json::Value) -> BTreeSet<String> {
        value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>()
    }

    #[test]
    fn test_normalize_moves_values_unchanged() {
        let raw = fixtures::raw_profile();
        let profile = normalize(raw.clone());

        assert_eq!(profile.login, "garyascuy");
        assert_eq!(profile.node_id, raw.node_id);
        assert_eq!(profile.received_events_url, raw.received_events_url);
        assert_eq!(profile.r#type, "User");
        assert_eq!(profile.site_admin, Some(false));
        assert_eq!(profile.company, None);
        assert_eq!(profile.blog.as_deref(), Some(""));
        assert_eq!(profile.public_repos, 25);
        assert_eq!(profile.created_at, "2015-01-01T00:00:00Z");
    }

    #[test]
    fn test_camel_case_keys_map_back_to_wire_keys() {
        let raw_json = fixtures::raw_profile_json();
        let raw: RawProfile = serde_json::from_value(raw_json.clone()).unwrap();
        let profile_json = serde_json::to_value(normalize(raw)).unwrap();

        let rederived = keys(&profile_json)
            .into_iter()
            .map(|key| key.to_case(Case::Snake))
            .collect::<BTreeSet<_>>();

        assert_eq!(keys(&profile_json).len(), keys(&raw_json).len());
        assert_eq!(rederived, keys(&raw_json));
    }

    #[test]
    fn test_profile_uses_camel_case_keys() {
        let profile_json = serde_json::to_value(fixtures::profile()).unwrap();

        assert_eq!(profile_json["nodeId"], "MDQ6VXNlcjEyMzQ1Ng==");
        assert_eq!(profile_json["type"], "User");
        assert_eq!(profile_json["twitterUsername"], serde_json::Value::Null);
        assert_eq!(profile_json["publicRepos"], 25);
        assert!(profile_json.get("node_id").is_none());
    }

    #[test]
    fn test_conversion_is_bijective() {
        let raw = fixtures::raw_profile();
        let back: RawProfile = normalize(raw.clone()).into();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_missing_optional_fields_decode_as_none() {
        let mut raw_json = fixtures::raw_profile_json();
        let object = raw_json.as_object_mut().unwrap();
        object.remove("company");
        object.remove("hireable");
        object.remove("twitter_username");

        let profile = normalize(serde_json::from_value(raw_json).unwrap());

        assert_eq!(profile.company, None);
        assert_eq!(profile.hireable, None);
        assert_eq!(profile.twitter_username, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut raw_json = fixtures::raw_profile_json();
        raw_json["plan"] = serde_json::json!({ "name": "free" });

        let raw: RawProfile = serde_json::from_value(raw_json).unwrap();
        assert_eq!(raw, fixtures::raw_profile());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut raw_json = fixtures::raw_profile_json();
        raw_json["public_repos"] = serde_json::json!("twenty-five");

        assert!(serde_json::from_value::<RawProfile>(raw_json).is_err());
    }
}
