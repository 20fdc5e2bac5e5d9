//! Sample profile data shared by unit and integration tests.
use crate::profile::{Profile, RawProfile};
use serde_json::{Value, json};

/// Wire payload for the `garyascuy` account.
pub fn raw_profile_json() -> Value {
    json!({
        "login": "garyascuy",
        "id": 123456,
        "node_id": "MDQ6VXNlcjEyMzQ1Ng==",
        "avatar_url": "https://avatars.githubusercontent.com/u/123456?v=4",
        "gravatar_id": "",
        "url": "https://api.github.com/users/garyascuy",
        "html_url": "https://github.com/garyascuy",
        "followers_url": "https://api.github.com/users/garyascuy/followers",
        "following_url": "https://api.github.com/users/garyascuy/following{/other_user}",
        "gists_url": "https://api.github.com/users/garyascuy/gists{/gist_id}",
        "starred_url": "https://api.github.com/users/garyascuy/starred{/owner}{/repo}",
        "subscriptions_url": "https://api.github.com/users/garyascuy/subscriptions",
        "organizations_url": "https://api.github.com/users/garyascuy/orgs",
        "repos_url": "https://api.github.com/users/garyascuy/repos",
        "events_url": "https://api.github.com/users/garyascuy/events{/privacy}",
        "received_events_url": "https://api.github.com/users/garyascuy/received_events",
        "type": "User",
        "site_admin": false,
        "name": "Gary Ascuy",
        "company": null,
        "blog": "",
        "location": "Colombia",
        "email": null,
        "hireable": null,
        "bio": "Software Developer",
        "twitter_username": null,
        "public_repos": 25,
        "public_gists": 5,
        "followers": 100,
        "following": 50,
        "created_at": "2015-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

/// [`raw_profile_json`] as a typed record.
pub fn raw_profile() -> RawProfile {
    RawProfile {
        login: "garyascuy".into(),
        id: 123456,
        node_id: "MDQ6VXNlcjEyMzQ1Ng==".into(),
        avatar_url: "https://avatars.githubusercontent.com/u/123456?v=4".into(),
        gravatar_id: "".into(),
        url: "https://api.github.com/users/garyascuy".into(),
        html_url: "https://github.com/garyascuy".into(),
        followers_url: "https://api.github.com/users/garyascuy/followers".into(),
        following_url: "https://api.github.com/users/garyascuy/following{/other_user}".into(),
        gists_url: "https://api.github.com/users/garyascuy/gists{/gist_id}".into(),
        starred_url: "https://api.github.com/users/garyascuy/starred{/owner}{/repo}".into(),
        subscriptions_url: "https://api.github.com/users/garyascuy/subscriptions".into(),
        organizations_url: "https://api.github.com/users/garyascuy/orgs".into(),
        repos_url: "https://api.github.com/users/garyascuy/repos".into(),
        events_url: "https://api.github.com/users/garyascuy/events{/privacy}".into(),
        received_events_url: "https://api.github.com/users/garyascuy/received_events".into(),
        r#type: "User".into(),
        site_admin: Some(false),
        name: Some("Gary Ascuy".into()),
        company: None,
        blog: Some("".into()),
        location: Some("Colombia".into()),
        email: None,
        hireable: None,
        bio: Some("Software Developer".into()),
        twitter_username: None,
        public_repos: 25,
        public_gists: 5,
        followers: 100,
        following: 50,
        created_at: "2015-01-01T00:00:00Z".into(),
        updated_at: "2024-01-01T00:00:00Z".into(),
    }
}

/// [`raw_profile`] after normalization.
pub fn profile() -> Profile {
    raw_profile().into()
}

/// A profile with every optional field filled in.
pub fn complete_profile() -> Profile {
    Profile {
        company: Some("Acme Corp".into()),
        blog: Some("https://garyascuy.com".into()),
        email: Some("gary@example.com".into()),
        hireable: Some(true),
        twitter_username: Some("garyascuy".into()),
        ..profile()
    }
}
