use serde::Deserialize;

#[derive(Default, Deserialize)]
#[serde(default)]
pub(crate) struct Owner {
    #[serde(rename = "avatar_url", deserialize_with = "super::lenient")]
    pub(crate) avatar_url: Option<String>,
}
