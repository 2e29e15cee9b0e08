use crate::ids::{PaperId, PersonId};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// An author, presenter or chairperson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[builder(setter(into))]
    pub id: PersonId,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

/// A paper presented in one or more sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    #[builder(setter(into))]
    pub id: PaperId,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default)]
    #[serde(default)]
    pub authors: Vec<PersonId>,
    #[builder(default)]
    #[serde(default)]
    pub keywords: Vec<String>,
}
