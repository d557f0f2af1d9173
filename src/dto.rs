use serde::{Deserialize, Serialize};

/// A stored credential record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub label: String,
    pub login: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl Account {
    pub fn new(
        label: impl Into<String>,
        login: impl Into<String>,
        password: Option<String>,
        account_type: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            login: login.into(),
            password,
            account_type: account_type.into(),
        }
    }
}

/// One line of the account listing. The password itself is never rendered.
#[derive(Debug, Serialize, PartialEq)]
pub struct AccountRow<'a> {
    pub index: usize,
    pub label: &'a str,
    pub login: &'a str,
    #[serde(rename = "type")]
    pub account_type: &'a str,
    #[serde(serialize_with = "serialize_password_flag")]
    pub password: bool,
}

impl<'a> AccountRow<'a> {
    pub fn new(index: usize, account: &'a Account) -> Self {
        Self {
            index,
            label: &account.label,
            login: &account.login,
            account_type: &account.account_type,
            password: account.password.is_some(),
        }
    }
}

fn serialize_password_flag<S>(is_set: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(if *is_set { "set" } else { "" })
}
