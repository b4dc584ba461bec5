use std::fmt;

use serde::Deserialize;

use crate::error::{CapsuleError, CapsuleResult};
use crate::model::{Calendar, CalendarId, Contacts, ContactsId, Hierarchy, ServerId, UserId};

/// Settings of one user entry in the config file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UserConfig {
    password: String,
    #[serde(default)]
    calendar_names: Vec<String>,
    #[serde(default)]
    ignore_contacts: bool,
}

/// A user account on a [`Server`](crate::model::Server).
#[derive(Clone)]
pub struct User {
    id: UserId,
    server: ServerId,
    pub name: String,
    pub password: String,
    calendars: Vec<CalendarId>,
    contacts: ContactsId,
}

impl User {
    pub(crate) fn new(
        id: UserId,
        server: ServerId,
        name: &str,
        password: &str,
        calendars: Vec<CalendarId>,
        contacts: ContactsId,
    ) -> Self {
        User {
            id,
            server,
            name: name.to_string(),
            password: password.to_string(),
            calendars,
            contacts,
        }
    }

    /// Build a user from a `{ name: { password, calendar_names?, ignore_contacts? } }`
    /// table and attach it to `server`.
    pub fn from_config(
        hierarchy: &mut Hierarchy,
        config: &toml::Table,
        server: ServerId,
    ) -> CapsuleResult<UserId> {
        let host = hierarchy.server(server).host.clone();

        let Some((name, settings)) = config.iter().next() else {
            return Err(CapsuleError::Config(format!(
                "empty user entry on server '{}'",
                host
            )));
        };

        let settings: UserConfig = settings.clone().try_into().map_err(|e| {
            CapsuleError::Config(format!("user '{}' on server '{}': {}", name, host, e))
        })?;

        Ok(hierarchy.add_user(
            server,
            name,
            &settings.password,
            &settings.calendar_names,
            settings.ignore_contacts,
        ))
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn server(&self) -> ServerId {
        self.server
    }

    pub fn calendars<'a>(&'a self, hierarchy: &'a Hierarchy) -> impl Iterator<Item = &'a Calendar> {
        self.calendars.iter().map(|id| hierarchy.calendar(*id))
    }

    pub fn contacts<'a>(&self, hierarchy: &'a Hierarchy) -> &'a Contacts {
        hierarchy.contacts(self.contacts)
    }

    pub fn path(&self, hierarchy: &Hierarchy) -> String {
        format!("{}/{}", hierarchy.server(self.server).path(), self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("server", &self.server)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("calendars", &self.calendars)
            .field("contacts", &self.contacts)
            .finish()
    }
}
