//! Entity hierarchy built from the snapshot configuration.
//!
//! Entities live in per-kind tables owned by a [`Hierarchy`]. Parents own
//! lists of their children's ids, children point back at their parent by id.
//! Archive paths are derived from that position plus the hierarchy's shared
//! [`SnapshotTime`].

mod calendar;
mod contacts;
mod server;
mod user;

pub use calendar::Calendar;
pub use contacts::Contacts;
pub use server::Server;
pub use user::User;

use crate::error::CapsuleResult;
use crate::timestamp::SnapshotTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactsId(usize);

/// Arena holding every entity of one snapshot run.
///
/// Ids are only handed out by the hierarchy that created them, so lookups
/// through [`Hierarchy::server`] and friends always hit.
#[derive(Debug)]
pub struct Hierarchy {
    timestamp: SnapshotTime,
    servers: Vec<Server>,
    users: Vec<User>,
    calendars: Vec<Calendar>,
    contacts: Vec<Contacts>,
}

impl Hierarchy {
    pub fn new(timestamp: SnapshotTime) -> Self {
        Hierarchy {
            timestamp,
            servers: Vec::new(),
            users: Vec::new(),
            calendars: Vec::new(),
            contacts: Vec::new(),
        }
    }

    /// Build one server per top-level key of `config`, in file order.
    ///
    /// ```toml
    /// ["cloud.example.com".alice]
    /// password = "secret"
    /// calendar_names = ["personal"]
    /// ignore_contacts = false
    /// ```
    pub fn from_config(config: &toml::Table, timestamp: SnapshotTime) -> CapsuleResult<Self> {
        let mut hierarchy = Hierarchy::new(timestamp);

        for (host, users) in config {
            let mut single = toml::Table::new();
            single.insert(host.clone(), users.clone());
            Server::from_config(&mut hierarchy, &single)?;
        }

        Ok(hierarchy)
    }

    pub fn timestamp(&self) -> SnapshotTime {
        self.timestamp
    }

    pub fn servers(&self) -> impl Iterator<Item = &Server> {
        self.servers.iter()
    }

    pub fn server(&self, id: ServerId) -> &Server {
        &self.servers[id.0]
    }

    pub fn user(&self, id: UserId) -> &User {
        &self.users[id.0]
    }

    pub fn calendar(&self, id: CalendarId) -> &Calendar {
        &self.calendars[id.0]
    }

    pub fn contacts(&self, id: ContactsId) -> &Contacts {
        &self.contacts[id.0]
    }

    pub(crate) fn add_server(&mut self, host: &str) -> ServerId {
        let id = ServerId(self.servers.len());
        self.servers.push(Server::new(id, host));
        id
    }

    /// Insert a user together with its calendars and its contacts entity,
    /// and register it with its server.
    pub(crate) fn add_user(
        &mut self,
        server: ServerId,
        name: &str,
        password: &str,
        calendar_names: &[String],
        ignore_contacts: bool,
    ) -> UserId {
        let id = UserId(self.users.len());

        let calendars = calendar_names
            .iter()
            .map(|calendar_name| {
                let calendar_id = CalendarId(self.calendars.len());
                self.calendars.push(Calendar::new(id, calendar_name));
                calendar_id
            })
            .collect();

        let contacts = ContactsId(self.contacts.len());
        self.contacts.push(Contacts::new(id, ignore_contacts));

        self.users
            .push(User::new(id, server, name, password, calendars, contacts));
        self.servers[server.0].push_user(id);

        id
    }
}
