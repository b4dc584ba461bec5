use crate::error::{CapsuleError, CapsuleResult};
use crate::model::{Hierarchy, ServerId, User, UserId};

/// A Nextcloud instance, identified by its host name or IP.
#[derive(Debug, Clone)]
pub struct Server {
    id: ServerId,
    pub host: String,
    users: Vec<UserId>,
}

impl Server {
    pub(crate) fn new(id: ServerId, host: &str) -> Self {
        Server {
            id,
            host: host.to_string(),
            users: Vec::new(),
        }
    }

    /// Build a server and its users from a `{ host: { user: {...} } }` table.
    ///
    /// Only the first host of `config` is used; any further hosts are skipped
    /// with a warning. Use [`Hierarchy::from_config`] for multi-host configs.
    pub fn from_config(hierarchy: &mut Hierarchy, config: &toml::Table) -> CapsuleResult<ServerId> {
        let mut hosts = config.iter();

        let Some((host, users)) = hosts.next() else {
            return Err(CapsuleError::Config("no server host configured".into()));
        };

        let ignored: Vec<_> = hosts.map(|(h, _)| h.as_str()).collect();
        if !ignored.is_empty() {
            log::warn!(
                "Only server '{}' is built from this entry, ignoring: {}",
                host,
                ignored.join(", ")
            );
        }

        if host.is_empty() {
            return Err(CapsuleError::Config("server host must not be empty".into()));
        }

        let users = users.as_table().ok_or_else(|| {
            CapsuleError::Config(format!(
                "server '{}' must map user names to user settings",
                host
            ))
        })?;

        let id = hierarchy.add_server(host);

        for (name, settings) in users {
            let mut single = toml::Table::new();
            single.insert(name.clone(), settings.clone());
            User::from_config(hierarchy, &single, id)?;
        }

        Ok(id)
    }

    pub fn id(&self) -> ServerId {
        self.id
    }

    pub fn users<'a>(&'a self, hierarchy: &'a Hierarchy) -> impl Iterator<Item = &'a User> {
        self.users.iter().map(|id| hierarchy.user(*id))
    }

    pub(crate) fn push_user(&mut self, user: UserId) {
        self.users.push(user);
    }

    /// Archive path segment: the host with every `.` replaced by `_`.
    pub fn path(&self) -> String {
        self.host.replace('.', "_")
    }
}
