use crate::model::{Hierarchy, UserId};

/// A calendar owned by a user, exported as a `.cal` file.
#[derive(Debug, Clone)]
pub struct Calendar {
    user: UserId,
    pub name: String,
}

impl Calendar {
    pub(crate) fn new(user: UserId, name: &str) -> Self {
        Calendar {
            user,
            name: name.to_string(),
        }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    /// `{user path}/{calendar}/{timestamp}_{user}_{calendar}.cal`
    pub fn path(&self, hierarchy: &Hierarchy) -> String {
        let user = hierarchy.user(self.user);
        format!(
            "{}/{}/{}_{}_{}.cal",
            user.path(hierarchy),
            self.name,
            hierarchy.timestamp(),
            user.name,
            self.name
        )
    }
}
