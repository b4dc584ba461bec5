use crate::model::{Hierarchy, UserId};

/// Folder name used for contact exports inside a user's directory.
const CONTACTS_DIR: &str = "contacts";

/// The address book of a user, exported as a `.vcf` file.
///
/// Every user has exactly one, even when `ignore` is set.
#[derive(Debug, Clone)]
pub struct Contacts {
    user: UserId,
    pub ignore: bool,
}

impl Contacts {
    pub(crate) fn new(user: UserId, ignore: bool) -> Self {
        Contacts { user, ignore }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    /// `{user path}/contacts/{timestamp}_{user}_contacts.vcf`
    pub fn path(&self, hierarchy: &Hierarchy) -> String {
        let user = hierarchy.user(self.user);
        format!(
            "{}/{}/{}_{}_contacts.vcf",
            user.path(hierarchy),
            CONTACTS_DIR,
            hierarchy.timestamp(),
            user.name
        )
    }
}
