//! Draft-to-record assembly.
//!
//! A draft carries everything the caller may supply. Identity (and the creation date for
//! timestamped entities) is attached here and nowhere else.

use super::{
    Client, ContactSubmission, NewClient, NewContactSubmission, NewProject, NewSubscriber,
    Project, Subscriber,
};

/// Records that can be addressed by id for deletion.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Drafts that become a record once an id is attached.
pub trait Keyed {
    type Record;

    fn with_id(self, id: String) -> Self::Record;
}

/// Drafts that additionally receive a creation timestamp.
pub trait Timestamped {
    type Record;

    fn with_id_and_date(self, id: String, date: String) -> Self::Record;
}

impl Keyed for NewProject {
    type Record = Project;

    fn with_id(self, id: String) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl Keyed for NewClient {
    type Record = Client;

    fn with_id(self, id: String) -> Client {
        Client {
            id,
            name: self.name,
            designation: self.designation,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl Timestamped for NewContactSubmission {
    type Record = ContactSubmission;

    fn with_id_and_date(self, id: String, date: String) -> ContactSubmission {
        ContactSubmission {
            id,
            full_name: self.full_name,
            email: self.email,
            mobile: self.mobile,
            city: self.city,
            date,
        }
    }
}

impl Timestamped for NewSubscriber {
    type Record = Subscriber;

    fn with_id_and_date(self, id: String, date: String) -> Subscriber {
        Subscriber {
            id,
            email: self.email,
            date,
        }
    }
}
