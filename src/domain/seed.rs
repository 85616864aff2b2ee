//! Default showcase content written into an empty local profile.

use super::model::{Client, Project};

fn project(id: &str, name: &str, description: &str, image_url: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

fn client(id: &str, name: &str, designation: &str, description: &str, image_url: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Luxury Villa Consultation",
            "Expert consultation for a high-end villa project in Beverly Hills, focusing on maximizing value.",
            "https://images.unsplash.com/photo-1613490493576-7fde63acd811?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        ),
        project(
            "2",
            "Modern Apartment Design",
            "Full interior design renovation for a downtown penthouse suite with minimalist aesthetics.",
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        ),
        project(
            "3",
            "Commercial Marketing",
            "Strategic marketing campaign for a new office complex, resulting in 100% occupancy pre-launch.",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        ),
        project(
            "4",
            "Estate Planning & Sales",
            "Comprehensive estate planning and successful sale of a historic countryside manor.",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        ),
    ]
}

pub fn default_clients() -> Vec<Client> {
    vec![
        client(
            "1",
            "Rowhan Smith",
            "CEO, Foreclosure",
            "RealTrust helped us find the perfect office space. Their team is professional and dedicated.",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        ),
        client(
            "2",
            "Shipra Kayak",
            "Brand Designer",
            "Amazing experience! They understood my needs perfectly and delivered beyond expectations.",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        ),
        client(
            "3",
            "John Lepore",
            "Architect",
            "The consultation provided was top-notch. I highly recommend their services to everyone.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        ),
        client(
            "4",
            "Marry Freeman",
            "Marketing Manager",
            "Their marketing strategies are brilliant. We saw a huge uptake in inquiries immediately.",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        ),
        client(
            "5",
            "Lucy",
            "Sales Rep",
            "Professional, reliable, and results-oriented. The best real estate team I have worked with.",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        ),
    ]
}
