//! Demo events loaded at startup so a fresh process has something to browse.

use chrono::{NaiveDate, Utc};

use crate::models::{Category, Event};

fn demo_event(
    id: &str,
    title: &str,
    description: &str,
    date: (i32, u32, u32),
    location: &str,
    category: Category,
    attendees: &[&str],
    max_attendees: u32,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap_or_default(),
        location: location.to_string(),
        category,
        user_id: None,
        attendee_count: attendees.len() as u32,
        max_attendees: Some(max_attendees),
        attendees: attendees.iter().map(|id| id.to_string()).collect(),
        created_at: Utc::now(),
    }
}

pub fn demo_events() -> Vec<Event> {
    vec![
        demo_event(
            "1",
            "Rust Conference 2026",
            "Join us for the biggest Rust conference of the year featuring the latest updates, best practices, and networking opportunities.",
            (2026, 10, 15),
            "Dhaka, Bangladesh",
            Category::Conference,
            &["user1", "user2", "user3"],
            200,
        ),
        demo_event(
            "2",
            "Async Workshop: Advanced Patterns",
            "Deep dive into advanced async patterns and modern development techniques in this hands-on workshop.",
            (2026, 9, 20),
            "Chittagong, Bangladesh",
            Category::Workshop,
            &["user4", "user5"],
            30,
        ),
        demo_event(
            "3",
            "Frontend Developers Meetup",
            "Monthly meetup for frontend developers to share experiences, learn new technologies, and network.",
            (2026, 9, 10),
            "Sylhet, Bangladesh",
            Category::Meetup,
            &["user1", "user6"],
            25,
        ),
        demo_event(
            "4",
            "Web Development Bootcamp",
            "Intensive 3-day bootcamp covering full-stack web development from basics to advanced concepts.",
            (2026, 11, 5),
            "Rajshahi, Bangladesh",
            Category::Workshop,
            &["user7", "user8", "user9"],
            50,
        ),
        demo_event(
            "5",
            "Tech Innovation Summit",
            "Annual summit bringing together tech leaders, entrepreneurs, and innovators to discuss the future of technology.",
            (2026, 12, 1),
            "Dhaka, Bangladesh",
            Category::Conference,
            &["user1", "user10", "user11"],
            300,
        ),
        demo_event(
            "6",
            "Tokio Community Meetup",
            "Local community meetup featuring talks on performance optimization and new runtime features.",
            (2026, 9, 25),
            "Khulna, Bangladesh",
            Category::Meetup,
            &["user12", "user13"],
            40,
        ),
        demo_event(
            "7",
            "UI/UX Design Workshop",
            "Learn modern UI/UX design principles and tools in this practical workshop session.",
            (2026, 10, 8),
            "Barisal, Bangladesh",
            Category::Workshop,
            &["user14", "user15", "user16"],
            35,
        ),
        demo_event(
            "8",
            "DevOps Conference 2026",
            "Comprehensive conference covering DevOps practices, tools, and methodologies for modern development.",
            (2026, 11, 20),
            "Rangpur, Bangladesh",
            Category::Conference,
            &["user17", "user18", "user19", "user20"],
            150,
        ),
    ]
}
