use std::sync::{PoisonError, RwLock};

use crate::route::{
	course::model::{Course, Level},
	message::model::Message,
};

/// Process-lifetime, non-durable lists of messages and courses.
///
/// Each list is guarded by its own lock, so a single append is atomic, but
/// nothing orders appends from concurrent requests and nothing survives a
/// restart.
#[derive(Debug, Default)]
pub struct Board {
	messages: RwLock<Vec<Message>>,
	courses: RwLock<Vec<Course>>,
}

impl Board {
	pub fn new(messages: Vec<Message>, courses: Vec<Course>) -> Self {
		Self {
			messages: RwLock::new(messages),
			courses: RwLock::new(courses),
		}
	}

	/// The board as it looks on a fresh start.
	pub fn seeded() -> Self {
		Self::new(
			vec![
				Message::new("Message One", "Message One Content"),
				Message::new("Message Two", "Message Two Content"),
				Message::new("Message Three", "Message Three Content"),
			],
			vec![Course {
				title: "Python 101".into(),
				description: "Learn Python basics".into(),
				price: 34.0,
				available: true,
				level: Level::Beginner,
			}],
		)
	}

	pub fn messages(&self) -> Vec<Message> {
		self.messages
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub fn push_message(&self, message: Message) {
		self.messages
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.push(message);
	}

	pub fn courses(&self) -> Vec<Course> {
		self.courses
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub fn push_course(&self, course: Course) {
		self.courses
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.push(course);
	}
}
