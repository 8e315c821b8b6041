//! Run with `cargo test --features tracing`.
#![cfg(feature = "tracing")]

use std::{
	fmt,
	sync::{Arc, Mutex},
};

use sorted_search::{legacy, search, try_search_by, Position};
use tracing::{
	field::{Field, Visit},
	span::{Attributes, Id, Record},
	Event, Metadata, Subscriber,
};

#[derive(Debug, Default, PartialEq)]
struct Recorded {
	target: String,
	message: String,
	len: u64,
	calls: u64,
	index: u64,
}

impl Visit for Recorded {
	fn record_u64(&mut self, field: &Field, value: u64) {
		match field.name() {
			"len" => self.len = value,
			"calls" => self.calls = value,
			"index" => self.index = value,
			_ => (),
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}")
		}
	}
}

/// Collects every event it is handed.
#[derive(Clone, Default)]
struct Collector {
	events: Arc<Mutex<Vec<Recorded>>>,
}

impl Collector {
	fn take(&self) -> Vec<Recorded> {
		std::mem::take(&mut *self.events.lock().unwrap())
	}
}

impl Subscriber for Collector {
	fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
		true
	}

	fn new_span(&self, _span: &Attributes<'_>) -> Id {
		Id::from_u64(1)
	}

	fn record(&self, _span: &Id, _values: &Record<'_>) {}

	fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

	fn event(&self, event: &Event<'_>) {
		let mut recorded = Recorded {
			target: event.metadata().target().to_string(),
			..Default::default()
		};
		event.record(&mut recorded);
		self.events.lock().unwrap().push(recorded)
	}

	fn enter(&self, _span: &Id) {}

	fn exit(&self, _span: &Id) {}
}

fn recorded(target: &str, message: &str, len: u64, calls: u64, index: u64) -> Recorded {
	Recorded {
		target: target.to_string(),
		message: message.to_string(),
		len,
		calls,
		index,
	}
}

#[test]
pub fn one_event_per_search() {
	let collector = Collector::default();
	let s = [1, 3, 5, 7, 9];

	tracing::subscriber::with_default(collector.clone(), || {
		assert_eq!(search(&s, &5), Position::Found(2));
		assert_eq!(search(&s, &4), Position::Vacant(2));
		assert_eq!(search(&[0u8; 0], &4), Position::Vacant(0));
		assert_eq!(legacy::search(&s, &10), Some(-5));
	});

	assert_eq!(
		collector.take(),
		vec![
			recorded("sorted_search", "found", 5, 1, 2),
			recorded("sorted_search", "vacant", 5, 2, 2),
			recorded("sorted_search", "vacant", 0, 0, 0),
			recorded("sorted_search", "vacant", 5, 2, 5),
		]
	);
}

#[test]
pub fn no_event_on_comparator_failure() {
	let collector = Collector::default();

	tracing::subscriber::with_default(collector.clone(), || {
		let failed = try_search_by(&[1, 2, 3], &2, |_: &i32, _: &i32| Err::<std::cmp::Ordering, _>("boom"));
		assert_eq!(failed, Err("boom"));
	});

	assert!(collector.take().is_empty())
}
