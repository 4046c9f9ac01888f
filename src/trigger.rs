use core::fmt::{self, Display, Formatter};

/// Trigger events the server-side form declarations emit.
///
/// The binder accepts any event name the DOM accepts; this vocabulary exists so
/// unexpected names can be called out in logs at bind time instead of surfacing
/// as a trigger that never fires.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriggerEvent {
	Blur,
	Change,
	Click,
	DoubleClick,
	Input,
	KeyUp,
	KeyDown,
	Select,
}
impl TriggerEvent {
	/// The DOM event name, as written in the trigger attribute.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			TriggerEvent::Blur => "blur",
			TriggerEvent::Change => "change",
			TriggerEvent::Click => "click",
			TriggerEvent::DoubleClick => "dblclick",
			TriggerEvent::Input => "input",
			TriggerEvent::KeyUp => "keyup",
			TriggerEvent::KeyDown => "keydown",
			TriggerEvent::Select => "select",
		}
	}

	#[must_use]
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"blur" => Some(TriggerEvent::Blur),
			"change" => Some(TriggerEvent::Change),
			"click" => Some(TriggerEvent::Click),
			"dblclick" => Some(TriggerEvent::DoubleClick),
			"input" => Some(TriggerEvent::Input),
			"keyup" => Some(TriggerEvent::KeyUp),
			"keydown" => Some(TriggerEvent::KeyDown),
			"select" => Some(TriggerEvent::Select),
			_ => None,
		}
	}
}
impl Display for TriggerEvent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
